use hammer_rmf::error::Result;
use hammer_rmf::types::{Camera, Color, Vector2, Vector3};
use hammer_rmf::{
    decode_document, encode_document, Corner, DocInfo, Entity, Face, Group, MapObject, Path,
    PropertyMap, RmfDocument, Solid, VisGroup, World,
};
use pretty_assertions::assert_eq;
use tracing::info;
use tracing_test::traced_test;

fn face(texture: &str, offset: f32) -> Face {
    Face {
        texture_name: texture.into(),
        reserved_scalar: -1.5,
        u_axis: Vector3::new(1.0, 0.0, 0.0),
        u_shift: offset,
        v_axis: Vector3::new(0.0, -1.0, 0.0),
        v_shift: offset * 2.0,
        rotation: 90.0,
        scale: Vector2::new(0.25, 0.5),
        reserved: [0x11; 16],
        vertices: vec![
            Vector3::new(0.0, 0.0, offset),
            Vector3::new(64.0, 0.0, offset),
            Vector3::new(64.0, 64.0, offset),
            Vector3::new(0.0, 64.0, offset),
        ],
        plane: [
            Vector3::new(0.0, 0.0, offset),
            Vector3::new(64.0, 0.0, offset),
            Vector3::new(64.0, 64.0, offset),
        ],
    }
}

fn solid(texture: &str) -> Solid {
    Solid {
        visgroup_index: 1,
        color: Color::new(0, 128, 255),
        reserved: [1, 2, 3, 4],
        faces: vec![face(texture, 0.0), face(texture, 16.25)],
    }
}

fn brush_entity() -> Entity {
    Entity {
        visgroup_index: 2,
        color: Color::new(220, 30, 220),
        brushes: vec![solid("{LADDER"), solid("AAATRIGGER")],
        classname: "func_ladder".into(),
        reserved_classname: [9, 9, 9, 9],
        flags: 0,
        properties: PropertyMap::from_iter([("targetname", "ladder01"), ("rendermode", "4")]),
        reserved_properties: [7; 14],
        location: Vector3::default(),
        reserved_trailer: [0xFE; 4],
    }
}

/// A group holding a solid and a nested group holding a two brush entity
fn nested_tree() -> MapObject {
    Group {
        visgroup_index: 0,
        color: Color::new(10, 20, 30),
        objects: vec![
            solid("CRATE01").into(),
            Group {
                visgroup_index: 0,
                color: Color::new(40, 50, 60),
                objects: vec![brush_entity().into()],
            }
            .into(),
        ],
    }
    .into()
}

fn full_document() -> RmfDocument {
    RmfDocument {
        visgroups: vec![
            VisGroup {
                name: "detail".into(),
                color: Color::new(255, 0, 0),
                reserved: 0,
                index: 1,
                visible: 1,
                padding: [0; 3],
            },
            VisGroup {
                name: "triggers".into(),
                color: Color::new(0, 255, 0),
                reserved: 0x5A,
                index: 2,
                visible: 0,
                padding: [0xDE, 0xAD, 0x00],
            },
        ],
        root: World {
            reserved_header: [1, 2, 3, 4, 5, 6, 7],
            objects: vec![
                nested_tree(),
                Entity {
                    classname: "info_player_start".into(),
                    properties: PropertyMap::from_iter([("angles", "0 90 0")]),
                    location: Vector3::new(-128.0, 32.5, 36.0),
                    ..Default::default()
                }
                .into(),
            ],
            classname: "worldspawn".into(),
            flags: 0,
            properties: PropertyMap::from_iter([
                ("wad", "\\half-life\\valve\\halflife.wad"),
                ("mapversion", "220"),
                ("skyname", "desert"),
            ]),
            paths: vec![Path {
                name: "train_path".into(),
                classname: "path_corner".into(),
                path_type: 1,
                corners: vec![
                    Corner {
                        location: Vector3::new(0.0, 0.0, 0.0),
                        index: 1,
                        name: "train_path01".into(),
                        properties: PropertyMap::from_iter([("speed", "100")]),
                    },
                    Corner {
                        location: Vector3::new(256.0, 0.0, 0.0),
                        index: 2,
                        name: "train_path02".into(),
                        properties: PropertyMap::new(),
                    },
                ],
            }],
            ..Default::default()
        },
        doc_info: Some(DocInfo {
            version: 0.2,
            camera_index: 1,
            cameras: vec![
                Camera {
                    eye: Vector3::new(0.0, 0.0, 128.0),
                    look_at: Vector3::new(1.0, 0.0, 128.0),
                },
                Camera {
                    eye: Vector3::new(-512.0, 64.0, 64.0),
                    look_at: Vector3::new(0.0, 0.0, 0.0),
                },
            ],
        }),
    }
}

#[traced_test]
#[test]
fn roundtrip_full_document() -> Result<()> {
    let document = full_document();

    let bytes = encode_document(&document)?;
    info!("encoded {} bytes", bytes.len());

    let decoded = decode_document(&bytes)?;
    assert_eq!(decoded, document);
    assert_eq!(encode_document(&decoded)?, bytes);

    Ok(())
}

#[traced_test]
#[test]
fn recursive_dispatch() -> Result<()> {
    let document = RmfDocument {
        root: World {
            objects: vec![nested_tree()],
            ..Default::default()
        },
        ..Default::default()
    };
    let bytes = encode_document(&document)?;
    let decoded = decode_document(&bytes)?;

    let tags: Vec<_> = decoded.objects().map(MapObject::type_tag).collect();
    assert_eq!(
        tags,
        vec!["CMapGroup", "CMapSolid", "CMapGroup", "CMapEntity"]
    );

    let entity = decoded.entities().next().expect("entity should be decoded");
    assert_eq!(entity.brushes.len(), 2);
    assert_eq!(entity.property("targetname"), Some("ladder01"));

    assert_eq!(encode_document(&decoded)?, bytes);

    Ok(())
}

#[test]
fn property_order_survives() -> Result<()> {
    let properties = PropertyMap::from_iter([("a", "1"), ("b", "2"), ("c", "3")]);
    let document = RmfDocument {
        root: World {
            properties,
            ..Default::default()
        },
        ..Default::default()
    };

    let decoded = decode_document(&encode_document(&document)?)?;
    let pairs: Vec<_> = decoded
        .root
        .properties
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(pairs, vec![("a", "1"), ("b", "2"), ("c", "3")]);

    Ok(())
}

#[test]
fn fixed_string_padding_is_ignored() -> Result<()> {
    let document = RmfDocument {
        visgroups: vec![VisGroup {
            name: "foo".into(),
            ..Default::default()
        }],
        ..Default::default()
    };

    let mut bytes = encode_document(&document)?;
    // Name slot starts after the header and visgroup count
    bytes[11 + 4..11 + 128].fill(b'X');

    let decoded = decode_document(&bytes)?;
    assert_eq!(decoded.visgroups[0].name, "foo");

    Ok(())
}

#[test]
fn texture_names_are_collected() -> Result<()> {
    let decoded = decode_document(&encode_document(&full_document())?)?;

    assert_eq!(
        decoded.texture_names().into_iter().collect::<Vec<_>>(),
        vec!["AAATRIGGER", "CRATE01", "{LADDER"]
    );
    assert_eq!(decoded.solids().count(), 3);
    assert_eq!(
        decoded.doc_info.as_ref().and_then(DocInfo::active_camera),
        Some(&Camera {
            eye: Vector3::new(-512.0, 64.0, 64.0),
            look_at: Vector3::new(0.0, 0.0, 0.0),
        })
    );

    Ok(())
}
