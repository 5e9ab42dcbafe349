//! Scene graph nodes stored in an RMF document.
//!
//! Every node exclusively owns its children, so a document is a plain tree. The byte
//! ranges named `reserved*` have no known meaning; they are kept verbatim so a
//! document survives a read/write cycle unchanged.

use crate::properties::PropertyMap;
use crate::types::{Color, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of the scene graph
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(tag = "type"))]
pub enum MapObject {
    World(World),
    Entity(Entity),
    Group(Group),
    Solid(Solid),
}

impl MapObject {
    /// On-disk tag of [`World`]
    pub const WORLD_TAG: &'static str = "CMapWorld";
    /// On-disk tag of [`Entity`]
    pub const ENTITY_TAG: &'static str = "CMapEntity";
    /// On-disk tag of [`Group`]
    pub const GROUP_TAG: &'static str = "CMapGroup";
    /// On-disk tag of [`Solid`]
    pub const SOLID_TAG: &'static str = "CMapSolid";

    /// The type tag written in front of this node
    pub fn type_tag(&self) -> &'static str {
        match self {
            MapObject::World(_) => Self::WORLD_TAG,
            MapObject::Entity(_) => Self::ENTITY_TAG,
            MapObject::Group(_) => Self::GROUP_TAG,
            MapObject::Solid(_) => Self::SOLID_TAG,
        }
    }

    /// Direct children of this node, entity brushes included
    pub fn children(&self) -> Vec<&MapObject> {
        match self {
            MapObject::World(world) => world.objects.iter().collect(),
            MapObject::Group(group) => group.objects.iter().collect(),
            MapObject::Entity(_) | MapObject::Solid(_) => Vec::new(),
        }
    }

    pub fn as_solid(&self) -> Option<&Solid> {
        match self {
            MapObject::Solid(solid) => Some(solid),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            MapObject::Entity(entity) => Some(entity),
            _ => None,
        }
    }
}

impl From<World> for MapObject {
    fn from(value: World) -> Self {
        MapObject::World(value)
    }
}

impl From<Entity> for MapObject {
    fn from(value: Entity) -> Self {
        MapObject::Entity(value)
    }
}

impl From<Group> for MapObject {
    fn from(value: Group) -> Self {
        MapObject::Group(value)
    }
}

impl From<Solid> for MapObject {
    fn from(value: Solid) -> Self {
        MapObject::Solid(value)
    }
}

/// Root node of every document
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    /// Probably a visgroup index and colour, never filled in by the editor
    pub reserved_header: [u8; 7],
    pub objects: Vec<MapObject>,
    pub classname: String,
    pub reserved_classname: [u8; 4],
    pub flags: i32,
    pub properties: PropertyMap,
    pub reserved_properties: [u8; 12],
    pub paths: Vec<Path>,
}

impl Default for World {
    fn default() -> Self {
        Self {
            reserved_header: [0; 7],
            objects: Vec::new(),
            classname: "worldspawn".into(),
            reserved_classname: [0; 4],
            flags: 0,
            properties: PropertyMap::default(),
            reserved_properties: [0; 12],
            paths: Vec::new(),
        }
    }
}

/// A point or brush entity
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entity {
    pub visgroup_index: i32,
    pub color: Color,
    pub brushes: Vec<Solid>,
    pub classname: String,
    pub reserved_classname: [u8; 4],
    pub flags: i32,
    pub properties: PropertyMap,
    pub reserved_properties: [u8; 14],
    pub location: Vector3,
    pub reserved_trailer: [u8; 4],
}

impl Entity {
    /// Entities without brushes sit at a single location
    pub fn is_point_entity(&self) -> bool {
        self.brushes.is_empty()
    }

    /// Look up a key value property
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// User created group of objects
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    pub visgroup_index: i32,
    pub color: Color,
    pub objects: Vec<MapObject>,
}

/// Convex brush
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solid {
    pub visgroup_index: i32,
    pub color: Color,
    pub reserved: [u8; 4],
    pub faces: Vec<Face>,
}

/// Planar boundary of a solid with its texture projection
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    pub texture_name: String,
    /// Unidentified scalar stored right after the texture name
    pub reserved_scalar: f32,
    pub u_axis: Vector3,
    pub u_shift: f32,
    pub v_axis: Vector3,
    pub v_shift: f32,
    pub rotation: f32,
    pub scale: Vector2,
    pub reserved: [u8; 16],
    /// Closed polygon boundary, at least three points
    pub vertices: Vec<Vector3>,
    /// Three points on the plane of the face
    pub plane: [Vector3; 3],
}

impl Default for Face {
    fn default() -> Self {
        Self {
            texture_name: String::new(),
            reserved_scalar: 0.0,
            u_axis: Vector3::default(),
            u_shift: 0.0,
            v_axis: Vector3::default(),
            v_shift: 0.0,
            rotation: 0.0,
            scale: Vector2::new(1.0, 1.0),
            reserved: [0; 16],
            vertices: Vec::new(),
            plane: [Vector3::default(); 3],
        }
    }
}

/// Named chain of corners used by path entities
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    pub name: String,
    pub classname: String,
    pub path_type: i32,
    pub corners: Vec<Corner>,
}

/// A single stop along a [`Path`]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Corner {
    pub location: Vector3,
    pub index: i32,
    pub name: String,
    pub properties: PropertyMap,
}
