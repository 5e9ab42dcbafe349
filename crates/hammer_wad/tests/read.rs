use std::io::Cursor;
use std::path::PathBuf;

use byteorder::{LittleEndian, WriteBytesExt};
use hammer_wad::error::{Error, Result};
use hammer_wad::{LumpType, WadArchive};
use pretty_assertions::assert_eq;
use tracing::info;
use tracing_test::traced_test;

struct Lump {
    name: &'static str,
    type_code: u8,
    data: Vec<u8>,
}

fn mip_texture(name: &str, width: u32, height: u32, fill: u8) -> Vec<u8> {
    let mut data = Vec::new();
    let mut raw_name = [0u8; 16];
    raw_name[..name.len()].copy_from_slice(name.as_bytes());
    data.extend_from_slice(&raw_name);
    data.write_u32::<LittleEndian>(width).unwrap();
    data.write_u32::<LittleEndian>(height).unwrap();

    let mut offset = 40;
    for level in 0..4 {
        data.write_u32::<LittleEndian>(offset).unwrap();
        offset += (width >> level) * (height >> level);
    }
    for level in 0..4 {
        let size = ((width >> level) * (height >> level)) as usize;
        data.extend(std::iter::repeat(fill).take(size));
    }

    data.extend_from_slice(&[0, 0]);
    for color in 0..=255u8 {
        data.extend_from_slice(&[color, 255 - color, 0]);
    }
    data
}

fn font(row_height: u32) -> Vec<u8> {
    let mut data = Vec::new();
    for value in [256, 64, 4, row_height] {
        data.write_u32::<LittleEndian>(value).unwrap();
    }
    for character in 0..256u32 {
        data.write_u32::<LittleEndian>(character * 6).unwrap();
        data.write_u32::<LittleEndian>(6).unwrap();
    }
    data
}

fn build_wad(lumps: &[Lump]) -> Vec<u8> {
    let mut data = Vec::new();
    let mut table = Vec::new();

    for lump in lumps {
        let offset = 12 + data.len() as u32;
        table.write_u32::<LittleEndian>(offset).unwrap();
        table.write_u32::<LittleEndian>(lump.data.len() as u32).unwrap();
        table.write_u32::<LittleEndian>(lump.data.len() as u32).unwrap();
        table.write_u8(lump.type_code).unwrap();
        table.write_u8(0).unwrap();
        table.write_u16::<LittleEndian>(0).unwrap();
        let mut name = [0u8; 16];
        name[..lump.name.len()].copy_from_slice(lump.name.as_bytes());
        table.extend_from_slice(&name);

        data.extend_from_slice(&lump.data);
    }

    let mut wad = b"WAD3".to_vec();
    wad.write_u32::<LittleEndian>(lumps.len() as u32).unwrap();
    wad.write_u32::<LittleEndian>(12 + data.len() as u32).unwrap();
    wad.extend_from_slice(&data);
    wad.extend_from_slice(&table);
    wad
}

fn sample_wad() -> Vec<u8> {
    build_wad(&[
        Lump {
            name: "{fence",
            type_code: 0x43,
            data: mip_texture("{fence", 16, 8, 255),
        },
        Lump {
            name: "CRATE01",
            type_code: 0x43,
            data: mip_texture("CRATE01", 32, 32, 255),
        },
        Lump {
            name: "FONT1",
            type_code: 0x46,
            data: font(12),
        },
        Lump {
            name: "ODDITY",
            type_code: 0x40,
            data: vec![0; 8],
        },
    ])
}

#[traced_test]
#[test]
fn decode_textures() -> Result<()> {
    let wad = WadArchive::new(Cursor::new(sample_wad()))?;
    assert_eq!(wad.len(), 4);

    for (name, lump) in wad.lumps() {
        info!("{name}: {:?}", lump.lump_type().ok());
    }

    assert_eq!(wad.decode_dimensions("{FENCE")?, (16, 8));
    assert_eq!(wad.decode_dimensions("crate01")?, (32, 32));
    assert_eq!(wad.decode_dimensions("font1")?, (256, 64));

    let fence = wad.decode_pixels("{fence")?;
    assert_eq!(fence.pixels.len(), 16 * 8 * 4);
    assert!(fence.pixels.chunks(4).all(|p| p[3] == 0.0));

    let crate01 = wad.decode_pixels("CRATE01")?;
    assert!(crate01.pixels.chunks(4).all(|p| p[3] == 1.0));
    assert_eq!(crate01.pixel(0, 0), Some([1.0, 0.0, 0.0, 1.0]));
    assert_eq!(&crate01.to_rgba8()[..4], &[255, 0, 0, 255]);

    Ok(())
}

#[traced_test]
#[test]
fn decode_font_glyphs() -> Result<()> {
    let wad = WadArchive::new(Cursor::new(sample_wad()))?;

    let font = wad.decode_font("FONT1")?;
    assert_eq!(font.row_count, 4);
    assert_eq!(font.row_height, 12);
    assert_eq!(font.glyph(b'!').map(|g| g.start_offset), Some(33 * 6));

    assert!(matches!(
        wad.decode_font("CRATE01"),
        Err(Error::UnsupportedLumpType(0x43))
    ));

    Ok(())
}

#[test]
fn unsupported_lump_type() -> Result<()> {
    let wad = WadArchive::new(Cursor::new(sample_wad()))?;

    let lump = wad.lump_for("oddity")?;
    assert!(lump.lump_type().is_err());
    assert!(matches!(
        wad.decode_dimensions("ODDITY"),
        Err(Error::UnsupportedLumpType(0x40))
    ));
    assert!(matches!(
        wad.decode_pixels("FONT1"),
        Err(Error::UnsupportedLumpType(0x46))
    ));
    assert_eq!(
        wad.lump_for("FONT1")?.lump_type().ok(),
        Some(LumpType::Font)
    );

    Ok(())
}

#[test]
fn missing_texture() -> Result<()> {
    let wad = WadArchive::new(Cursor::new(sample_wad()))?;

    assert!(matches!(
        wad.decode_dimensions("NULL"),
        Err(Error::TextureNotFound(name)) if name == "NULL"
    ));

    Ok(())
}

#[traced_test]
#[test]
fn open_from_disk() -> Result<()> {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("open_from_disk.wad");
    std::fs::write(&path, sample_wad())?;

    let wad = WadArchive::open(&path)?;
    assert!(wad.has_texture("crate01"));
    assert_eq!(wad.texture_names().count(), 4);
    wad.close();

    std::fs::remove_file(&path)?;

    Ok(())
}

#[traced_test]
#[test]
fn oversized_texture() -> Result<()> {
    let mut data = mip_texture("HUGE", 1, 1, 0);
    data[16..24].copy_from_slice(&[0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x40]);
    data.truncate(40);

    let wad = WadArchive::new(Cursor::new(build_wad(&[Lump {
        name: "HUGE",
        type_code: 0x43,
        data,
    }])))?;

    assert_eq!(wad.decode_dimensions("HUGE")?, (0x4000_0000, 0x4000_0000));
    assert!(matches!(
        wad.decode_pixels("HUGE"),
        Err(Error::UnexpectedEof | Error::LumpTooLarge { .. })
    ));

    Ok(())
}

#[test]
fn reject_other_formats() {
    let mut input = sample_wad();
    input[..4].copy_from_slice(b"WAD2");

    assert!(matches!(
        WadArchive::new(Cursor::new(input)),
        Err(Error::InvalidMagic { .. })
    ));
}
