//! Base types for structure of WAD3 file.

use binrw::BinRead;

use crate::error::{Error, MalformedStringError, Result};

/// Signature opening every supported archive
pub const WAD3_MAGIC: &[u8; 4] = b"WAD3";

/// Size of the name slot of lumps and mip textures
pub const NAME_LENGTH: usize = 16;

/// Number of colours in a texture palette
pub const PALETTE_COLORS: usize = 256;

/// Number of glyphs described by a font
pub const FONT_GLYPHS: usize = 256;

/// WAD3 file header
///
/// Follows the 4 byte signature, which is checked before anything else is read.
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq)]
#[br(little)]
pub struct WadHeader {
    /// Number of entries in the lump table
    pub texture_count: u32,

    /// Offset from the start of the file to the lump table
    pub lump_table_offset: u32,
}

/// Kind of data stored in a lump
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LumpType {
    /// Plain image with its own palette
    Picture = 0x42,
    /// Texture with four mip levels and a palette
    MipTexture = 0x43,
    /// Bitmap font with glyph metrics
    Font = 0x46,
}

impl TryFrom<u8> for LumpType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x42 => Ok(LumpType::Picture),
            0x43 => Ok(LumpType::MipTexture),
            0x46 => Ok(LumpType::Font),
            _ => Err(Error::UnsupportedLumpType(value)),
        }
    }
}

/// WAD3 lump table entry
///
/// Entries are 32 bytes each and point at the lump data with an absolute offset.
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq)]
#[br(little)]
pub struct LumpDescriptor {
    /// Offset from the start of the file to the lump data
    pub offset: u32,

    /// Size of the lump in the file
    pub compressed_length: u32,

    /// Size of the lump once decompressed
    pub length: u32,

    /// Raw type code, see [`LumpType`]
    pub type_code: u8,

    /// Non-zero when the lump is compressed, which no known tool does
    pub compression: u8,

    /// Preserved verbatim
    pub padding: [u8; 2],

    /// Zero terminated name
    pub name: [u8; NAME_LENGTH],
}

impl LumpDescriptor {
    /// The decoded type of this lump
    pub fn lump_type(&self) -> Result<LumpType> {
        LumpType::try_from(self.type_code)
    }

    /// The name of this lump as stored
    pub fn name(&self) -> Result<String> {
        decode_name(&self.name)
    }
}

/// Header shared by the picture lumps
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq)]
#[br(little)]
pub struct PictureHeader {
    pub width: u32,
    pub height: u32,
}

/// Header of a mip texture lump
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq)]
#[br(little)]
pub struct MipTextureHeader {
    /// Zero terminated name, usually matching the lump name
    pub name: [u8; NAME_LENGTH],

    pub width: u32,

    pub height: u32,

    /// Offsets of the four mip levels, relative to the start of the lump
    pub offsets: [u32; 4],
}

/// Width of a single character of a font
#[derive(BinRead, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[br(little)]
pub struct Glyph {
    /// Offset of the glyph within the font bitmap
    pub start_offset: u32,

    /// Width of the glyph in pixels
    pub char_width: u32,
}

/// Header of a font lump
#[derive(BinRead, Debug, Clone, PartialEq)]
#[br(little)]
pub struct Font {
    pub width: u32,

    pub height: u32,

    /// Number of glyph rows in the bitmap
    pub row_count: u32,

    /// Height of a glyph row in pixels
    pub row_height: u32,

    /// One entry per character code
    #[br(count = FONT_GLYPHS)]
    pub glyphs: Vec<Glyph>,
}

impl Font {
    /// Metrics of a character
    pub fn glyph(&self, character: u8) -> Option<&Glyph> {
        self.glyphs.get(character as usize)
    }
}

/// Decode a zero terminated name from a fixed slot
pub fn decode_name(raw: &[u8]) -> Result<String> {
    let end = raw
        .iter()
        .position(|&c| c == b'\0')
        .ok_or(MalformedStringError::Unterminated(raw.len()))?;

    Ok(String::from_utf8(raw[..end].to_vec()).map_err(MalformedStringError::from)?)
}
