//! Decoding of lump contents into dimensions, pixels and font metrics.

use binrw::BinReaderExt;
use std::io::{Read, Seek, SeekFrom};
use tracing::{instrument, trace};

use crate::{
    error::{Error, Result},
    types::{
        Font, LumpDescriptor, LumpType, MipTextureHeader, PictureHeader, NAME_LENGTH,
        PALETTE_COLORS,
    },
};

/// Textures whose name starts with this character treat palette index 255 as transparent
pub const TRANSPARENCY_KEY: char = '{';

/// Palette index that becomes transparent on keyed textures
pub const TRANSPARENT_INDEX: u8 = 255;

/// Decoded texture with normalised RGBA pixels
///
/// Rows run from top to bottom, each pixel is four components in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<f32>,
}

impl TextureImage {
    /// The RGBA components of a single pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * 4;
        let mut rgba = [0.0; 4];
        rgba.copy_from_slice(self.pixels.get(start..start + 4)?);
        Some(rgba)
    }

    /// Convert to 8 bit RGBA, as expected by most image encoders
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|&c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

/// Read the width and height of any supported lump
#[instrument(skip(reader), err)]
pub fn read_dimensions<R: Read + Seek>(
    reader: &mut R,
    lump: &LumpDescriptor,
) -> Result<(u32, u32)> {
    let lump_type = lump.lump_type()?;
    reader.seek(SeekFrom::Start(lump.offset as u64))?;

    let header = match lump_type {
        LumpType::MipTexture => {
            reader.seek(SeekFrom::Current(NAME_LENGTH as i64))?;
            reader.read_le::<PictureHeader>()?
        }
        // Fonts open with the same two fields as pictures
        LumpType::Picture | LumpType::Font => reader.read_le::<PictureHeader>()?,
    };

    Ok((header.width, header.height))
}

/// Decode the full size mip level of a mip texture into RGBA pixels
///
/// The palette follows the last mip level, so the smaller levels are skipped over to
/// reach it. Rows are stored bottom up and are flipped on the way out.
#[instrument(skip(reader), err)]
pub fn read_mip_texture<R: Read + Seek>(
    reader: &mut R,
    lump: &LumpDescriptor,
    name: &str,
) -> Result<TextureImage> {
    let lump_type = lump.lump_type()?;
    if lump_type != LumpType::MipTexture {
        return Err(Error::UnsupportedLumpType(lump.type_code));
    }

    reader.seek(SeekFrom::Start(lump.offset as u64))?;
    let header = reader.read_le::<MipTextureHeader>()?;
    let (width, height) = (header.width, header.height);

    let too_large = || Error::LumpTooLarge { width, height };
    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;
    pixel_count.checked_mul(4).ok_or_else(too_large)?;

    // Sized by the bytes present, not by the declared dimensions
    let mut indices = Vec::new();
    reader
        .by_ref()
        .take(pixel_count as u64)
        .read_to_end(&mut indices)?;
    if indices.len() != pixel_count {
        return Err(Error::UnexpectedEof);
    }

    for level in 1..4 {
        let size = (width >> level) as i64 * (height >> level) as i64;
        trace!(level, size, "skipping mip level");
        reader.seek(SeekFrom::Current(size))?;
    }

    let mut padding = [0u8; 2];
    reader.read_exact(&mut padding)?;

    let mut palette = vec![0u8; PALETTE_COLORS * 3];
    reader.read_exact(&mut palette)?;

    let keyed = name.starts_with(TRANSPARENCY_KEY);
    let row_length = width as usize;

    let mut pixels = Vec::with_capacity(pixel_count * 4);
    if row_length > 0 {
        for row in indices.chunks_exact(row_length).rev() {
            for &index in row {
                let color = &palette[index as usize * 3..index as usize * 3 + 3];
                pixels.extend(color.iter().map(|&c| c as f32 / 255.0));
                pixels.push(if keyed && index == TRANSPARENT_INDEX { 0.0 } else { 1.0 });
            }
        }
    }

    Ok(TextureImage {
        width,
        height,
        pixels,
    })
}

/// Read the glyph table of a font lump
#[instrument(skip(reader), err)]
pub fn read_font<R: Read + Seek>(reader: &mut R, lump: &LumpDescriptor) -> Result<Font> {
    if lump.lump_type()? != LumpType::Font {
        return Err(Error::UnsupportedLumpType(lump.type_code));
    }

    reader.seek(SeekFrom::Start(lump.offset as u64))?;
    Ok(reader.read_le::<Font>()?)
}
