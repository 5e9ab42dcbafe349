//! # WAD3 Format Documentation
//!
//! This crate provides utilities to read textures from the **WAD3** archives used by the *GoldSrc*
//! engine and the *Hammer* level editor. A WAD3 file stores a flat list of named lumps, most of
//! them palette indexed textures. WAD3 files are typically identified with the `.wad` extension.
//!
//! ## File Structure
//!
//! A WAD3 file consists of a header, the lump data, and a lump table usually placed at the end.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Magic number           | 4 bytes: `"WAD3"`                                          |
//! | 0x0004         | Texture Count          | 4 bytes: Number of entries in the lump table               |
//! | 0x0008         | Lump Table Offset      | 4 bytes: Offset to the start of the lump table             |
//!
//! ### Lump Table
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Offset                 | 4 bytes: Offset to the start of the lump data           |
//! | 0x0004         | Compressed Length      | 4 bytes: Size of the lump in the file                   |
//! | 0x0008         | Length                 | 4 bytes: Size of the lump once decompressed             |
//! | 0x000C         | Type                   | 1 byte: Kind of lump                                    |
//! | 0x000D         | Compression            | 1 byte: Always `0`                                      |
//! | 0x000E         | Padding                | 2 bytes                                                 |
//! | 0x0010         | Name                   | 16 bytes: Zero terminated, matched ignoring case        |
//!
//! - **Type**: Possible values are:
//!   - `0x42`: Picture, a width, a height, pixel indices and a palette
//!   - `0x43`: Mip texture
//!   - `0x46`: Font, a picture header followed by row metrics and 256 glyphs
//!
//! ### Mip Texture
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Name                   | 16 bytes: Zero terminated                               |
//! | 0x0010         | Width                  | 4 bytes                                                 |
//! | 0x0014         | Height                 | 4 bytes                                                 |
//! | 0x0018         | Offsets                | 16 bytes: Offset of each of the four mip levels         |
//! | 0x0028         | Mip Levels             | Level `i` holds `(Width >> i) * (Height >> i)` indices  |
//! | ...            | Padding                | 2 bytes                                                 |
//! | ...            | Palette                | 768 bytes: 256 RGB colours                              |
//!
//! Rows are stored bottom up. Textures whose name starts with `{` treat palette index 255 as
//! fully transparent.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.wad`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod error;
pub mod read;
pub mod texture;
pub mod types;

pub use read::WadArchive;
pub use texture::TextureImage;
pub use types::{Font, Glyph, LumpDescriptor, LumpType};
