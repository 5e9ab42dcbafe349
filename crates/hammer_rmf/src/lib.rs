//! # RMF Format Documentation
//!
//! This crate provides utilities to read and write the **RMF** (Rich Map Format) files saved by
//! the *Hammer* level editor. An RMF file stores a tree of map objects (the world, entities, groups
//! and brushes) together with the editor's visibility groups and camera state. RMF files are
//! typically identified with the `.rmf` extension.
//!
//! ## File Structure
//!
//! An RMF file consists of a header, a table of visibility groups, a single object tree rooted at
//! a world, and an optional document information block.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Version                | 4 bytes: float `2.2`                                       |
//! | 0x0004         | Magic number           | 3 bytes: `"RMF"`                                           |
//! | 0x0007         | VisGroup Count         | 4 bytes: Number of visibility groups that follow           |
//!
//! ### Strings
//!
//! Two string encodings are used throughout the file:
//!
//! - **Fixed**: a slot of a known size holding the text, a zero terminator and padding. Names use
//!   128 byte slots and texture names 256 byte slots.
//! - **Prefixed**: a 1 byte length followed by that many bytes, the last one being a zero
//!   terminator.
//!
//! ### VisGroup
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Name                   | 128 bytes: Fixed string                                 |
//! | 0x0080         | Color                  | 3 bytes: RGB                                            |
//! | 0x0083         | Reserved               | 1 byte: Preserved verbatim                              |
//! | 0x0084         | Index                  | 4 bytes: Index referenced by objects                    |
//! | 0x0088         | Visible                | 1 byte: Non-zero when shown                             |
//! | 0x0089         | Padding                | 3 bytes: Preserved verbatim                             |
//!
//! ### Objects
//!
//! Every object starts with a prefixed type tag selecting its layout:
//!
//! - `CMapWorld`: 7 reserved bytes, child objects, classname, 4 reserved bytes, flags,
//!   properties, 12 reserved bytes and the list of paths.
//! - `CMapEntity`: visgroup index, colour, brushes (each a tagged `CMapSolid`), classname,
//!   4 reserved bytes, flags, properties, 14 reserved bytes, location and 4 reserved bytes.
//! - `CMapGroup`: visgroup index, colour and child objects.
//! - `CMapSolid`: visgroup index, colour, 4 reserved bytes and faces.
//!
//! Lists of children, brushes, faces, paths, corners and properties are all preceded by a signed
//! 4 byte count. Properties are pairs of prefixed strings.
//!
//! ### Face
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Texture                | 256 bytes: Fixed string                                 |
//! | 0x0100         | Reserved               | 4 bytes: Float, preserved verbatim                      |
//! | 0x0104         | U Axis                 | 12 bytes: Three floats                                  |
//! | 0x0110         | U Shift                | 4 bytes: Float                                          |
//! | 0x0114         | V Axis                 | 12 bytes: Three floats                                  |
//! | 0x0120         | V Shift                | 4 bytes: Float                                          |
//! | 0x0124         | Rotation               | 4 bytes: Float                                          |
//! | 0x0128         | Scale                  | 8 bytes: Two floats                                     |
//! | 0x0130         | Reserved               | 16 bytes: Preserved verbatim                            |
//! | 0x0140         | Vertex Count           | 4 bytes: At least 3                                     |
//! | 0x0144         | Vertices               | (Vertex Count * 12) bytes                               |
//! | ...            | Plane                  | 36 bytes: Three points on the face plane                |
//!
//! ### Document Information
//!
//! If any bytes follow the world, they hold the literal `"DOCINFO\0"`, a float version, the index
//! of the active camera and a counted list of cameras, each an eye and a look-at position.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.rmf`
//! - **Endianness**: Little-endian for all multi-byte values
//!

use std::io::Cursor;

pub mod codec;
pub mod document;
pub mod error;
pub mod object;
pub mod properties;
pub mod read;
pub mod types;
pub mod write;

pub use document::{DocInfo, RmfDocument, VisGroup};
pub use object::{Corner, Entity, Face, Group, MapObject, Path, Solid, World};
pub use properties::PropertyMap;
pub use read::{DecodeOptions, RmfReader};
pub use write::{EncodeOptions, RmfWriter};

/// Decode a complete document held in memory
pub fn decode_document(bytes: &[u8]) -> error::Result<RmfDocument> {
    RmfReader::new(Cursor::new(bytes)).read_document()
}

/// Encode a document into a new buffer
pub fn encode_document(document: &RmfDocument) -> error::Result<Vec<u8>> {
    let mut writer = RmfWriter::new(Cursor::new(Vec::new()));
    writer.write_document(document)?;
    Ok(writer.into_inner().into_inner())
}
