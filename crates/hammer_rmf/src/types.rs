//! Fixed size records shared by every part of an RMF document.

use binrw::{BinRead, BinWrite};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Version and magic that open every supported document
///
/// The version is the float `2.2` stored little endian, directly followed by `"RMF"`.
pub const RMF_HEADER: &[u8; 7] = b"\xCD\xCC\x0C\x40RMF";

/// Tag opening the optional trailing document information block
pub const DOC_INFO_TAG: &[u8; 8] = b"DOCINFO\0";

/// Size of the name slot of visgroups, path corners and paths
pub const NAME_LENGTH: usize = 128;

/// Size of the texture name slot of a face
pub const TEXTURE_NAME_LENGTH: usize = 256;

/// 24 bit RGB colour
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[brw(little)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Two component single precision vector
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[brw(little)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Three component single precision vector
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[brw(little)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(value: Vector3) -> Self {
        [value.x, value.y, value.z]
    }
}

/// Saved editor viewpoint
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[brw(little)]
pub struct Camera {
    /// Position of the camera
    pub eye: Vector3,

    /// Point the camera looks at
    pub look_at: Vector3,
}
