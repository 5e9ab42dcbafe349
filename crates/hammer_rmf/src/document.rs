//! Top level document and the tables stored around the object tree.

use std::collections::BTreeSet;

use crate::object::{Entity, MapObject, Solid, World};
use crate::types::{Camera, Color};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A decoded RMF file
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RmfDocument {
    pub visgroups: Vec<VisGroup>,
    /// The object tree, always a world
    pub root: World,
    pub doc_info: Option<DocInfo>,
}

impl RmfDocument {
    /// Every node below the world, depth first in file order
    pub fn objects(&self) -> Objects<'_> {
        Objects {
            stack: self.root.objects.iter().rev().collect(),
        }
    }

    /// Every solid in the document, including entity brushes
    pub fn solids(&self) -> impl Iterator<Item = &Solid> {
        self.objects().flat_map(|object| {
            let (solid, brushes) = match object {
                MapObject::Solid(solid) => (Some(solid), &[][..]),
                MapObject::Entity(entity) => (None, entity.brushes.as_slice()),
                _ => (None, &[][..]),
            };
            solid.into_iter().chain(brushes)
        })
    }

    /// Every entity in the document
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.objects().filter_map(MapObject::as_entity)
    }

    /// Sorted set of texture names referenced by faces
    pub fn texture_names(&self) -> BTreeSet<&str> {
        self.solids()
            .flat_map(|solid| solid.faces.iter())
            .map(|face| face.texture_name.as_str())
            .collect()
    }
}

/// Depth first iterator over the objects of a document
pub struct Objects<'a> {
    stack: Vec<&'a MapObject>,
}

impl<'a> Iterator for Objects<'a> {
    type Item = &'a MapObject;

    fn next(&mut self) -> Option<Self::Item> {
        let object = self.stack.pop()?;
        self.stack.extend(object.children().into_iter().rev());
        Some(object)
    }
}

/// Named visibility group
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisGroup {
    pub name: String,
    pub color: Color,
    pub reserved: u8,
    pub index: i32,
    /// Non-zero when the group is shown
    pub visible: u8,
    pub padding: [u8; 3],
}

impl VisGroup {
    pub fn is_visible(&self) -> bool {
        self.visible != 0
    }
}

/// Editor state saved after the object tree
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DocInfo {
    pub version: f32,
    /// Index into `cameras` of the camera in use
    pub camera_index: i32,
    pub cameras: Vec<Camera>,
}

impl Default for DocInfo {
    fn default() -> Self {
        Self {
            version: 0.2,
            camera_index: 0,
            cameras: Vec::new(),
        }
    }
}

impl DocInfo {
    pub fn active_camera(&self) -> Option<&Camera> {
        usize::try_from(self.camera_index)
            .ok()
            .and_then(|index| self.cameras.get(index))
    }
}
