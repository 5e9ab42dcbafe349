//! Types for writing RMF documents
//!

use bon::Builder;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Seek, Write};
use tracing::{debug, instrument, trace};

use crate::{
    codec::WriteRmfExt,
    document::{DocInfo, RmfDocument, VisGroup},
    error::{Error, Result},
    object::{Corner, Entity, Face, Group, MapObject, Path, Solid, World},
    types::{DOC_INFO_TAG, NAME_LENGTH, RMF_HEADER, TEXTURE_NAME_LENGTH},
};

/// Options for how an RMF document should be written
#[derive(Debug, Clone, Copy, Builder)]
pub struct EncodeOptions {
    /// Emit the trailing document information block when the document has one
    #[builder(default = true)]
    pub write_doc_info: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// RMF document generator
///
/// Every field is written in the order and width it is read in, so a document read by
/// [`crate::RmfReader`] is written back byte for byte.
///
/// ```
/// # fn doit() -> hammer_rmf::error::Result<()>
/// # {
/// use hammer_rmf::{RmfDocument, RmfWriter};
///
/// let mut writer = RmfWriter::new(std::io::Cursor::new(Vec::new()));
/// writer.write_document(&RmfDocument::default())?;
///
/// let bytes = writer.into_inner().into_inner();
/// assert_eq!(&bytes[4..7], b"RMF");
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
pub struct RmfWriter<W: Write + Seek> {
    inner: W,
    options: EncodeOptions,
}

impl<W: Write + Seek> RmfWriter<W> {
    pub fn new(inner: W) -> RmfWriter<W> {
        Self::with_options(inner, EncodeOptions::default())
    }

    pub fn with_options(inner: W, options: EncodeOptions) -> RmfWriter<W> {
        RmfWriter { inner, options }
    }

    /// Write a complete document
    #[instrument(skip_all, err)]
    pub fn write_document(&mut self, document: &RmfDocument) -> Result<()> {
        self.inner.write_opaque(RMF_HEADER)?;

        debug!(visgroup_count = document.visgroups.len(), "writing visgroups");
        self.inner.write_count(document.visgroups.len())?;
        for visgroup in &document.visgroups {
            self.write_visgroup(visgroup)?;
        }

        self.inner.write_prefixed_string(MapObject::WORLD_TAG)?;
        self.write_world(&document.root)?;

        match &document.doc_info {
            Some(doc_info) if self.options.write_doc_info => self.write_doc_info(doc_info),
            _ => Ok(()),
        }
    }

    pub fn write_visgroup(&mut self, visgroup: &VisGroup) -> Result<()> {
        self.inner.write_fixed_string(NAME_LENGTH, &visgroup.name)?;
        self.inner.write_record(&visgroup.color)?;
        self.inner.write_u8(visgroup.reserved)?;
        self.inner.write_i32::<LittleEndian>(visgroup.index)?;
        self.inner.write_u8(visgroup.visible)?;
        self.inner.write_opaque(&visgroup.padding)?;
        Ok(())
    }

    /// Write a single object and everything it owns
    pub fn write_object(&mut self, object: &MapObject) -> Result<()> {
        trace!(tag = object.type_tag(), "writing object");
        self.inner.write_prefixed_string(object.type_tag())?;

        match object {
            MapObject::World(world) => self.write_world(world),
            MapObject::Entity(entity) => self.write_entity(entity),
            MapObject::Group(group) => self.write_group(group),
            MapObject::Solid(solid) => self.write_solid(solid),
        }
    }

    fn write_children(&mut self, objects: &[MapObject]) -> Result<()> {
        self.inner.write_count(objects.len())?;
        for object in objects {
            self.write_object(object)?;
        }
        Ok(())
    }

    fn write_world(&mut self, world: &World) -> Result<()> {
        self.inner.write_opaque(&world.reserved_header)?;
        self.write_children(&world.objects)?;
        self.inner.write_prefixed_string(&world.classname)?;
        self.inner.write_opaque(&world.reserved_classname)?;
        self.inner.write_i32::<LittleEndian>(world.flags)?;
        world.properties.write(&mut self.inner)?;
        self.inner.write_opaque(&world.reserved_properties)?;

        self.inner.write_count(world.paths.len())?;
        for path in &world.paths {
            self.write_path(path)?;
        }
        Ok(())
    }

    fn write_entity(&mut self, entity: &Entity) -> Result<()> {
        self.inner.write_i32::<LittleEndian>(entity.visgroup_index)?;
        self.inner.write_record(&entity.color)?;

        self.inner.write_count(entity.brushes.len())?;
        for brush in &entity.brushes {
            self.inner.write_prefixed_string(MapObject::SOLID_TAG)?;
            self.write_solid(brush)?;
        }

        self.inner.write_prefixed_string(&entity.classname)?;
        self.inner.write_opaque(&entity.reserved_classname)?;
        self.inner.write_i32::<LittleEndian>(entity.flags)?;
        entity.properties.write(&mut self.inner)?;
        self.inner.write_opaque(&entity.reserved_properties)?;
        self.inner.write_record(&entity.location)?;
        self.inner.write_opaque(&entity.reserved_trailer)?;
        Ok(())
    }

    fn write_group(&mut self, group: &Group) -> Result<()> {
        self.inner.write_i32::<LittleEndian>(group.visgroup_index)?;
        self.inner.write_record(&group.color)?;
        self.write_children(&group.objects)
    }

    fn write_solid(&mut self, solid: &Solid) -> Result<()> {
        self.inner.write_i32::<LittleEndian>(solid.visgroup_index)?;
        self.inner.write_record(&solid.color)?;
        self.inner.write_opaque(&solid.reserved)?;

        self.inner.write_count(solid.faces.len())?;
        for face in &solid.faces {
            self.write_face(face)?;
        }
        Ok(())
    }

    fn write_face(&mut self, face: &Face) -> Result<()> {
        if face.vertices.len() < 3 {
            return Err(Error::DegenerateFace {
                vertices: face.vertices.len(),
            });
        }

        self.inner
            .write_fixed_string(TEXTURE_NAME_LENGTH, &face.texture_name)?;
        self.inner.write_f32::<LittleEndian>(face.reserved_scalar)?;
        self.inner.write_record(&face.u_axis)?;
        self.inner.write_f32::<LittleEndian>(face.u_shift)?;
        self.inner.write_record(&face.v_axis)?;
        self.inner.write_f32::<LittleEndian>(face.v_shift)?;
        self.inner.write_f32::<LittleEndian>(face.rotation)?;
        self.inner.write_record(&face.scale)?;
        self.inner.write_opaque(&face.reserved)?;

        self.inner.write_count(face.vertices.len())?;
        for vertex in face.vertices.iter().chain(&face.plane) {
            self.inner.write_record(vertex)?;
        }
        Ok(())
    }

    fn write_path(&mut self, path: &Path) -> Result<()> {
        self.inner.write_fixed_string(NAME_LENGTH, &path.name)?;
        self.inner.write_fixed_string(NAME_LENGTH, &path.classname)?;
        self.inner.write_i32::<LittleEndian>(path.path_type)?;

        self.inner.write_count(path.corners.len())?;
        for corner in &path.corners {
            self.write_corner(corner)?;
        }
        Ok(())
    }

    fn write_corner(&mut self, corner: &Corner) -> Result<()> {
        self.inner.write_record(&corner.location)?;
        self.inner.write_i32::<LittleEndian>(corner.index)?;
        self.inner.write_fixed_string(NAME_LENGTH, &corner.name)?;
        corner.properties.write(&mut self.inner)
    }

    fn write_doc_info(&mut self, doc_info: &DocInfo) -> Result<()> {
        self.inner.write_opaque(DOC_INFO_TAG)?;
        self.inner.write_f32::<LittleEndian>(doc_info.version)?;
        self.inner.write_i32::<LittleEndian>(doc_info.camera_index)?;

        self.inner.write_count(doc_info.cameras.len())?;
        for camera in &doc_info.cameras {
            self.inner.write_record(camera)?;
        }
        Ok(())
    }

    /// Unwrap and return the inner writer object
    pub fn into_inner(self) -> W {
        self.inner
    }
}
