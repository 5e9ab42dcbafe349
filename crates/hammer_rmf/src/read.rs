//! Types for reading RMF documents
//!

use bon::Builder;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};
use tracing::{debug, instrument, trace};

use crate::{
    codec::ReadRmfExt,
    document::{DocInfo, RmfDocument, VisGroup},
    error::{Error, Result},
    object::{Corner, Entity, Face, Group, MapObject, Path, Solid, World},
    properties::PropertyMap,
    types::{
        Camera, Color, Vector2, Vector3, DOC_INFO_TAG, NAME_LENGTH, RMF_HEADER,
        TEXTURE_NAME_LENGTH,
    },
};

/// Deepest object nesting accepted when no limit is configured
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for how an RMF document should be read
#[derive(Debug, Clone, Copy, Builder)]
pub struct DecodeOptions {
    /// Deepest nesting of objects below the world before decoding is aborted
    #[builder(default = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// RMF document reader
///
/// Object boundaries are only known by reading the preceding bytes, so a document is
/// always read front to back by a single reader.
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn count_objects(reader: impl Read + Seek) -> hammer_rmf::error::Result<usize> {
///     let document = hammer_rmf::RmfReader::new(reader).read_document()?;
///     Ok(document.objects().count())
/// }
/// ```
pub struct RmfReader<R> {
    reader: R,
    options: DecodeOptions,
}

impl<R: Read + Seek> RmfReader<R> {
    pub fn new(reader: R) -> RmfReader<R> {
        Self::with_options(reader, DecodeOptions::default())
    }

    pub fn with_options(reader: R, options: DecodeOptions) -> RmfReader<R> {
        RmfReader { reader, options }
    }

    /// Read a complete document
    #[instrument(skip(self), err)]
    pub fn read_document(&mut self) -> Result<RmfDocument> {
        self.read_header()?;

        let visgroup_count = self.reader.read_count()?;
        debug!(visgroup_count, "reading visgroups");
        let visgroups = (0..visgroup_count)
            .map(|_| self.read_visgroup())
            .collect::<Result<Vec<_>>>()?;

        let root = match self.read_object_at(0)? {
            MapObject::World(world) => world,
            other => return Err(Error::InvalidRoot(other.type_tag())),
        };

        let doc_info = if self.has_remaining()? {
            Some(self.read_doc_info()?)
        } else {
            None
        };

        Ok(RmfDocument {
            visgroups,
            root,
            doc_info,
        })
    }

    /// Check the version and magic
    pub fn read_header(&mut self) -> Result<()> {
        let found = self.reader.read_opaque::<7>()?;
        if &found != RMF_HEADER {
            return Err(Error::InvalidMagic {
                expected: RMF_HEADER,
                found: found.to_vec(),
            });
        }
        Ok(())
    }

    pub fn read_visgroup(&mut self) -> Result<VisGroup> {
        Ok(VisGroup {
            name: self.reader.read_fixed_string(NAME_LENGTH)?,
            color: self.reader.read_record::<Color>()?,
            reserved: self.reader.read_u8()?,
            index: self.reader.read_i32::<LittleEndian>()?,
            visible: self.reader.read_u8()?,
            padding: self.reader.read_opaque::<3>()?,
        })
    }

    /// Read a single object and everything it owns
    pub fn read_object(&mut self) -> Result<MapObject> {
        self.read_object_at(0)
    }

    fn read_object_at(&mut self, depth: usize) -> Result<MapObject> {
        if depth > self.options.max_depth {
            return Err(Error::MaxDepthExceeded(self.options.max_depth));
        }

        let tag = self.reader.read_prefixed_string()?;
        trace!(%tag, depth, "reading object");

        Ok(match tag.as_str() {
            MapObject::WORLD_TAG => MapObject::World(self.read_world(depth)?),
            MapObject::ENTITY_TAG => MapObject::Entity(self.read_entity(depth)?),
            MapObject::GROUP_TAG => MapObject::Group(self.read_group(depth)?),
            MapObject::SOLID_TAG => MapObject::Solid(self.read_solid()?),
            _ => return Err(Error::UnknownObjectType(tag)),
        })
    }

    fn read_children(&mut self, depth: usize) -> Result<Vec<MapObject>> {
        let count = self.reader.read_count()?;
        (0..count)
            .map(|_| self.read_object_at(depth + 1))
            .collect()
    }

    fn read_world(&mut self, depth: usize) -> Result<World> {
        let reserved_header = self.reader.read_opaque::<7>()?;
        let objects = self.read_children(depth)?;
        let classname = self.reader.read_prefixed_string()?;
        let reserved_classname = self.reader.read_opaque::<4>()?;
        let flags = self.reader.read_i32::<LittleEndian>()?;
        let properties = PropertyMap::read(&mut self.reader)?;
        let reserved_properties = self.reader.read_opaque::<12>()?;

        let path_count = self.reader.read_count()?;
        let paths = (0..path_count)
            .map(|_| self.read_path())
            .collect::<Result<Vec<_>>>()?;

        Ok(World {
            reserved_header,
            objects,
            classname,
            reserved_classname,
            flags,
            properties,
            reserved_properties,
            paths,
        })
    }

    fn read_entity(&mut self, depth: usize) -> Result<Entity> {
        let visgroup_index = self.reader.read_i32::<LittleEndian>()?;
        let color = self.reader.read_record::<Color>()?;

        let brush_count = self.reader.read_count()?;
        let brushes = (0..brush_count)
            .map(|_| match self.read_object_at(depth + 1)? {
                MapObject::Solid(solid) => Ok(solid),
                other => Err(Error::InvalidBrush(other.type_tag())),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Entity {
            visgroup_index,
            color,
            brushes,
            classname: self.reader.read_prefixed_string()?,
            reserved_classname: self.reader.read_opaque::<4>()?,
            flags: self.reader.read_i32::<LittleEndian>()?,
            properties: PropertyMap::read(&mut self.reader)?,
            reserved_properties: self.reader.read_opaque::<14>()?,
            location: self.reader.read_record::<Vector3>()?,
            reserved_trailer: self.reader.read_opaque::<4>()?,
        })
    }

    fn read_group(&mut self, depth: usize) -> Result<Group> {
        Ok(Group {
            visgroup_index: self.reader.read_i32::<LittleEndian>()?,
            color: self.reader.read_record::<Color>()?,
            objects: self.read_children(depth)?,
        })
    }

    fn read_solid(&mut self) -> Result<Solid> {
        let visgroup_index = self.reader.read_i32::<LittleEndian>()?;
        let color = self.reader.read_record::<Color>()?;
        let reserved = self.reader.read_opaque::<4>()?;

        let face_count = self.reader.read_count()?;
        let faces = (0..face_count)
            .map(|_| self.read_face())
            .collect::<Result<Vec<_>>>()?;

        Ok(Solid {
            visgroup_index,
            color,
            reserved,
            faces,
        })
    }

    fn read_face(&mut self) -> Result<Face> {
        let texture_name = self.reader.read_fixed_string(TEXTURE_NAME_LENGTH)?;
        let reserved_scalar = self.reader.read_f32::<LittleEndian>()?;
        let u_axis = self.reader.read_record::<Vector3>()?;
        let u_shift = self.reader.read_f32::<LittleEndian>()?;
        let v_axis = self.reader.read_record::<Vector3>()?;
        let v_shift = self.reader.read_f32::<LittleEndian>()?;
        let rotation = self.reader.read_f32::<LittleEndian>()?;
        let scale = self.reader.read_record::<Vector2>()?;
        let reserved = self.reader.read_opaque::<16>()?;

        let vertex_count = self.reader.read_count()?;
        if vertex_count < 3 {
            return Err(Error::DegenerateFace {
                vertices: vertex_count,
            });
        }
        let vertices = (0..vertex_count)
            .map(|_| self.reader.read_record::<Vector3>())
            .collect::<Result<Vec<_>>>()?;

        let plane = [
            self.reader.read_record::<Vector3>()?,
            self.reader.read_record::<Vector3>()?,
            self.reader.read_record::<Vector3>()?,
        ];

        Ok(Face {
            texture_name,
            reserved_scalar,
            u_axis,
            u_shift,
            v_axis,
            v_shift,
            rotation,
            scale,
            reserved,
            vertices,
            plane,
        })
    }

    fn read_path(&mut self) -> Result<Path> {
        let name = self.reader.read_fixed_string(NAME_LENGTH)?;
        let classname = self.reader.read_fixed_string(NAME_LENGTH)?;
        let path_type = self.reader.read_i32::<LittleEndian>()?;

        let corner_count = self.reader.read_count()?;
        let corners = (0..corner_count)
            .map(|_| self.read_corner())
            .collect::<Result<Vec<_>>>()?;

        Ok(Path {
            name,
            classname,
            path_type,
            corners,
        })
    }

    fn read_corner(&mut self) -> Result<Corner> {
        Ok(Corner {
            location: self.reader.read_record::<Vector3>()?,
            index: self.reader.read_i32::<LittleEndian>()?,
            name: self.reader.read_fixed_string(NAME_LENGTH)?,
            properties: PropertyMap::read(&mut self.reader)?,
        })
    }

    fn read_doc_info(&mut self) -> Result<DocInfo> {
        let tag = self.reader.read_opaque::<8>()?;
        if &tag != DOC_INFO_TAG {
            return Err(Error::InvalidMagic {
                expected: DOC_INFO_TAG,
                found: tag.to_vec(),
            });
        }

        let version = self.reader.read_f32::<LittleEndian>()?;
        let camera_index = self.reader.read_i32::<LittleEndian>()?;
        let camera_count = self.reader.read_count()?;
        debug!(version, camera_count, "reading document info");

        let cameras = (0..camera_count)
            .map(|_| self.reader.read_record::<Camera>())
            .collect::<Result<Vec<_>>>()?;

        Ok(DocInfo {
            version,
            camera_index,
            cameras,
        })
    }

    fn has_remaining(&mut self) -> Result<bool> {
        let position = self.reader.stream_position()?;
        let end = self.reader.seek(SeekFrom::End(0))?;
        self.reader.seek(SeekFrom::Start(position))?;
        Ok(end > position)
    }

    /// Unwrap and return the inner reader object
    pub fn into_inner(self) -> R {
        self.reader
    }
}
