//! Types for reading WAD3 archives
//!

use binrw::BinReaderExt;
use indexmap::IndexMap;
use std::{
    fs::File,
    io::{BufReader, Read, Seek, SeekFrom},
    path::Path,
    sync::{Mutex, PoisonError},
};
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    texture::{read_dimensions, read_font, read_mip_texture, TextureImage},
    types::{Font, LumpDescriptor, WadHeader, WAD3_MAGIC},
};

#[derive(Debug)]
pub(crate) struct Shared {
    header: WadHeader,
    lumps: IndexMap<String, LumpDescriptor>,
}

/// WAD3 archive reader
///
/// The lump table is read once when the archive is opened. Lump data is read on demand
/// through a single handle guarded by a lock, so an archive can be shared between threads
/// and decoded from all of them.
///
/// ```no_run
/// fn print_sizes(path: &str) -> hammer_wad::error::Result<()> {
///     let wad = hammer_wad::WadArchive::open(path)?;
///
///     for name in wad.texture_names() {
///         let (width, height) = wad.decode_dimensions(name)?;
///         println!("{name}: {width}x{height}");
///     }
///
///     Ok(())
/// }
/// ```
pub struct WadArchive<R> {
    reader: Mutex<R>,
    shared: Shared,
}

impl WadArchive<BufReader<File>> {
    /// Open the archive stored at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> WadArchive<R> {
    /// Read a WAD3 archive indexing the lumps it contains.
    ///
    /// Nothing past the signature is read when it does not match.
    #[instrument(skip(reader), err)]
    pub fn new(mut reader: R) -> Result<WadArchive<R>> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != WAD3_MAGIC {
            return Err(Error::InvalidMagic {
                expected: WAD3_MAGIC,
                found: magic.to_vec(),
            });
        }

        let header = reader.read_le::<WadHeader>()?;
        debug!(
            texture_count = header.texture_count,
            lump_table_offset = header.lump_table_offset,
            "reading lump table"
        );
        reader.seek(SeekFrom::Start(header.lump_table_offset as u64))?;

        let capacity = (header.texture_count as usize).min(4096);
        let mut lumps = IndexMap::with_capacity(capacity);
        for _ in 0..header.texture_count {
            let lump = reader.read_le::<LumpDescriptor>()?;
            let name = lump.name()?.to_uppercase();

            if let Some(previous) = lumps.insert(name, lump) {
                debug!(offset = previous.offset, "duplicate lump name overwritten");
            }
        }

        Ok(WadArchive {
            reader: Mutex::new(reader),
            shared: Shared { header, lumps },
        })
    }

    /// Number of distinct lump names in this archive
    pub fn len(&self) -> usize {
        self.shared.lumps.len()
    }

    /// Whether this archive contains no lumps
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lumps the header declares, duplicates included
    pub fn texture_count(&self) -> u32 {
        self.shared.header.texture_count
    }

    /// Whether a lump exists, ignoring case
    pub fn has_texture(&self, name: &str) -> bool {
        self.shared.lumps.contains_key(&name.to_uppercase())
    }

    /// Find the lump table entry for a name, ignoring case
    pub fn lump_for(&self, name: &str) -> Result<&LumpDescriptor> {
        self.shared
            .lumps
            .get(&name.to_uppercase())
            .ok_or_else(|| Error::TextureNotFound(name.to_owned()))
    }

    /// Upper-cased lump names in table order
    pub fn texture_names(&self) -> impl Iterator<Item = &str> {
        self.shared.lumps.keys().map(String::as_str)
    }

    /// Lump table entries and their upper-cased names in table order
    pub fn lumps(&self) -> impl Iterator<Item = (&str, &LumpDescriptor)> {
        self.shared
            .lumps
            .iter()
            .map(|(name, lump)| (name.as_str(), lump))
    }

    /// Width and height of a picture, mip texture or font
    pub fn decode_dimensions(&self, name: &str) -> Result<(u32, u32)> {
        let lump = self.lump_for(name)?;
        self.with_reader(|reader| read_dimensions(reader, lump))
    }

    /// Full size RGBA pixels of a mip texture
    pub fn decode_pixels(&self, name: &str) -> Result<TextureImage> {
        let (key, lump) = self
            .shared
            .lumps
            .get_key_value(&name.to_uppercase())
            .ok_or_else(|| Error::TextureNotFound(name.to_owned()))?;
        self.with_reader(|reader| read_mip_texture(reader, lump, key))
    }

    /// Glyph table of a font
    pub fn decode_font(&self, name: &str) -> Result<Font> {
        let lump = self.lump_for(name)?;
        self.with_reader(|reader| read_font(reader, lump))
    }

    /// Unwrap and return the inner reader object
    ///
    /// The position of the reader is undefined.
    pub fn into_inner(self) -> R {
        self.reader
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Release the underlying handle
    pub fn close(self) {
        drop(self.into_inner());
    }

    fn with_reader<T>(&self, read: impl FnOnce(&mut R) -> Result<T>) -> Result<T> {
        // Every read seeks to an absolute offset first, so a poisoned handle is still usable
        let mut reader = self.reader.lock().unwrap_or_else(PoisonError::into_inner);
        read(&mut reader)
    }
}
