//! Ordered key/value properties attached to entities, worlds and path corners.

use derive_more::derive::{AsRef, Deref, DerefMut, IntoIterator};
use indexmap::IndexMap;
use std::io::{Read, Seek, Write};
use tracing::trace;

use crate::codec::{ReadRmfExt, WriteRmfExt};
use crate::error::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// String to string map that remembers insertion order
///
/// The on-disk order of keys is observable by the editor, so it is kept exactly as read.
/// Inserting a key that already exists replaces its value without moving it.
#[derive(Clone, Debug, Default, PartialEq, Eq, AsRef, Deref, DerefMut, IntoIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[into_iterator(owned, ref, ref_mut)]
pub struct PropertyMap(IndexMap<String, String>);

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a count followed by that many key/value pairs
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        let count = reader.read_count()?;
        let mut properties = IndexMap::with_capacity(count.min(1024));

        for _ in 0..count {
            let key = reader.read_prefixed_string()?;
            let value = reader.read_prefixed_string()?;

            if let Some(previous) = properties.insert(key, value) {
                trace!(%previous, "duplicate property key overwritten");
            }
        }

        Ok(Self(properties))
    }

    /// Write the count followed by every pair in iteration order
    pub fn write<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        writer.write_count(self.0.len())?;

        for (key, value) in &self.0 {
            writer.write_prefixed_string(key)?;
            writer.write_prefixed_string(value)?;
        }

        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
