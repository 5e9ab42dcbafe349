use std::path::Path;

use hammer_wad::WadArchive;
use miette::{Context, Result};

pub mod extract;
pub mod list;
pub mod textures;

#[derive(clap::Subcommand)]
pub enum WadCommands {
    /// Write the textures of a WAD3 file as PNG images
    Extract(extract::ExtractArgs),
    /// List the lumps of a WAD3 file
    List(list::ListArgs),
    /// Check which textures used by a map are provided by WAD3 files
    Textures(textures::TexturesArgs),
}

impl WadCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            WadCommands::Extract(extract) => extract.handle(),
            WadCommands::List(list) => list.handle(),
            WadCommands::Textures(textures) => textures.handle(),
        }
    }
}

/// Open an archive from disk
pub(crate) fn open_archive(path: &Path) -> Result<WadArchive<std::io::BufReader<std::fs::File>>> {
    let wad = WadArchive::open(path).context(format!("path: {}", path.display()))?;
    Ok(wad)
}
