use clap::Args;
use hammer_wad::{error::Error, WadArchive};
use miette::Result;
use owo_colors::OwoColorize;
use std::{fs::File, io::BufReader, path::PathBuf};
use tracing::debug;

#[derive(Args)]
pub struct TexturesArgs {
    /// An input RMF file
    #[arg(short, long, value_name = "FILE")]
    map: PathBuf,

    /// WAD3 files to search, in order of priority
    #[arg(short, long, value_name = "FILE", required = true)]
    wad: Vec<PathBuf>,
}

impl TexturesArgs {
    pub fn handle(&self) -> Result<()> {
        let document = crate::commands::rmf::read_document(&self.map)?;
        let wads = self
            .wad
            .iter()
            .map(|path| super::open_archive(path).map(|wad| (path, wad)))
            .collect::<Result<Vec<(&PathBuf, WadArchive<BufReader<File>>)>>>()?;

        let mut missing = 0;
        for texture in document.texture_names() {
            let found = wads.iter().find_map(|(path, wad)| {
                match wad.decode_dimensions(texture) {
                    Ok(size) => Some((path, size)),
                    Err(Error::TextureNotFound(_)) => None,
                    Err(err) => {
                        debug!("{texture} in {}: {err}", path.display());
                        None
                    }
                }
            });

            match found {
                Some((path, (width, height))) => println!(
                    "✅ {texture} {width}x{height} {}",
                    path.display().dimmed()
                ),
                None => {
                    missing += 1;
                    println!("❌ {}", texture.red());
                }
            }
        }

        println!(
            "{} textures, {} missing",
            document.texture_names().len(),
            missing
        );

        Ok(())
    }
}
