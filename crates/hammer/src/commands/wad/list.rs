use clap::Args;
use hammer_wad::LumpType;
use itertools::Itertools;
use miette::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct ListArgs {
    /// An input WAD3 file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl ListArgs {
    pub fn handle(&self) -> Result<()> {
        let wad = super::open_archive(&self.file)?;

        println!(
            "{} ({} lumps, {} declared)",
            self.file.display().bold(),
            wad.len(),
            wad.texture_count()
        );

        for (name, lump) in wad.lumps().sorted_by_key(|(name, _)| *name) {
            let kind = match lump.lump_type() {
                Ok(LumpType::Picture) => "picture".to_string(),
                Ok(LumpType::MipTexture) => "miptex".to_string(),
                Ok(LumpType::Font) => "font".to_string(),
                Err(_) => format!("{:#04X}", lump.type_code),
            };
            let size = match wad.decode_dimensions(name) {
                Ok((width, height)) => format!("{width}x{height}"),
                Err(_) => "-".to_string(),
            };

            println!(
                "  {:<16} {:<8} {:>9} {:>8} bytes",
                name,
                kind.dimmed(),
                size,
                lump.length
            );
        }

        Ok(())
    }
}
