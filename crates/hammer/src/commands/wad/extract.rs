use clap::Args;
use hammer_wad::{LumpType, TextureImage};
use miette::{Context, IntoDiagnostic, Result};
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

#[derive(Args)]
pub struct ExtractArgs {
    /// An input WAD3 file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target directory
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ExtractArgs {
    fn write_png(&self, path: &Path, image: &TextureImage) -> Result<()> {
        let out = if !self.overwrite {
            File::create_new(path)
                .into_diagnostic()
                .context(format!("creating {}", path.display()))?
        } else {
            File::create(path)
                .into_diagnostic()
                .context(format!("creating {}", path.display()))?
        };

        let mut encoder = png::Encoder::new(BufWriter::new(out), image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().into_diagnostic()?;
        writer
            .write_image_data(&image.to_rgba8())
            .into_diagnostic()?;
        writer.finish().into_diagnostic()?;

        Ok(())
    }

    pub fn handle(&self) -> Result<()> {
        let wad = super::open_archive(&self.file)?;

        std::fs::create_dir_all(&self.directory)
            .into_diagnostic()
            .context(format!("creating {}", self.directory.display()))?;

        for (name, lump) in wad.lumps() {
            if !matches!(lump.lump_type(), Ok(LumpType::MipTexture)) {
                warn!("skipping {name}, only mip textures can be extracted");
                continue;
            }

            let image = wad.decode_pixels(name)?;
            if image.width == 0 || image.height == 0 {
                warn!("skipping {name}, texture is empty");
                continue;
            }

            // Names may contain characters that are awkward in paths
            let file_name = name.replace(['*', '/', '\\'], "_");
            let path = self.directory.join(format!("{file_name}.png"));
            info!("writing {}", path.display());

            self.write_png(&path, &image)?;
        }

        Ok(())
    }
}
