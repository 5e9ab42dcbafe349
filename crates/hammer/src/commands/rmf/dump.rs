use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs::File, io::BufWriter, path::PathBuf};
use tracing::info;

#[derive(Args)]
pub struct DumpArgs {
    /// An input RMF file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target JSON file, standard output when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl DumpArgs {
    pub fn handle(&self) -> Result<()> {
        let document = super::read_document(&self.file)?;

        match &self.output {
            Some(path) => {
                info!("writing {}", path.display());
                let out = if !self.overwrite {
                    File::create_new(path)
                        .into_diagnostic()
                        .context(format!("creating {}", path.display()))?
                } else {
                    File::create(path)
                        .into_diagnostic()
                        .context(format!("creating {}", path.display()))?
                };
                serde_json::to_writer_pretty(BufWriter::new(out), &document).into_diagnostic()?;
            }
            None => {
                println!("{}", serde_json::to_string_pretty(&document).into_diagnostic()?);
            }
        }

        Ok(())
    }
}
