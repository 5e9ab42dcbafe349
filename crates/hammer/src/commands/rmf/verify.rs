use clap::Args;
use hammer_rmf::{decode_document, encode_document};
use miette::{miette, Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Args)]
pub struct VerifyArgs {
    /// An input directory
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,
}

impl VerifyArgs {
    fn verify_file(path: &Path) -> Result<()> {
        let data = std::fs::read(path)
            .into_diagnostic()
            .context(format!("path: {}", path.display()))?;

        let document = decode_document(&data)?;
        let encoded = encode_document(&document)?;

        if encoded != data {
            let offset = encoded
                .iter()
                .zip(&data)
                .position(|(a, b)| a != b)
                .unwrap_or(encoded.len().min(data.len()));
            return Err(miette!(
                "re-encoded document differs at byte {offset:#X} ({} vs {} bytes)",
                data.len(),
                encoded.len()
            ));
        }

        Ok(())
    }

    pub fn handle(&self) -> Result<()> {
        let files = WalkDir::new(&self.directory)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| !e.file_type().is_dir())
            .filter(|e| {
                e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("rmf"))
            })
            .collect::<Vec<_>>();

        if files.is_empty() {
            return Err(miette!("no RMF files found in {}", self.directory.display()));
        }

        let mut failures = 0;
        for file in &files {
            match Self::verify_file(file.path()) {
                Ok(()) => info!("{} {}", "ok".green(), file.path().display()),
                Err(err) => {
                    failures += 1;
                    warn!("{} {}: {err:?}", "failed".red(), file.path().display());
                }
            }
        }

        info!("{} of {} files verified", files.len() - failures, files.len());

        if failures > 0 {
            return Err(miette!("{failures} files failed to round trip"));
        }

        Ok(())
    }
}
