use std::{fs::File, io::BufReader, path::Path};

use hammer_rmf::{RmfDocument, RmfReader};
use miette::{Context, IntoDiagnostic, Result};

pub mod diff;
pub mod dump;
pub mod info;
pub mod verify;

#[derive(clap::Subcommand)]
pub enum RmfCommands {
    /// Compare two RMF files
    Diff(diff::DiffArgs),
    /// Write an RMF file as JSON
    Dump(dump::DumpArgs),
    /// Summarise the contents of an RMF file
    Info(info::InfoArgs),
    /// Check that every RMF file in a directory survives a round trip
    Verify(verify::VerifyArgs),
}

impl RmfCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            RmfCommands::Diff(diff) => diff.handle(),
            RmfCommands::Dump(dump) => dump.handle(),
            RmfCommands::Info(info) => info.handle(),
            RmfCommands::Verify(verify) => verify.handle(),
        }
    }
}

/// Open and decode a document from disk
pub(crate) fn read_document(path: &Path) -> Result<RmfDocument> {
    let file = File::open(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))?;

    let document = RmfReader::new(BufReader::new(file))
        .read_document()
        .context(format!("decoding {}", path.display()))?;

    Ok(document)
}
