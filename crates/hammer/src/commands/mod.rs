pub mod rmf;
pub mod wad;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle RMF map files
    Rmf {
        #[command(subcommand)]
        command: rmf::RmfCommands,
    },
    /// Handle WAD3 texture archives
    Wad {
        #[command(subcommand)]
        command: wad::WadCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Rmf { command } => command.handle(),
            Commands::Wad { command } => command.handle(),
        }
    }
}
