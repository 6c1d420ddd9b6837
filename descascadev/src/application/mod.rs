pub mod handlers;

use crate::presentation::cli::{ArchiveCommands, Cli, Commands};
use clap::Parser;
use descasca_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            input,
            box_code,
            export,
            archive,
            no_archive,
        } => handlers::handle_analyze(input, box_code, export, archive, no_archive),
        Commands::Archive(cmd) => match cmd {
            ArchiveCommands::Ls { archive } => handlers::handle_archive_ls(archive),
            ArchiveCommands::Show {
                name,
                box_code,
                export,
                archive,
            } => handlers::handle_archive_show(name, box_code, export, archive),
            ArchiveCommands::Rm { name, archive } => handlers::handle_archive_rm(name, archive),
        },
    }
}
