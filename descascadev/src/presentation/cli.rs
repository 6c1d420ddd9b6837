use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "descascadev CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum ArchiveCommands {
    /// List archived uploads
    Ls {
        #[arg(long, default_value = "archive.json")]
        archive: PathBuf,
    },
    /// Re-run the analysis for one archived upload
    Show {
        name: String,
        /// Box code to drill into (0 = no filter)
        #[arg(long = "box", default_value_t = 0)]
        box_code: i64,
        /// write the typed table to a CSV spreadsheet
        #[arg(long)]
        export: Option<PathBuf>,
        #[arg(long, default_value = "archive.json")]
        archive: PathBuf,
    },
    /// Delete one archived upload
    Rm {
        name: String,
        #[arg(long, default_value = "archive.json")]
        archive: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a debarker log file and archive it under its filename
    Analyze {
        input: PathBuf,

        /// Box code to drill into (0 = no filter)
        #[arg(long = "box", default_value_t = 0)]
        box_code: i64,

        /// write the typed table to a CSV spreadsheet
        #[arg(long)]
        export: Option<PathBuf>,

        #[arg(long, default_value = "archive.json")]
        archive: PathBuf,

        /// analyze only, skip archiving
        #[arg(long)]
        no_archive: bool,
    },

    #[command(subcommand)]
    /// Inspect or prune the upload archive
    Archive(ArchiveCommands),
}
