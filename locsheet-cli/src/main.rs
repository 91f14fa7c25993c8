mod export;
mod inspect;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::{ExportArgs, run_export_command};
use crate::inspect::run_inspect_command;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export a translation table to Android or iOS resource files.
    Export {
        /// TOML configuration file; flags below override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// CSV export of the sheet, or a directory of `<sheet>.csv` files
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Sheet name, used when the input is a directory
        #[arg(short, long)]
        sheet: Option<String>,

        /// Directory the resource files are written to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target platform: android or ios
        #[arg(short, long)]
        platform: Option<String>,

        /// Print the export report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the languages and row counts of a translation table.
    Inspect {
        /// CSV export of the sheet, or a directory of `<sheet>.csv` files
        #[arg(short, long)]
        input: PathBuf,

        /// Sheet name, used when the input is a directory
        #[arg(short, long)]
        sheet: Option<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(&args.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    match args.commands {
        Commands::Export {
            config,
            input,
            sheet,
            output,
            platform,
            json,
        } => run_export_command(ExportArgs {
            config,
            input,
            sheet,
            output,
            platform,
            json,
        }),
        Commands::Inspect { input, sheet, json } => run_inspect_command(input, sheet, json),
    }
}
