//! CLI definitions and entry point

use std::fs::OpenOptions;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::commands;
use hardentools::VERSION;
use hardentools::config::Config;
use hardentools::output::OutputMode;

/// hardentools - Disable risky features of Windows and common applications
#[derive(Parser, Debug)]
#[command(
    name = "hardentools",
    version,
    about = "Disable risky features of Windows and common applications",
    long_about = "Toggle a fixed catalog of risky features between a hardened and a restored state.\n\n\
                  Harden switches the selected features off and remembers that it did.\n\
                  Restore switches everything that was hardened back on."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show whether the system is hardened, entry by entry
    Status,

    /// Harden the selected features
    Harden {
        /// Only harden these entries (comma separated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Leave these entries alone (comma separated)
        #[arg(long, value_delimiter = ',')]
        skip: Vec<String>,

        /// Work on an in-memory copy of the settings hive
        #[arg(long)]
        dry_run: bool,
    },

    /// Restore every hardened feature
    Restore {
        /// Work on an in-memory copy of the settings hive
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // An invalid config only fails the commands that read it
    let config = Config::load();

    init_logging(cli.verbose, config.as_ref().ok().and_then(Config::log_path).as_deref());

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Status) => commands::status(config?, output_mode),
        Some(Command::Harden {
            only,
            skip,
            dry_run,
        }) => commands::harden(config?, &only, &skip, dry_run, output_mode),
        Some(Command::Restore { dry_run }) => commands::restore(config?, dry_run, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION
                    })
                );
            } else {
                println!("hardentools v{VERSION}");
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("hardentools v{VERSION}");
                println!("\nRun 'hardentools --help' for usage");
                println!("Run 'hardentools status' to see what would be hardened");
            }
            Ok(())
        },
    }
}

/// Log to stderr, or to the configured log file
///
/// `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool, log_file: Option<&Path>) {
    let default_level = match (verbose, log_file) {
        (true, _) => "debug",
        (false, Some(_)) => "info",
        (false, None) => "warn",
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));

    if let Some(path) = log_file {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            },
            Err(err) => eprintln!("warning: cannot open log file {}: {err}", path.display()),
        }
    }

    builder.init();
}
