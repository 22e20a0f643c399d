//! places CLI - Command-line interface
//!
//! Plays the watch face on the desktop: converts coordinates between the
//! four views, manages the five-slot place book, and drives the digit editor
//! from a key script.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::convert::ConvertArgs;
use commands::place::PlaceCommands;
use commands::register::RegisterCommands;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "places")]
#[command(version = places::VERSION)]
#[command(about = "Geographic coordinates in decimal, DMS, Plus Code and Geohash form", long_about = None)]
struct Cli {
    /// Enable debug logging (also mirrored to stderr)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every view of a coordinate, Plus Code or geohash
    Convert(ConvertArgs),

    /// Manage the five saved places
    Place {
        #[command(subcommand)]
        command: PlaceCommands,
    },

    /// Pack or unpack the 32-bit location register
    Register {
        #[command(subcommand)]
        command: RegisterCommands,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Config { command } => commands::config::run(command),
        Commands::Convert(args) => {
            CliRunner::with_debug(cli.debug).and_then(|runner| commands::convert::run(&runner, args))
        }
        Commands::Place { command } => {
            CliRunner::with_debug(cli.debug).and_then(|runner| commands::place::run(&runner, command))
        }
        Commands::Register { command } => CliRunner::with_debug(cli.debug)
            .and_then(|runner| commands::register::run(&runner, command)),
    };

    if let Err(e) = result {
        e.exit();
    }
}
