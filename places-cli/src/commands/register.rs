//! Location register CLI commands.
//!
//! The watch backs up one position in a 32-bit register: latitude in the
//! low half, longitude in the high half, both as signed hundredths of a
//! degree.

use clap::Subcommand;
use places::storage::LocationRegister;

use super::common::{parse_register_value, print_views};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Register subcommands.
#[derive(Debug, Subcommand)]
pub enum RegisterCommands {
    /// Pack a place into a register value
    Pack {
        /// Slot number, 1 to 5
        slot: usize,
    },

    /// Unpack a register value into a place
    Unpack {
        /// Slot number, 1 to 5
        slot: usize,

        /// Register value, hex (0xE31A0FEB) or decimal
        #[arg(value_parser = parse_register_value)]
        value: u32,
    },
}

/// Run a register subcommand.
pub fn run(runner: &CliRunner, command: RegisterCommands) -> Result<(), CliError> {
    runner.log_startup("register");
    let mut book = runner.load_book()?;

    match command {
        RegisterCommands::Pack { slot } => {
            let register = LocationRegister::pack(book.get(slot)?.coordinate);
            println!("{}", register);
            println!(
                "  Latitude:  {} hundredths\n  Longitude: {} hundredths",
                register.latitude(),
                register.longitude()
            );
            Ok(())
        }
        RegisterCommands::Unpack { slot, value } => {
            let coordinate = LocationRegister::from_raw(value).unpack()?;
            book.set(slot, coordinate)?;
            runner.save_book(&book)?;
            println!("Place {} set from {}", slot, LocationRegister::from_raw(value));
            print_views(&book.views(slot)?, false)
        }
    }
}
