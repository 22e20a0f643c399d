//! Place book CLI commands.
//!
//! Provides `place list`, `place show`, `place set`, `place rename` and
//! `place edit`. Every command that changes a slot saves the book.

use clap::Subcommand;
use tracing::{debug, info};
use places::coord::CanonicalCoordinate;
use places::edit::EditSession;
use places::place::{PlaceBook, PlaceName};

use super::common::{print_views, resolve_mode, ModeArg};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Place subcommands.
#[derive(Debug, Subcommand)]
pub enum PlaceCommands {
    /// List all five places
    List {
        /// View to show (defaults to display.mode)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Show every view of one place
    Show {
        /// Slot number, 1 to 5
        slot: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Store a position in a slot
    Set {
        /// Slot number, 1 to 5
        slot: usize,

        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Also rename the place (up to 5 of A-Z, 0-9, '-' and space)
        #[arg(long)]
        name: Option<String>,
    },

    /// Rename a place
    Rename {
        /// Slot number, 1 to 5
        slot: usize,

        /// New name (up to 5 of A-Z, 0-9, '-' and space)
        name: String,
    },

    /// Edit a place digit by digit, as on the watch
    ///
    /// The key script is replayed through the editor: 'a' advances the digit
    /// under the cursor, 'n' moves to the next digit (rolling over to the
    /// next page). Whitespace is ignored.
    Edit {
        /// Slot number, 1 to 5
        slot: usize,

        /// View to edit in (defaults to display.mode)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Key script, e.g. "n a a n a"
        #[arg(long)]
        steps: String,

        /// Show the result without saving it
        #[arg(long)]
        dry_run: bool,
    },
}

/// Run a place subcommand.
pub fn run(runner: &CliRunner, command: PlaceCommands) -> Result<(), CliError> {
    runner.log_startup("place");
    let mut book = runner.load_book()?;

    match command {
        PlaceCommands::List { mode } => run_list(runner, &book, mode),
        PlaceCommands::Show { slot, json } => run_show(&book, slot, json),
        PlaceCommands::Set {
            slot,
            lat,
            lon,
            name,
        } => {
            let coordinate = CanonicalCoordinate::from_degrees(lat, lon)?;
            if let Some(name) = name {
                book.rename(slot, parse_name(&name)?)?;
            }
            book.set(slot, coordinate)?;
            runner.save_book(&book)?;
            println!("Place {} set to {}", slot, coordinate);
            Ok(())
        }
        PlaceCommands::Rename { slot, name } => {
            let name = parse_name(&name)?;
            book.rename(slot, name)?;
            runner.save_book(&book)?;
            println!("Place {} renamed to {}", slot, name.to_string().trim_end());
            Ok(())
        }
        PlaceCommands::Edit {
            slot,
            mode,
            steps,
            dry_run,
        } => run_edit(runner, &mut book, slot, mode, &steps, dry_run),
    }
}

fn run_list(runner: &CliRunner, book: &PlaceBook, mode: Option<ModeArg>) -> Result<(), CliError> {
    let mode = resolve_mode(mode, runner.config());
    for (index, place) in book.places().iter().enumerate() {
        let views = place.views();
        println!(
            "{}  {}  {}",
            index + 1,
            place.name,
            views.representation(mode)
        );
    }
    Ok(())
}

fn run_show(book: &PlaceBook, slot: usize, json: bool) -> Result<(), CliError> {
    let place = book.get(slot)?;
    if !json {
        println!("Place {}: {}", slot, place.name.to_string().trim_end());
    }
    print_views(&place.views(), json)
}

fn run_edit(
    runner: &CliRunner,
    book: &mut PlaceBook,
    slot: usize,
    mode: Option<ModeArg>,
    steps: &str,
    dry_run: bool,
) -> Result<(), CliError> {
    let mode = resolve_mode(mode, runner.config());
    let mut session = book.edit(slot, mode)?;
    replay(&mut session, steps)?;
    println!("Edited in {} mode: {}", mode, session.working());

    if dry_run {
        let origin = session.discard();
        info!("Dry run, place {} kept at {}", slot, origin);
        println!("Dry run: place {} unchanged", slot);
        return Ok(());
    }

    let views = book.commit(slot, session)?;
    runner.save_book(book)?;
    print_views(&views, false)
}

/// Feeds a key script into an edit session.
fn replay(session: &mut EditSession, steps: &str) -> Result<(), CliError> {
    for key in steps.chars().filter(|c| !c.is_whitespace()) {
        match key.to_ascii_lowercase() {
            'a' => session.advance(),
            'n' => session.next_digit(),
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "unknown edit key '{}' (use 'a' to advance, 'n' for next digit)",
                    other
                )))
            }
        }
        debug!("Key '{}': cursor at {:?}", key, session.cursor());
    }
    Ok(())
}

fn parse_name(name: &str) -> Result<PlaceName, CliError> {
    Ok(name.parse::<PlaceName>()?)
}
