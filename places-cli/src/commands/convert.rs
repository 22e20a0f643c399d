//! `places convert`: show every view of one position.

use clap::{ArgGroup, Args};
use tracing::debug;
use places::codec::{GeohashDigits, OlcDigits};
use places::coord::CanonicalCoordinate;
use places::facade::{self, Representation};

use super::common::print_views;
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the convert command.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["lat", "olc", "geohash"])))]
pub struct ConvertArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Plus Code, e.g. 87G8Q22C+22
    #[arg(long)]
    pub olc: Option<String>,

    /// 10-character geohash, e.g. dr5rud33vn
    #[arg(long)]
    pub geohash: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Run the convert command.
pub fn run(runner: &CliRunner, args: ConvertArgs) -> Result<(), CliError> {
    runner.log_startup("convert");

    let views = match (args.lat, args.lon, &args.olc, &args.geohash) {
        (Some(lat), Some(lon), _, _) => {
            facade::materialize(CanonicalCoordinate::from_degrees(lat, lon)?)
        }
        (_, _, Some(code), _) => {
            let code: OlcDigits = code.parse()?;
            facade::commit(&Representation::Olc(code))
        }
        (_, _, _, Some(hash)) => {
            let hash: GeohashDigits = hash.parse()?;
            facade::commit(&Representation::Geohash(hash))
        }
        _ => {
            return Err(CliError::InvalidArgument(
                "give --lat and --lon, --olc, or --geohash".to_string(),
            ))
        }
    };

    debug!("Converted to {}", views.canonical);
    print_views(&views, args.json)
}
