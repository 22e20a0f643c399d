//! Common types and utilities shared across CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use places::config::ConfigFile;
use places::facade::{Mode, Views};

use crate::error::CliError;

/// View selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum ModeArg {
    /// Signed decimal degrees (+40.75000 -73.98000)
    Decimal,
    /// Degrees, minutes, seconds (40°45'00"N 73°58'48"W)
    Dms,
    /// Open Location Code / Plus Code (87G8Q22C+22)
    Olc,
    /// 10-character geohash (dr5rud33vn)
    Geohash,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Decimal => Mode::Decimal,
            ModeArg::Dms => Mode::Dms,
            ModeArg::Olc => Mode::Olc,
            ModeArg::Geohash => Mode::Geohash,
        }
    }
}

/// Resolve the display mode from CLI args and config.
pub fn resolve_mode(cli_mode: Option<ModeArg>, config: &ConfigFile) -> Mode {
    cli_mode.map(Mode::from).unwrap_or(config.display.mode)
}

/// Text form of every view, as printed and as serialized with `--json`.
#[derive(Debug, Serialize)]
pub struct ViewsReport {
    pub lat_e5: i32,
    pub lon_e5: i32,
    pub decimal: String,
    pub dms: String,
    pub olc: String,
    pub geohash: String,
}

impl From<&Views> for ViewsReport {
    fn from(views: &Views) -> Self {
        Self {
            lat_e5: views.canonical.lat_e5,
            lon_e5: views.canonical.lon_e5,
            decimal: views.representation(Mode::Decimal).to_string(),
            dms: views.representation(Mode::Dms).to_string(),
            olc: views.olc.to_string(),
            geohash: views.geohash.to_string(),
        }
    }
}

/// Print every view, either as aligned text or as JSON.
pub fn print_views(views: &Views, json: bool) -> Result<(), CliError> {
    let report = ViewsReport::from(views);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("  Canonical: {}, {}", report.lat_e5, report.lon_e5);
        println!("  Decimal:   {}", report.decimal);
        println!("  DMS:       {}", report.dms);
        println!("  Plus Code: {}", report.olc);
        println!("  Geohash:   {}", report.geohash);
    }
    Ok(())
}

/// Parse a register value given as `0x`-prefixed hex or plain decimal.
pub fn parse_register_value(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|_| format!("'{}' is not a 32-bit value (use 0x1234ABCD or decimal)", s))
}
