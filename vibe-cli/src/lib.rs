//! Command-line interface for ranking cafés by vibe.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod nearby;
mod rank;
mod render;

pub use error::CliError;

use nearby::{NearbyArgs, run_nearby};
use rank::{RankArgs, run_rank};

pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LNG: &str = "lng";
pub(crate) const ARG_ADDRESS: &str = "address";
pub(crate) const ARG_RADIUS_KM: &str = "radius-km";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_BASE_URL: &str = "base-url";
pub(crate) const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub(crate) const ARG_PURPOSE: &str = "purpose";
pub(crate) const ARG_PREFER: &str = "prefer";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_DETAIL: &str = "detail";
pub(crate) const ARG_RANK_INPUT: &str = "input";
pub(crate) const ENV_RANK_INPUT: &str = "VIBE_RADAR_CMDS_RANK_INPUT";

/// Run the Vibe Radar CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, an input
/// cannot be read, or output cannot be written. A backend that cannot be
/// reached is not an error: it yields an empty result list.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Nearby(args) => run_nearby(args),
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "vibe-radar",
    about = "Find cafes that match the vibe you are after",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch cafés near a location from the backend and rank them.
    Nearby(NearbyArgs),
    /// Rank cafés stored in a JSON snapshot.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
