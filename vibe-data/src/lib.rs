//! Data access for Vibe Radar.
//!
//! Responsibilities:
//! - Implement [`vibe_core::CafeSource`] over the backend's HTTP API.
//! - Own the JSON wire format and its mapping onto core records.
//! - Read offline snapshots of `/cafes` responses.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `vibe-core`).
//! - Keep blocking I/O off async executors.
//!
//! Invariants:
//! - Records keep the order the backend returned them in.
//! - No global mutable state.

#![forbid(unsafe_code)]

use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use thiserror::Error;
use vibe_core::CafeRecord;

pub mod source;

use source::CafePayload;

/// Errors returned when reading a café snapshot from disk.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The snapshot file could not be opened.
    #[error("failed to open cafe snapshot at {path}")]
    Open {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
        /// Snapshot path.
        path: Utf8PathBuf,
    },
    /// The snapshot is not a `/cafes` response body.
    #[error("failed to decode cafe snapshot at {path}")]
    Decode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// Snapshot path.
        path: Utf8PathBuf,
    },
}

/// Read a saved `/cafes` response body into records.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use vibe_data::read_cafes;
///
/// # fn main() -> Result<(), vibe_data::DecodeError> {
/// let cafes = read_cafes(Utf8Path::new("cafes.json"))?;
/// println!("{} cafes in snapshot", cafes.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns [`DecodeError::Open`] when the file cannot be opened and
/// [`DecodeError::Decode`] when its contents are not valid.
pub fn read_cafes(path: &Utf8Path) -> Result<Vec<CafeRecord>, DecodeError> {
    let file =
        fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
            DecodeError::Open {
                source,
                path: path.to_path_buf(),
            }
        })?;
    let payloads: Vec<CafePayload> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| DecodeError::Decode {
            source,
            path: path.to_path_buf(),
        })?;
    Ok(payloads.into_iter().map(CafeRecord::from).collect())
}
