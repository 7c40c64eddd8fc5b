//! Error types emitted by the Vibe Radar CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use vibe_core::{CafeSourceError, ParseVibeError};
use vibe_data::DecodeError;
use vibe_data::source::ProviderBuildError;

/// Errors emitted by the Vibe Radar CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A purpose or preference option named something unknown.
    #[error("invalid --{field}: {source}")]
    InvalidVibeOption {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Parser error.
        #[source]
        source: ParseVibeError,
    },
    /// The output format is neither `text` nor `json`.
    #[error("unknown output format {value:?} (expected \"text\" or \"json\")")]
    UnknownFormat {
        /// Rejected value.
        value: String,
    },
    /// The search parameters failed validation.
    #[error(transparent)]
    InvalidQuery(#[from] CafeSourceError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Argument naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Argument naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading the records snapshot failed.
    #[error(transparent)]
    ReadSnapshot(#[from] DecodeError),
    /// Constructing the HTTP café source failed.
    #[error("failed to build cafe source for {base_url:?}: {source}")]
    BuildCafeSource {
        /// Configured backend URL.
        base_url: String,
        /// Construction error.
        #[source]
        source: ProviderBuildError,
    },
    /// `--detail` named a café that is not in the fetched records.
    #[error("no cafe with id {id} in the results")]
    UnknownCafe {
        /// Requested identifier.
        id: String,
    },
    /// Serialising the JSON output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
