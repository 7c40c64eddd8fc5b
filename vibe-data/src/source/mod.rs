//! HTTP café source for the Vibe Radar backend.
//!
//! This module provides [`HttpCafeSource`], an implementation of
//! [`vibe_core::CafeSource`] that queries the backend's `/cafes` endpoint, and
//! the JSON wire types it decodes.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use vibe_core::{CafeQuery, CafeSource};
//! use vibe_data::source::{HttpCafeSource, HttpCafeSourceConfig};
//!
//! let config = HttpCafeSourceConfig::new("http://localhost:8000")
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let source = HttpCafeSource::with_config(config)?;
//!
//! let cafes = source.nearby(&CafeQuery::default().with_address("Union Station"))?;
//! println!("{} cafes nearby", cafes.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod wire;

#[doc(hidden)]
pub mod test_support;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpCafeSource,
    HttpCafeSourceConfig, ProviderBuildError,
};
pub use wire::{CafePayload, VibePayload, WireId, decode_cafes};
