//! Core domain types and ranking for Vibe Radar.
//!
//! A café record carries an optional [`VibeProfile`]. Users narrow the list
//! with a coarse [`Purpose`] (records failing it are dropped) and order it with
//! fine-grained [`Preference`] toggles (only the most recently activated one
//! sorts). [`rank`] is the pure function tying these together;
//! [`RankingSession`] memoises it for interactive clients.
//!
//! Records come from a [`CafeSource`]; this crate defines the trait and the
//! query, while `vibe-data` provides the HTTP implementation.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cafe;
pub mod detail;
mod error;
pub mod preference;
pub mod preference_config;
pub mod purpose;
pub mod ranker;
pub mod session;
pub mod source;
pub mod vibe;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use cafe::{CafeId, CafeRecord};
pub use detail::{Badge, CafeDetail, maps_search_url};
pub use error::ParseVibeError;
pub use preference::{Preference, PreferenceSet};
pub use preference_config::{
    Highlight, Level, PREFERENCE_TABLE, PreferenceConfig, TOP_RANK, highlights, preference_config,
};
pub use purpose::Purpose;
pub use ranker::{VibeRanker, rank, score};
pub use session::{QueryTicket, RankingSession};
pub use source::{
    CafeQuery, CafeSource, CafeSourceError, DEFAULT_LIMIT, DEFAULT_LOCATION, DEFAULT_RADIUS_KM,
    fetch_or_empty,
};
pub use vibe::{RawVibe, VibeProfile};
