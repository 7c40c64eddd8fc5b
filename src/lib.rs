//! Facade crate for Vibe Radar café ranking.
//!
//! This crate re-exports the ranking domain and, behind the `http` feature,
//! the backend client and snapshot reader.
//!
//! ```
//! use vibe_radar::{CafeRecord, PreferenceSet, Purpose, VibeProfile, rank};
//!
//! let cafe = CafeRecord::new(1, "Quiet Corner", vibe_radar::DEFAULT_LOCATION).with_vibes(
//!     VibeProfile {
//!         best_for: vec!["Study".into()],
//!         ..VibeProfile::default()
//!     },
//! );
//! let ranked = rank([&cafe], Purpose::Study, &PreferenceSet::new());
//! assert_eq!(ranked.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use vibe_core::{
    CafeDetail, CafeId, CafeQuery, CafeRecord, CafeSource, CafeSourceError, DEFAULT_LOCATION,
    ParseVibeError, Preference, PreferenceSet, Purpose, RankingSession, VibeProfile, VibeRanker,
    fetch_or_empty, rank, score,
};

#[cfg(feature = "http")]
pub use vibe_data::{
    DecodeError, read_cafes,
    source::{HttpCafeSource, HttpCafeSourceConfig, ProviderBuildError},
};
