//! Fetch café records near a location.
//!
//! The [`CafeSource`] trait abstracts the backend that supplies pre-enriched
//! café records. Callers describe the search with a [`CafeQuery`] and receive
//! the records in source order.
//!
//! Failures are reported through [`CafeSourceError`]. Interactive callers that
//! treat a failed fetch as "no cafés found" use [`fetch_or_empty`].

mod error;
mod provider;

pub use error::CafeSourceError;
pub use provider::{
    CafeQuery, CafeSource, DEFAULT_LIMIT, DEFAULT_LOCATION, DEFAULT_RADIUS_KM, fetch_or_empty,
};
