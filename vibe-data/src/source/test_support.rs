//! Test utilities for café sources.
//!
//! This module provides [`StubCafeSource`], a deterministic test double for
//! [`CafeSource`] that returns a pre-configured outcome without making HTTP
//! requests.

use vibe_core::{CafeQuery, CafeRecord, CafeSource, CafeSourceError};

/// Stub `CafeSource` for testing.
///
/// Queries are validated first, so invalid queries fail exactly as they would
/// against [`super::HttpCafeSource`].
///
/// # Example
///
/// ```
/// use geo::Coord;
/// use vibe_core::{CafeQuery, CafeRecord, CafeSource};
/// use vibe_data::source::test_support::StubCafeSource;
///
/// let source = StubCafeSource::with_records(vec![CafeRecord::new(
///     1,
///     "Stubbed",
///     Coord { x: 0.0, y: 0.0 },
/// )]);
///
/// let cafes = source.nearby(&CafeQuery::default());
/// assert_eq!(cafes.map(|c| c.len()), Ok(1));
/// ```
#[derive(Debug, Clone)]
pub struct StubCafeSource {
    response: StubResponse,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Records(Vec<CafeRecord>),
    Error(CafeSourceError),
}

impl StubCafeSource {
    /// Create a source that returns `records` for every valid query.
    #[must_use]
    pub const fn with_records(records: Vec<CafeRecord>) -> Self {
        Self {
            response: StubResponse::Records(records),
        }
    }

    /// Create a source that fails every valid query with `error`.
    #[must_use]
    pub const fn with_error(error: CafeSourceError) -> Self {
        Self {
            response: StubResponse::Error(error),
        }
    }
}

impl CafeSource for StubCafeSource {
    fn nearby(&self, query: &CafeQuery) -> Result<Vec<CafeRecord>, CafeSourceError> {
        query.validate()?;

        match &self.response {
            StubResponse::Records(records) => Ok(records.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
