//! Café source trait and the query it answers.

use geo::Coord;
use log::warn;

use super::error::CafeSourceError;
use crate::CafeRecord;

/// Downtown Toronto, used when the caller has no location yet.
pub const DEFAULT_LOCATION: Coord<f64> = Coord {
    x: -79.3832,
    y: 43.6532,
};

/// Search radius used when none is given.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Maximum number of records requested when none is given.
pub const DEFAULT_LIMIT: u32 = 50;

/// Parameters for a nearby-cafés lookup.
///
/// `address`, when set, asks the source to geocode the address and search
/// around it instead of `location`; `location` remains the fallback.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vibe_core::CafeQuery;
///
/// let query = CafeQuery::near(Coord { x: -0.12, y: 51.5 })
///     .with_radius_km(2.0)
///     .with_limit(10);
/// assert_eq!(query.limit, 10);
/// assert!(query.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CafeQuery {
    /// Search centre with `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// Free-form address to search around instead of `location`.
    pub address: Option<String>,
    /// Search radius in kilometres.
    pub radius_km: f64,
    /// Maximum number of records to return.
    pub limit: u32,
}

impl Default for CafeQuery {
    fn default() -> Self {
        Self::near(DEFAULT_LOCATION)
    }
}

impl CafeQuery {
    /// Query around `location` with the default radius and limit.
    #[must_use]
    pub const fn near(location: Coord<f64>) -> Self {
        Self {
            location,
            address: None,
            radius_km: DEFAULT_RADIUS_KM,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Search around a free-form address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the search radius.
    #[must_use]
    pub const fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    /// Set the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Check the query before it is sent.
    ///
    /// # Errors
    /// Returns [`CafeSourceError::InvalidQuery`] for non-finite or
    /// out-of-range coordinates, a non-positive radius, or a zero limit.
    pub fn validate(&self) -> Result<(), CafeSourceError> {
        let Coord { x: lng, y: lat } = self.location;
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CafeSourceError::InvalidQuery {
                reason: "latitude must be within -90..=90",
            });
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(CafeSourceError::InvalidQuery {
                reason: "longitude must be within -180..=180",
            });
        }
        if !self.radius_km.is_finite() || self.radius_km <= 0.0 {
            return Err(CafeSourceError::InvalidQuery {
                reason: "radius must be a positive number of kilometres",
            });
        }
        if self.limit == 0 {
            return Err(CafeSourceError::InvalidQuery {
                reason: "limit must be at least 1",
            });
        }
        Ok(())
    }
}

/// Fetch enriched café records near a location.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and return records
/// in the order the backend ranks them (usually nearest first). Ranking
/// does not rely on that order being meaningful.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use vibe_core::{CafeQuery, CafeRecord, CafeSource, CafeSourceError};
///
/// struct OneCafe;
///
/// impl CafeSource for OneCafe {
///     fn nearby(&self, query: &CafeQuery) -> Result<Vec<CafeRecord>, CafeSourceError> {
///         query.validate()?;
///         Ok(vec![CafeRecord::new(1, "Only One", query.location)])
///     }
/// }
///
/// let cafes = OneCafe.nearby(&CafeQuery::default())?;
/// assert_eq!(cafes.len(), 1);
/// # Ok::<(), CafeSourceError>(())
/// ```
pub trait CafeSource: Send + Sync {
    /// Return the records matching `query`.
    ///
    /// # Errors
    /// Returns [`CafeSourceError`] when the query is invalid or the backend
    /// cannot be reached or understood.
    fn nearby(&self, query: &CafeQuery) -> Result<Vec<CafeRecord>, CafeSourceError>;
}

impl<S: CafeSource + ?Sized> CafeSource for &S {
    fn nearby(&self, query: &CafeQuery) -> Result<Vec<CafeRecord>, CafeSourceError> {
        (**self).nearby(query)
    }
}

impl<S: CafeSource + ?Sized> CafeSource for Box<S> {
    fn nearby(&self, query: &CafeQuery) -> Result<Vec<CafeRecord>, CafeSourceError> {
        (**self).nearby(query)
    }
}

/// Fetch records, treating any failure as "no cafés found".
///
/// The error is logged at warn level and an empty vector is returned, so
/// callers handle a broken backend exactly like an empty neighbourhood.
pub fn fetch_or_empty<S: CafeSource + ?Sized>(source: &S, query: &CafeQuery) -> Vec<CafeRecord> {
    source.nearby(query).unwrap_or_else(|err| {
        warn!("cafe lookup failed, showing no results: {err}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Failing;

    impl CafeSource for Failing {
        fn nearby(&self, _query: &CafeQuery) -> Result<Vec<CafeRecord>, CafeSourceError> {
            Err(CafeSourceError::NetworkError {
                url: "http://localhost:8000/cafes".into(),
                message: "connection refused".into(),
            })
        }
    }

    struct Echo;

    impl CafeSource for Echo {
        fn nearby(&self, query: &CafeQuery) -> Result<Vec<CafeRecord>, CafeSourceError> {
            query.validate()?;
            Ok(vec![CafeRecord::new(1, "Echo", query.location)])
        }
    }

    #[rstest]
    fn default_query_targets_downtown_toronto() {
        let query = CafeQuery::default();
        assert_eq!(query.location, DEFAULT_LOCATION);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert!(query.address.is_none());
        assert!(query.validate().is_ok());
    }

    #[rstest]
    #[case(CafeQuery::near(Coord { x: 0.0, y: 91.0 }))]
    #[case(CafeQuery::near(Coord { x: f64::NAN, y: 0.0 }))]
    #[case(CafeQuery::near(Coord { x: 181.0, y: 0.0 }))]
    #[case(CafeQuery::default().with_radius_km(0.0))]
    #[case(CafeQuery::default().with_radius_km(f64::INFINITY))]
    #[case(CafeQuery::default().with_limit(0))]
    fn validate_rejects_bad_queries(#[case] query: CafeQuery) {
        assert!(matches!(
            query.validate(),
            Err(CafeSourceError::InvalidQuery { .. })
        ));
    }

    #[rstest]
    fn fetch_or_empty_swallows_failures() {
        assert!(fetch_or_empty(&Failing, &CafeQuery::default()).is_empty());
    }

    #[rstest]
    fn fetch_or_empty_passes_results_through() {
        let boxed: Box<dyn CafeSource> = Box::new(Echo);
        let records = fetch_or_empty(&boxed, &CafeQuery::default());
        assert_eq!(records.len(), 1);
        assert!(fetch_or_empty(&Echo, &CafeQuery::default().with_limit(0)).is_empty());
    }
}
