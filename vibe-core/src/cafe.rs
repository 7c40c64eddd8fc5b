//! Café records as delivered by the data source.
//!
//! Records are read-only snapshots: the ranking layer filters and reorders
//! references to them but never mutates their fields.

use std::fmt;

use geo::Coord;

use crate::VibeProfile;

/// Identifier assigned to a café by the data source.
///
/// The backend issues integer keys, but string keys are accepted so that
/// alternative sources can be plugged in without a lossy conversion.
///
/// # Examples
/// ```
/// use vibe_core::CafeId;
///
/// assert_eq!(CafeId::from(7).to_string(), "7");
/// assert_eq!(CafeId::from("corner-cup").to_string(), "corner-cup");
/// assert_eq!("7".parse::<CafeId>(), Ok(CafeId::Numeric(7)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CafeId {
    /// Integer key.
    Numeric(i64),
    /// Opaque string key.
    Text(String),
}

impl fmt::Display for CafeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl CafeId {
    /// Whether both identifiers display the same way.
    ///
    /// Sources may send the same key as an integer or as a digit-only
    /// string, so `Numeric(42)` and `Text("42")` name the same café.
    ///
    /// # Examples
    /// ```
    /// use vibe_core::CafeId;
    ///
    /// assert!(CafeId::Numeric(42).same_key(&CafeId::from("42")));
    /// assert!(!CafeId::Numeric(42).same_key(&CafeId::from("042")));
    /// ```
    #[must_use]
    pub fn same_key(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Numeric(n), Self::Text(t)) | (Self::Text(t), Self::Numeric(n)) => {
                *t == n.to_string()
            }
        }
    }
}

impl From<i64> for CafeId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for CafeId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CafeId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::str::FromStr for CafeId {
    type Err = std::convert::Infallible;

    /// Parse an identifier, preferring the numeric form when the input is an
    /// integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(trimmed
            .parse::<i64>()
            .map_or_else(|_| Self::Text(trimmed.to_owned()), Self::Numeric))
    }
}

/// A café near the queried location.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vibe_core::{CafeRecord, VibeProfile};
///
/// let cafe = CafeRecord::new(1, "Dark Horse", Coord { x: -79.39, y: 43.65 })
///     .with_distance_km(0.4)
///     .with_vibes(VibeProfile::default());
///
/// assert_eq!(cafe.lat(), 43.65);
/// assert_eq!(cafe.lng(), -79.39);
/// assert!(cafe.vibes.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CafeRecord {
    /// Unique identifier.
    pub id: CafeId,
    /// Display name.
    pub name: String,
    /// Street address, when the source knows it.
    pub address: Option<String>,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Aggregate review score.
    pub rating: Option<f64>,
    /// Relative price bracket reported by the source.
    pub price_level: Option<u8>,
    /// Distance from the query point in kilometres, as reported by the source.
    pub distance_km: Option<f64>,
    /// Enriched vibe attributes; absent when the café was never profiled.
    pub vibes: Option<VibeProfile>,
}

impl CafeRecord {
    /// Construct a record with only the mandatory fields populated.
    #[must_use]
    pub fn new(id: impl Into<CafeId>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            location,
            rating: None,
            price_level: None,
            distance_km: None,
            vibes: None,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.location.x
    }

    /// Attach a street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Attach a review score.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach the source-supplied distance from the query point.
    #[must_use]
    pub const fn with_distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = Some(distance_km);
        self
    }

    /// Attach a vibe profile.
    #[must_use]
    pub fn with_vibes(mut self, vibes: VibeProfile) -> Self {
        self.vibes = Some(vibes);
        self
    }
}
