//! JSON wire format of the backend's `/cafes` endpoint.
//!
//! The backend answers with an array of café objects. `vibes` is `null` for
//! cafés that have not been surveyed yet, and list fields inside it may also
//! be `null`. Unknown fields are ignored so the backend can grow its schema
//! without breaking older clients.

use geo::Coord;
use serde::{Deserialize, Serialize};
use vibe_core::{CafeId, CafeRecord, VibeProfile};

/// Café identifier as it appears on the wire: an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    /// Integer key, as issued by the reference backend.
    Numeric(i64),
    /// String key.
    Text(String),
}

impl From<WireId> for CafeId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Numeric(id) => Self::Numeric(id),
            WireId::Text(id) => Self::Text(id),
        }
    }
}

impl From<&CafeId> for WireId {
    fn from(id: &CafeId) -> Self {
        match id {
            CafeId::Numeric(id) => Self::Numeric(*id),
            CafeId::Text(id) => Self::Text(id.clone()),
        }
    }
}

/// One element of the `/cafes` response array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CafePayload {
    /// Café identifier.
    pub id: WireId,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Aggregate review score.
    pub rating: Option<f64>,
    /// Price bracket.
    pub price_level: Option<u8>,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Distance from the query point, rounded by the backend.
    pub distance_km: Option<f64>,
    /// Qualitative attributes, `null` when the café has not been surveyed.
    pub vibes: Option<VibePayload>,
}

/// The `vibes` object of a café payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibePayload {
    /// Free-text description.
    pub summary: Option<String>,
    /// Descriptive tags.
    pub vibe_tags: Option<Vec<String>>,
    /// Purpose tags such as "Study" or "Date".
    pub best_for: Option<Vec<String>>,
    /// Noise category.
    pub noise_level: Option<String>,
    /// Wi-Fi category.
    pub wifi_quality: Option<String>,
    /// Power outlet category.
    pub outlets_level: Option<String>,
    /// Seating comfort category.
    pub comfort_level: Option<String>,
    /// Food offering category.
    pub food_type: Option<String>,
    /// Seating advice.
    pub seating_tip: Option<String>,
    /// Crowd notes.
    pub busyness_info: Option<String>,
    /// Group size category.
    pub group_suitability: Option<String>,
    /// Whether the café stays open late.
    pub is_late_night: Option<bool>,
    /// Time-limit policy.
    pub time_limit_status: Option<String>,
    /// Bathroom notes.
    pub bathroom_status: Option<String>,
    /// Whether the café gets natural light.
    pub has_natural_light: Option<bool>,
}

impl From<VibePayload> for VibeProfile {
    fn from(payload: VibePayload) -> Self {
        Self {
            summary: payload.summary,
            vibe_tags: payload.vibe_tags.unwrap_or_default(),
            best_for: payload.best_for.unwrap_or_default(),
            noise_level: payload.noise_level,
            wifi_quality: payload.wifi_quality,
            outlets_level: payload.outlets_level,
            comfort_level: payload.comfort_level,
            food_type: payload.food_type,
            seating_tip: payload.seating_tip,
            busyness_info: payload.busyness_info,
            group_suitability: payload.group_suitability,
            is_late_night: payload.is_late_night,
            time_limit_status: payload.time_limit_status,
            bathroom_status: payload.bathroom_status,
            has_natural_light: payload.has_natural_light,
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

impl From<&VibeProfile> for VibePayload {
    fn from(profile: &VibeProfile) -> Self {
        Self {
            summary: profile.summary.clone(),
            vibe_tags: non_empty(&profile.vibe_tags),
            best_for: non_empty(&profile.best_for),
            noise_level: profile.noise_level.clone(),
            wifi_quality: profile.wifi_quality.clone(),
            outlets_level: profile.outlets_level.clone(),
            comfort_level: profile.comfort_level.clone(),
            food_type: profile.food_type.clone(),
            seating_tip: profile.seating_tip.clone(),
            busyness_info: profile.busyness_info.clone(),
            group_suitability: profile.group_suitability.clone(),
            is_late_night: profile.is_late_night,
            time_limit_status: profile.time_limit_status.clone(),
            bathroom_status: profile.bathroom_status.clone(),
            has_natural_light: profile.has_natural_light,
        }
    }
}

impl From<CafePayload> for CafeRecord {
    fn from(payload: CafePayload) -> Self {
        Self {
            id: payload.id.into(),
            name: payload.name,
            address: payload.address,
            location: Coord {
                x: payload.lng,
                y: payload.lat,
            },
            rating: payload.rating,
            price_level: payload.price_level,
            distance_km: payload.distance_km,
            vibes: payload.vibes.map(VibeProfile::from),
        }
    }
}

impl From<&CafeRecord> for CafePayload {
    fn from(record: &CafeRecord) -> Self {
        Self {
            id: WireId::from(&record.id),
            name: record.name.clone(),
            address: record.address.clone(),
            rating: record.rating,
            price_level: record.price_level,
            lat: record.lat(),
            lng: record.lng(),
            distance_km: record.distance_km,
            vibes: record.vibes.as_ref().map(VibePayload::from),
        }
    }
}

/// Decode a `/cafes` response body into records, preserving order.
///
/// # Errors
/// Returns the `serde_json` error when the body is not an array of café
/// objects.
pub fn decode_cafes(body: &str) -> Result<Vec<CafeRecord>, serde_json::Error> {
    let payloads: Vec<CafePayload> = serde_json::from_str(body)?;
    Ok(payloads.into_iter().map(CafeRecord::from).collect())
}
