//! Read-only view models for a single café's profile panel.

use url::form_urlencoded;

use crate::{CafeRecord, Preference, RawVibe, VibeProfile, preference_config};

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";
const UNKNOWN: &str = "-";
const DEFAULT_SEATING_TIP: &str = "Arrive early.";
const DEFAULT_CROWD: &str = "Steady.";

/// Badge order in the profile grid.
const BADGE_ORDER: [Preference; 6] = [
    Preference::Wifi,
    Preference::Power,
    Preference::Quiet,
    Preference::Food,
    Preference::Group,
    Preference::Late,
];

/// One cell of the attribute grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Preference the cell describes.
    pub preference: Preference,
    /// Preference label, e.g. "Plugs".
    pub label: &'static str,
    /// Value shown under the label.
    pub value: String,
}

/// Everything the profile panel shows for one café.
#[derive(Debug, Clone, PartialEq)]
pub struct CafeDetail {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Source-supplied distance from the query point.
    pub distance_km: Option<f64>,
    /// Aggregate review score.
    pub rating: Option<f64>,
    /// Purpose tags.
    pub best_for: Vec<String>,
    /// Vibe summary.
    pub summary: Option<String>,
    /// Attribute grid in display order.
    pub badges: Vec<Badge>,
    /// Time-limit policy phrased for display.
    pub time_limit: &'static str,
    /// Seating advice.
    pub seating_tip: String,
    /// Crowd notes.
    pub crowd: String,
    /// Link to the café in Google Maps.
    pub maps_url: String,
}

fn badge_value(vibes: Option<&VibeProfile>, preference: Preference) -> String {
    let raw = vibes.and_then(|profile| profile.raw_value(preference));
    match (preference, raw) {
        (Preference::Late, Some(RawVibe::Flag(true))) => "Yes".to_owned(),
        (Preference::Late, _) => "No".to_owned(),
        (Preference::Group, Some(RawVibe::Text("Good for Groups"))) => "Good".to_owned(),
        (Preference::Group, Some(RawVibe::Text("Best for Pairs"))) => "Pairs".to_owned(),
        (Preference::Group, _) => "Solo".to_owned(),
        (_, Some(RawVibe::Text(value))) => value.to_owned(),
        (_, Some(RawVibe::Flag(flag))) => flag.to_string(),
        (_, None) => UNKNOWN.to_owned(),
    }
}

impl CafeDetail {
    /// Build the panel contents for `record`.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use vibe_core::{CafeDetail, CafeRecord};
    ///
    /// let cafe = CafeRecord::new(1, "Pilot", Coord { x: 0.0, y: 0.0 });
    /// let detail = CafeDetail::from_record(&cafe);
    /// assert_eq!(detail.seating_tip, "Arrive early.");
    /// assert_eq!(detail.time_limit, "Chill / None");
    /// assert_eq!(detail.badges.len(), 6);
    /// ```
    #[must_use]
    pub fn from_record(record: &CafeRecord) -> Self {
        let vibes = record.vibes.as_ref();
        let badges = BADGE_ORDER
            .into_iter()
            .map(|preference| Badge {
                preference,
                label: preference_config(preference).label,
                value: badge_value(vibes, preference),
            })
            .collect();
        let strict = vibes.and_then(|v| v.time_limit_status.as_deref()) == Some("Strict");

        Self {
            name: record.name.clone(),
            address: record.address.clone(),
            distance_km: record.distance_km,
            rating: record.rating,
            best_for: vibes.map(|v| v.best_for.clone()).unwrap_or_default(),
            summary: vibes.and_then(|v| v.summary.clone()),
            badges,
            time_limit: if strict { "Strict limits" } else { "Chill / None" },
            seating_tip: vibes
                .and_then(|v| v.seating_tip.clone())
                .unwrap_or_else(|| DEFAULT_SEATING_TIP.to_owned()),
            crowd: vibes
                .and_then(|v| v.busyness_info.clone())
                .unwrap_or_else(|| DEFAULT_CROWD.to_owned()),
            maps_url: maps_search_url(record),
        }
    }
}

/// Google Maps search link for the café's name and address.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vibe_core::{CafeRecord, maps_search_url};
///
/// let cafe = CafeRecord::new(1, "Pilot", Coord { x: 0.0, y: 0.0 }).with_address("1 Front St");
/// assert_eq!(
///     maps_search_url(&cafe),
///     "https://www.google.com/maps/search/?api=1&query=Pilot+1+Front+St"
/// );
/// ```
#[must_use]
pub fn maps_search_url(record: &CafeRecord) -> String {
    let query = record.address.as_deref().map_or_else(
        || record.name.clone(),
        |address| format!("{} {address}", record.name),
    );
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{MAPS_SEARCH_BASE}{encoded}")
}
