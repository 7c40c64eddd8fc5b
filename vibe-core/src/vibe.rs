//! Vibe profiles: the subjective and operational attributes of a café.
//!
//! Category fields keep the raw value supplied by the data source. Absence
//! means "unknown", which is distinct from a defined but undesirable value;
//! ranking treats both unknown and unrecognised values as rank 0.

use crate::Preference;

/// Enriched attributes describing what a café is like to spend time in.
///
/// # Examples
/// ```
/// use vibe_core::{Preference, RawVibe, VibeProfile};
///
/// let vibes = VibeProfile {
///     noise_level: Some("Quiet".into()),
///     is_late_night: Some(true),
///     ..VibeProfile::default()
/// };
/// assert_eq!(vibes.raw_value(Preference::Quiet), Some(RawVibe::Text("Quiet")));
/// assert_eq!(vibes.raw_value(Preference::Late), Some(RawVibe::Flag(true)));
/// assert_eq!(vibes.raw_value(Preference::Wifi), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VibeProfile {
    /// Free-text description of the atmosphere.
    pub summary: Option<String>,
    /// Descriptive tags such as "Cozy" or "Minimalist".
    pub vibe_tags: Vec<String>,
    /// Activities the café suits, e.g. "Study" or "Date".
    pub best_for: Vec<String>,
    /// One of Quiet, Moderate or Loud.
    pub noise_level: Option<String>,
    /// One of Fast, Spotty or None.
    pub wifi_quality: Option<String>,
    /// One of Many, Scarce or None.
    pub outlets_level: Option<String>,
    /// Seating comfort, e.g. "Cozy".
    pub comfort_level: Option<String>,
    /// One of Full Meals, Pastries or Coffee Only.
    pub food_type: Option<String>,
    /// Advice on where to sit.
    pub seating_tip: Option<String>,
    /// Notes on when the café gets crowded.
    pub busyness_info: Option<String>,
    /// One of Good for Groups, Best for Pairs or Solo Only.
    pub group_suitability: Option<String>,
    /// Whether the café stays open late.
    pub is_late_night: Option<bool>,
    /// Seating time limit policy, e.g. "Strict".
    pub time_limit_status: Option<String>,
    /// Restroom availability notes.
    pub bathroom_status: Option<String>,
    /// Whether the space gets natural light.
    pub has_natural_light: Option<bool>,
}

/// A borrowed raw attribute value looked up for a [`Preference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawVibe<'a> {
    /// A category value such as `"Quiet"`.
    Text(&'a str),
    /// A yes/no attribute such as late-night opening.
    Flag(bool),
}

impl VibeProfile {
    /// Return the raw value of the attribute backing `preference`.
    #[must_use]
    pub fn raw_value(&self, preference: Preference) -> Option<RawVibe<'_>> {
        let text = match preference {
            Preference::Quiet => &self.noise_level,
            Preference::Power => &self.outlets_level,
            Preference::Food => &self.food_type,
            Preference::Wifi => &self.wifi_quality,
            Preference::Group => &self.group_suitability,
            Preference::Late => return self.is_late_night.map(RawVibe::Flag),
        };
        text.as_deref().map(RawVibe::Text)
    }

    /// Whether `best_for` lists `tag` (exact, case-sensitive match).
    #[must_use]
    pub fn is_best_for(&self, tag: &str) -> bool {
        self.best_for.iter().any(|candidate| candidate == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Preference::Quiet, "noise")]
    #[case(Preference::Power, "outlets")]
    #[case(Preference::Food, "food")]
    #[case(Preference::Wifi, "wifi")]
    #[case(Preference::Group, "group")]
    fn text_preferences_read_their_own_field(#[case] preference: Preference, #[case] value: &str) {
        let vibes = VibeProfile {
            noise_level: Some("noise".into()),
            outlets_level: Some("outlets".into()),
            food_type: Some("food".into()),
            wifi_quality: Some("wifi".into()),
            group_suitability: Some("group".into()),
            ..VibeProfile::default()
        };
        assert_eq!(vibes.raw_value(preference), Some(RawVibe::Text(value)));
    }

    #[rstest]
    fn late_preference_reads_flag() {
        let vibes = VibeProfile {
            is_late_night: Some(false),
            ..VibeProfile::default()
        };
        assert_eq!(vibes.raw_value(Preference::Late), Some(RawVibe::Flag(false)));
    }

    #[rstest]
    fn best_for_is_case_sensitive() {
        let vibes = VibeProfile {
            best_for: vec!["Study".into()],
            ..VibeProfile::default()
        };
        assert!(vibes.is_best_for("Study"));
        assert!(!vibes.is_best_for("study"));
    }
}
