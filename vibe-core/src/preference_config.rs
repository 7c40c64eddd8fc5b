//! Static rank and label table for every [`Preference`].
//!
//! The table is hand-authored domain knowledge: each preference maps the raw
//! category values of its vibe attribute to an integer rank (higher is more
//! desirable) and to a short user-facing label. Ranking only reads `rank`;
//! labels exist for presentation.
//!
//! # Examples
//! ```
//! use vibe_core::{Preference, RawVibe, preference_config};
//!
//! let quiet = preference_config(Preference::Quiet);
//! assert_eq!(quiet.rank_of(Some(RawVibe::Text("Quiet"))), 3);
//! assert_eq!(quiet.rank_of(Some(RawVibe::Text("Deafening"))), 0);
//! assert_eq!(quiet.rank_of(None), 0);
//! assert_eq!(quiet.label_of(RawVibe::Text("Quiet")), Some("Silent"));
//! ```

use crate::{Preference, RawVibe, VibeProfile};

/// Rank of the most desirable category value.
pub const TOP_RANK: u8 = 3;

/// One documented category value of a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    /// Raw value as supplied by the data source.
    pub value: RawVibe<'static>,
    /// Desirability; higher sorts first.
    pub rank: u8,
    /// Short label shown on cards, if the value deserves one.
    pub label: Option<&'static str>,
}

/// Rank and label configuration for a single preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceConfig {
    /// Preference this entry configures.
    pub preference: Preference,
    /// Button text for the preference toggle.
    pub label: &'static str,
    /// Documented category values, most desirable first.
    pub levels: &'static [Level],
}

const fn text(value: &'static str, rank: u8, label: &'static str) -> Level {
    Level {
        value: RawVibe::Text(value),
        rank,
        label: Some(label),
    }
}

const QUIET: PreferenceConfig = PreferenceConfig {
    preference: Preference::Quiet,
    label: "Quiet",
    levels: &[
        text("Quiet", 3, "Silent"),
        text("Moderate", 2, "Moderate"),
        text("Loud", 1, "Loud"),
    ],
};

const POWER: PreferenceConfig = PreferenceConfig {
    preference: Preference::Power,
    label: "Plugs",
    levels: &[
        text("Many", 3, "Many"),
        text("Scarce", 2, "Moderate"),
        text("None", 1, "Little/None"),
    ],
};

const LATE: PreferenceConfig = PreferenceConfig {
    preference: Preference::Late,
    label: "Late",
    levels: &[
        Level {
            value: RawVibe::Flag(true),
            rank: 1,
            label: Some("Open Late"),
        },
        Level {
            value: RawVibe::Flag(false),
            rank: 0,
            label: None,
        },
    ],
};

const FOOD: PreferenceConfig = PreferenceConfig {
    preference: Preference::Food,
    label: "Food",
    levels: &[
        text("Full Meals", 3, "Great Food"),
        text("Pastries", 2, "Good Food"),
        text("Coffee Only", 1, "Mod. Food"),
    ],
};

const WIFI: PreferenceConfig = PreferenceConfig {
    preference: Preference::Wifi,
    label: "Wifi",
    levels: &[
        text("Fast", 3, "Good Wifi"),
        text("Spotty", 2, "Mod. Wifi"),
        text("None", 1, "Poor Wifi"),
    ],
};

const GROUP: PreferenceConfig = PreferenceConfig {
    preference: Preference::Group,
    label: "Groups",
    levels: &[
        text("Good for Groups", 3, "> 5 ppl"),
        text("Best for Pairs", 2, "3-4 ppl"),
        text("Solo Only", 1, "1-2 ppl"),
    ],
};

/// The full table in display order.
pub const PREFERENCE_TABLE: [PreferenceConfig; 6] = [QUIET, POWER, LATE, FOOD, WIFI, GROUP];

/// Look up the configuration for `preference`.
#[must_use]
pub const fn preference_config(preference: Preference) -> &'static PreferenceConfig {
    match preference {
        Preference::Quiet => &QUIET,
        Preference::Power => &POWER,
        Preference::Late => &LATE,
        Preference::Food => &FOOD,
        Preference::Wifi => &WIFI,
        Preference::Group => &GROUP,
    }
}

impl PreferenceConfig {
    fn level(&self, raw: RawVibe<'_>) -> Option<&'static Level> {
        self.levels.iter().find(|level| level.value == raw)
    }

    /// Rank of `raw`; missing and undocumented values rank 0.
    #[must_use]
    pub fn rank_of(&self, raw: Option<RawVibe<'_>>) -> u8 {
        raw.and_then(|value| self.level(value))
            .map_or(0, |level| level.rank)
    }

    /// Display label for `raw`, if it is a documented value with a label.
    #[must_use]
    pub fn label_of(&self, raw: RawVibe<'_>) -> Option<&'static str> {
        self.level(raw).and_then(|level| level.label)
    }

    /// Whether `raw` is the best value this preference can take.
    ///
    /// Yes/no attributes count as top tier when set.
    #[must_use]
    pub fn is_top_tier(&self, raw: RawVibe<'_>) -> bool {
        match raw {
            RawVibe::Flag(flag) => flag,
            RawVibe::Text(_) => self.rank_of(Some(raw)) == TOP_RANK,
        }
    }
}

/// A top-tier attribute worth surfacing on a café card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    /// Preference the attribute belongs to.
    pub preference: Preference,
    /// User-facing label for the attribute value.
    pub label: &'static str,
}

/// Collect the top-tier attributes of `vibes` in table order.
///
/// # Examples
/// ```
/// use vibe_core::{Preference, VibeProfile, highlights};
///
/// let vibes = VibeProfile {
///     wifi_quality: Some("Fast".into()),
///     noise_level: Some("Loud".into()),
///     is_late_night: Some(true),
///     ..VibeProfile::default()
/// };
/// let labels: Vec<_> = highlights(&vibes).iter().map(|h| h.label).collect();
/// assert_eq!(labels, ["Open Late", "Good Wifi"]);
/// ```
#[must_use]
pub fn highlights(vibes: &VibeProfile) -> Vec<Highlight> {
    PREFERENCE_TABLE
        .iter()
        .filter_map(|config| {
            let raw = vibes.raw_value(config.preference)?;
            if !config.is_top_tier(raw) {
                return None;
            }
            let label = config.label_of(raw)?;
            Some(Highlight {
                preference: config.preference,
                label,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn table_is_in_preference_order() {
        let order: Vec<_> = PREFERENCE_TABLE.iter().map(|c| c.preference).collect();
        assert_eq!(order, Preference::ALL);
        for preference in Preference::ALL {
            assert_eq!(preference_config(preference).preference, preference);
        }
    }

    #[rstest]
    #[case(Preference::Quiet, "Quiet", 3)]
    #[case(Preference::Quiet, "Moderate", 2)]
    #[case(Preference::Quiet, "Loud", 1)]
    #[case(Preference::Power, "Many", 3)]
    #[case(Preference::Power, "Scarce", 2)]
    #[case(Preference::Power, "None", 1)]
    #[case(Preference::Food, "Full Meals", 3)]
    #[case(Preference::Food, "Pastries", 2)]
    #[case(Preference::Food, "Coffee Only", 1)]
    #[case(Preference::Wifi, "Fast", 3)]
    #[case(Preference::Wifi, "Spotty", 2)]
    #[case(Preference::Wifi, "None", 1)]
    #[case(Preference::Group, "Good for Groups", 3)]
    #[case(Preference::Group, "Best for Pairs", 2)]
    #[case(Preference::Group, "Solo Only", 1)]
    fn documented_values_rank(
        #[case] preference: Preference,
        #[case] value: &str,
        #[case] expected: u8,
    ) {
        let config = preference_config(preference);
        assert_eq!(config.rank_of(Some(RawVibe::Text(value))), expected);
    }

    #[rstest]
    #[case(Preference::Quiet, RawVibe::Text("quiet"))]
    #[case(Preference::Wifi, RawVibe::Text("Blazing"))]
    #[case(Preference::Quiet, RawVibe::Flag(true))]
    #[case(Preference::Late, RawVibe::Text("true"))]
    fn undocumented_values_rank_zero(#[case] preference: Preference, #[case] raw: RawVibe<'_>) {
        assert_eq!(preference_config(preference).rank_of(Some(raw)), 0);
    }

    #[rstest]
    fn late_night_ranks_flags() {
        let late = preference_config(Preference::Late);
        assert_eq!(late.rank_of(Some(RawVibe::Flag(true))), 1);
        assert_eq!(late.rank_of(Some(RawVibe::Flag(false))), 0);
        assert!(late.is_top_tier(RawVibe::Flag(true)));
        assert!(!late.is_top_tier(RawVibe::Flag(false)));
        assert_eq!(late.label_of(RawVibe::Flag(false)), None);
    }

    #[rstest]
    fn highlights_skip_lower_tiers_and_missing_values() {
        let vibes = VibeProfile {
            noise_level: Some("Quiet".into()),
            outlets_level: Some("Scarce".into()),
            is_late_night: Some(false),
            group_suitability: Some("Good for Groups".into()),
            ..VibeProfile::default()
        };
        let found: Vec<_> = highlights(&vibes)
            .into_iter()
            .map(|h| (h.preference, h.label))
            .collect();
        assert_eq!(
            found,
            vec![
                (Preference::Quiet, "Silent"),
                (Preference::Group, "> 5 ppl"),
            ]
        );
    }

    #[rstest]
    fn empty_profile_has_no_highlights() {
        assert!(highlights(&VibeProfile::default()).is_empty());
    }
}
