//! Purpose filtering and preference ordering of café records.
//!
//! Ranking is a pure function of `(records, purpose, preferences)`:
//!
//! 1. Records failing the purpose predicate are dropped.
//! 2. With no active preference the survivors keep their input order.
//!    Otherwise they are stably sorted by the rank of the *primary* (most
//!    recently activated) preference, best first. No other preference breaks
//!    ties.
//!
//! Nothing here can fail: missing profiles, missing fields and unknown values
//! all degrade to "no match" or rank 0.

use std::borrow::Borrow;
use std::cmp::Reverse;

use crate::{CafeRecord, Preference, PreferenceSet, Purpose, preference_config};

/// Rank of `record` under `preference`; 0 when unknown.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vibe_core::{CafeRecord, Preference, VibeProfile, score};
///
/// let cafe = CafeRecord::new(1, "Quiet Corner", Coord { x: 0.0, y: 0.0 }).with_vibes(
///     VibeProfile {
///         noise_level: Some("Quiet".into()),
///         ..VibeProfile::default()
///     },
/// );
/// assert_eq!(score(&cafe, Preference::Quiet), 3);
/// assert_eq!(score(&cafe, Preference::Wifi), 0);
/// ```
#[must_use]
pub fn score(record: &CafeRecord, preference: Preference) -> u8 {
    let raw = record
        .vibes
        .as_ref()
        .and_then(|vibes| vibes.raw_value(preference));
    preference_config(preference).rank_of(raw)
}

/// Filter `records` by `purpose` and order them by the primary preference.
///
/// Accepts owned records or anything that borrows a [`CafeRecord`], so the
/// output of one call can be fed straight into another.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vibe_core::{CafeRecord, PreferenceSet, Purpose, VibeProfile, rank};
///
/// let noisy = |id: i64, level: &str| {
///     CafeRecord::new(id, format!("cafe {id}"), Coord { x: 0.0, y: 0.0 }).with_vibes(
///         VibeProfile {
///             noise_level: Some(level.into()),
///             ..VibeProfile::default()
///         },
///     )
/// };
/// let records = vec![noisy(1, "Loud"), noisy(2, "Quiet"), noisy(3, "Moderate")];
/// let prefs: PreferenceSet = "quiet".parse()?;
///
/// let ranked = rank(&records, Purpose::All, &prefs);
/// let names: Vec<_> = ranked.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["cafe 2", "cafe 3", "cafe 1"]);
/// # Ok::<(), vibe_core::ParseVibeError>(())
/// ```
pub fn rank<R, I>(records: I, purpose: Purpose, preferences: &PreferenceSet) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    R: Borrow<CafeRecord>,
{
    let mut kept: Vec<R> = records
        .into_iter()
        .filter(|record| purpose.matches(record.borrow().vibes.as_ref()))
        .collect();

    if let Some(primary) = preferences.primary() {
        // `sort_by_key` is stable, so equal scores keep their filtered order.
        kept.sort_by_key(|record| Reverse(score(record.borrow(), primary)));
    }
    kept
}

/// A purpose and preference selection that can be applied to record sets.
///
/// # Examples
/// ```
/// use vibe_core::{Preference, Purpose, VibeRanker};
///
/// let mut ranker = VibeRanker::new(Purpose::Study);
/// ranker.toggle_preference(Preference::Power);
/// assert_eq!(ranker.preferences().primary(), Some(Preference::Power));
/// assert!(ranker.rank(Vec::<vibe_core::CafeRecord>::new()).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VibeRanker {
    purpose: Purpose,
    preferences: PreferenceSet,
}

impl VibeRanker {
    /// Construct a ranker for `purpose` with no active preferences.
    #[must_use]
    pub const fn new(purpose: Purpose) -> Self {
        Self {
            purpose,
            preferences: PreferenceSet::new(),
        }
    }

    /// Replace the active preferences while returning `self` for chaining.
    #[must_use]
    pub fn with_preferences(mut self, preferences: PreferenceSet) -> Self {
        self.preferences = preferences;
        self
    }

    /// Active purpose.
    #[must_use]
    pub const fn purpose(&self) -> Purpose {
        self.purpose
    }

    /// Active preferences, oldest first.
    #[must_use]
    pub const fn preferences(&self) -> &PreferenceSet {
        &self.preferences
    }

    /// Switch to another purpose.
    pub const fn set_purpose(&mut self, purpose: Purpose) {
        self.purpose = purpose;
    }

    /// Toggle a preference; see [`PreferenceSet::toggle`].
    pub fn toggle_preference(&mut self, preference: Preference) -> bool {
        self.preferences.toggle(preference)
    }

    /// Apply [`rank`] with this selection.
    pub fn rank<R, I>(&self, records: I) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
        R: Borrow<CafeRecord>,
    {
        rank(records, self.purpose, &self.preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VibeProfile;
    use geo::Coord;
    use rstest::{fixture, rstest};

    fn cafe(id: i64, vibes: Option<VibeProfile>) -> CafeRecord {
        let base = || CafeRecord::new(id, format!("cafe {id}"), Coord { x: 0.0, y: 0.0 });
        vibes.map_or_else(base, |profile| base().with_vibes(profile))
    }

    fn noise(level: &str) -> Option<VibeProfile> {
        Some(VibeProfile {
            noise_level: Some(level.into()),
            ..VibeProfile::default()
        })
    }

    fn ids(records: &[&CafeRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[fixture]
    fn abc() -> Vec<CafeRecord> {
        vec![
            cafe(1, noise("Quiet")),
            cafe(2, noise("Moderate")),
            cafe(3, noise("Loud")),
        ]
    }

    #[rstest]
    fn quiet_preference_orders_by_rank(abc: Vec<CafeRecord>) {
        let prefs: PreferenceSet = [Preference::Quiet].into_iter().collect();
        assert_eq!(ids(&rank(&abc, Purpose::All, &prefs)), ["1", "2", "3"]);
    }

    #[rstest]
    fn no_preferences_keep_input_order(abc: Vec<CafeRecord>) {
        let reversed: Vec<_> = abc.iter().rev().collect();
        let ranked = rank(reversed, Purpose::All, &PreferenceSet::new());
        assert_eq!(ids(&ranked), ["3", "2", "1"]);
    }

    #[rstest]
    fn unknown_and_missing_values_sink_to_the_bottom_in_order() {
        let records = vec![
            cafe(1, None),
            cafe(2, noise("Whisper")),
            cafe(3, noise("Loud")),
            cafe(4, Some(VibeProfile::default())),
        ];
        let prefs: PreferenceSet = [Preference::Quiet].into_iter().collect();
        assert_eq!(
            ids(&rank(&records, Purpose::All, &prefs)),
            ["3", "1", "2", "4"]
        );
    }

    #[rstest]
    fn only_the_primary_preference_sorts() {
        let records = vec![
            cafe(
                1,
                Some(VibeProfile {
                    noise_level: Some("Quiet".into()),
                    wifi_quality: Some("None".into()),
                    ..VibeProfile::default()
                }),
            ),
            cafe(
                2,
                Some(VibeProfile {
                    noise_level: Some("Loud".into()),
                    wifi_quality: Some("Fast".into()),
                    ..VibeProfile::default()
                }),
            ),
        ];
        let prefs: PreferenceSet = "quiet,wifi".parse().expect("valid preferences");
        assert_eq!(ids(&rank(&records, Purpose::All, &prefs)), ["2", "1"]);
    }

    #[rstest]
    fn late_night_flag_sorts_open_late_first() {
        let late = |flag: Option<bool>| {
            Some(VibeProfile {
                is_late_night: flag,
                ..VibeProfile::default()
            })
        };
        let records = vec![
            cafe(1, late(Some(false))),
            cafe(2, late(None)),
            cafe(3, late(Some(true))),
        ];
        let prefs: PreferenceSet = [Preference::Late].into_iter().collect();
        assert_eq!(ids(&rank(&records, Purpose::All, &prefs)), ["3", "1", "2"]);
    }

    #[rstest]
    fn purpose_filter_drops_records_without_vibes() {
        let records = vec![
            cafe(1, None),
            cafe(
                2,
                Some(VibeProfile {
                    best_for: vec!["Study".into()],
                    ..VibeProfile::default()
                }),
            ),
        ];
        let study = rank(&records, Purpose::Study, &PreferenceSet::new());
        assert_eq!(ids(&study), ["2"]);
        let all = rank(&records, Purpose::All, &PreferenceSet::new());
        assert_eq!(ids(&all), ["1", "2"]);
    }

    #[rstest]
    fn owned_records_rank_without_cloning(abc: Vec<CafeRecord>) {
        let prefs: PreferenceSet = [Preference::Quiet].into_iter().collect();
        let ranked: Vec<CafeRecord> = rank(abc.into_iter().rev(), Purpose::All, &prefs);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["cafe 1", "cafe 2", "cafe 3"]);
    }

    #[rstest]
    fn ranker_applies_its_selection(abc: Vec<CafeRecord>) {
        let mut ranker = VibeRanker::new(Purpose::Social);
        ranker.toggle_preference(Preference::Quiet);
        assert_eq!(ids(&ranker.rank(&abc)), ["2"]);
        ranker.set_purpose(Purpose::All);
        assert_eq!(ranker.purpose(), Purpose::All);
        assert_eq!(ids(&ranker.rank(&abc)), ["1", "2", "3"]);
    }

    #[rstest]
    fn empty_input_yields_empty_output() {
        let prefs: PreferenceSet = "group".parse().expect("valid preferences");
        for purpose in Purpose::ALL {
            assert!(rank(Vec::<CafeRecord>::new(), purpose, &prefs).is_empty());
        }
    }
}
