//! Preferences: fine-grained attributes used to order, never to drop, cafés.
//!
//! The active preferences form a toggle set that remembers insertion order.
//! Only the most recently activated preference drives sorting, so the set is
//! an ordered sequence with de-duplication on insert rather than a true set.
//!
//! # Examples
//! ```
//! use vibe_core::{Preference, PreferenceSet};
//!
//! let mut prefs = PreferenceSet::new();
//! prefs.toggle(Preference::Quiet);
//! prefs.toggle(Preference::Power);
//! assert_eq!(prefs.primary(), Some(Preference::Power));
//!
//! prefs.toggle(Preference::Power);
//! assert_eq!(prefs.primary(), Some(Preference::Quiet));
//! ```

use std::fmt;

use crate::ParseVibeError;

/// A sortable vibe attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    /// Quieter rooms first.
    Quiet,
    /// More power outlets first.
    Power,
    /// Late-night opening first.
    Late,
    /// Heartier food first.
    Food,
    /// Faster wifi first.
    Wifi,
    /// Larger group capacity first.
    Group,
}

impl Preference {
    /// Every preference in display order.
    pub const ALL: [Self; 6] = [
        Self::Quiet,
        Self::Power,
        Self::Late,
        Self::Food,
        Self::Wifi,
        Self::Group,
    ];

    /// Return the preference identifier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Power => "power",
            Self::Late => "late",
            Self::Food => "food",
            Self::Wifi => "wifi",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Preference {
    type Err = ParseVibeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseVibeError::UnknownPreference(wanted.to_owned()))
    }
}

/// Active preferences in the order the user switched them on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PreferenceSet {
    active: Vec<Preference>,
}

impl PreferenceSet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: Vec::new() }
    }

    /// Switch `preference` off when active, otherwise append it.
    ///
    /// Returns whether the preference is active afterwards.
    pub fn toggle(&mut self, preference: Preference) -> bool {
        if self.deactivate(preference) {
            false
        } else {
            self.active.push(preference);
            true
        }
    }

    /// Append `preference` unless it is already active.
    ///
    /// An already active preference keeps its position.
    pub fn activate(&mut self, preference: Preference) {
        if !self.contains(preference) {
            self.active.push(preference);
        }
    }

    /// Remove `preference`, returning whether it was active.
    pub fn deactivate(&mut self, preference: Preference) -> bool {
        let before = self.active.len();
        self.active.retain(|&candidate| candidate != preference);
        self.active.len() != before
    }

    /// Whether `preference` is active.
    #[must_use]
    pub fn contains(&self, preference: Preference) -> bool {
        self.active.contains(&preference)
    }

    /// The most recently activated preference, which alone drives sorting.
    #[must_use]
    pub fn primary(&self) -> Option<Preference> {
        self.active.last().copied()
    }

    /// Iterate over active preferences, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Preference> + '_ {
        self.active.iter().copied()
    }

    /// Whether no preference is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of active preferences.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.active.len()
    }
}

impl FromIterator<Preference> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = Preference>>(iter: I) -> Self {
        let mut set = Self::new();
        for preference in iter {
            set.activate(preference);
        }
        set
    }
}

impl fmt::Display for PreferenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Preference::as_str).collect();
        f.write_str(&names.join(","))
    }
}

impl std::str::FromStr for PreferenceSet {
    type Err = ParseVibeError;

    /// Parse a comma-separated list such as `"quiet, power"`.
    ///
    /// Blank segments are ignored and repeated names keep their first
    /// position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::parse::<Preference>)
            .collect()
    }
}
