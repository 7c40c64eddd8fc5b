//! Purposes: coarse activity intents that drop non-matching cafés entirely.
//!
//! Each specific purpose is an OR of a `best_for` tag and one attribute
//! equality. Records without a vibe profile never match a specific purpose.

use std::fmt;

use crate::{ParseVibeError, VibeProfile};

/// What the user is planning to do at the café.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Purpose {
    /// No filtering.
    #[default]
    All,
    /// Focused work: study-tagged cafés or plenty of outlets.
    Study,
    /// Conversation: social-tagged cafés or moderate noise.
    Social,
    /// Group work: group-tagged cafés or rooms suited to groups.
    Group,
    /// Dates: date-tagged cafés or cozy seating.
    Date,
}

/// Attribute clause of a purpose predicate.
struct Clause {
    tag: &'static str,
    attribute: fn(&VibeProfile) -> Option<&str>,
    expected: &'static str,
}

impl Clause {
    fn holds(&self, vibes: &VibeProfile) -> bool {
        vibes.is_best_for(self.tag) || (self.attribute)(vibes) == Some(self.expected)
    }
}

fn outlets(vibes: &VibeProfile) -> Option<&str> {
    vibes.outlets_level.as_deref()
}

fn noise(vibes: &VibeProfile) -> Option<&str> {
    vibes.noise_level.as_deref()
}

fn group_size(vibes: &VibeProfile) -> Option<&str> {
    vibes.group_suitability.as_deref()
}

fn comfort(vibes: &VibeProfile) -> Option<&str> {
    vibes.comfort_level.as_deref()
}

const STUDY: Clause = Clause {
    tag: "Study",
    attribute: outlets,
    expected: "Many",
};

const SOCIAL: Clause = Clause {
    tag: "Social",
    attribute: noise,
    expected: "Moderate",
};

const GROUP: Clause = Clause {
    tag: "Group Work",
    attribute: group_size,
    expected: "Good for Groups",
};

const DATE: Clause = Clause {
    tag: "Date",
    attribute: comfort,
    expected: "Cozy",
};

impl Purpose {
    /// Every purpose in display order.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Study,
        Self::Social,
        Self::Group,
        Self::Date,
    ];

    /// Return the purpose identifier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Study => "study",
            Self::Social => "social",
            Self::Group => "group",
            Self::Date => "date",
        }
    }

    /// Button text for the purpose selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Study => "Focus",
            Self::Social => "Chat",
            Self::Group => "Group",
            Self::Date => "Date",
        }
    }

    const fn clause(self) -> Option<&'static Clause> {
        match self {
            Self::All => None,
            Self::Study => Some(&STUDY),
            Self::Social => Some(&SOCIAL),
            Self::Group => Some(&GROUP),
            Self::Date => Some(&DATE),
        }
    }

    /// Whether a café with the given vibe profile is kept under this purpose.
    ///
    /// `All` keeps cafés without a profile. The original web client dropped
    /// them under every purpose, `All` included.
    ///
    /// # Examples
    /// ```
    /// use vibe_core::{Purpose, VibeProfile};
    ///
    /// let vibes = VibeProfile {
    ///     best_for: vec!["Study".into()],
    ///     ..VibeProfile::default()
    /// };
    /// assert!(Purpose::Study.matches(Some(&vibes)));
    /// assert!(!Purpose::Date.matches(Some(&vibes)));
    /// assert!(!Purpose::Study.matches(None));
    /// assert!(Purpose::All.matches(None));
    /// ```
    #[must_use]
    pub fn matches(self, vibes: Option<&VibeProfile>) -> bool {
        match (self.clause(), vibes) {
            (None, _) => true,
            (Some(clause), Some(profile)) => clause.holds(profile),
            (Some(_), None) => false,
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Purpose {
    type Err = ParseVibeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseVibeError::UnknownPurpose(wanted.to_owned()))
    }
}
