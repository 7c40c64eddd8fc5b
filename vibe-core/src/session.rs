//! Reactive ranking state for an interactive client.
//!
//! A [`RankingSession`] owns the latest records snapshot together with the
//! user's purpose, preference toggles and selected café. The ranked view is
//! recomputed lazily: only when the records version, the purpose or the
//! preferences changed since the last call to [`RankingSession::ranked`].
//!
//! Fetches for different locations may complete out of order. Each fetch is
//! tagged with a [`QueryTicket`]; results for anything but the latest ticket
//! are discarded.

use std::borrow::Borrow;
use std::sync::Arc;

use log::debug;

use crate::{CafeId, CafeQuery, CafeRecord, Preference, PreferenceSet, Purpose, VibeRanker};

/// Handle identifying one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
struct RankingKey {
    version: u64,
    ranker: VibeRanker,
}

#[derive(Debug, Clone)]
struct CachedRanking {
    key: RankingKey,
    order: Vec<usize>,
}

/// Record paired with its position in the snapshot.
struct Indexed<'a> {
    index: usize,
    record: &'a CafeRecord,
}

impl Borrow<CafeRecord> for Indexed<'_> {
    fn borrow(&self) -> &CafeRecord {
        self.record
    }
}

/// Records snapshot plus filter state, with a memoised ranked view.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use vibe_core::{CafeQuery, CafeRecord, Preference, RankingSession, VibeProfile};
///
/// let mut session = RankingSession::new();
/// let ticket = session.begin_query(CafeQuery::default());
/// let cafe = CafeRecord::new(1, "Pilot", Coord { x: -79.38, y: 43.65 })
///     .with_vibes(VibeProfile::default());
/// assert!(session.complete_query(ticket, vec![cafe]));
///
/// session.toggle_preference(Preference::Wifi);
/// assert_eq!(session.ranked().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RankingSession {
    records: Arc<[CafeRecord]>,
    version: u64,
    ranker: VibeRanker,
    selected: Option<CafeId>,
    latest_ticket: u64,
    query: Option<CafeQuery>,
    cache: Option<CachedRanking>,
    recomputations: usize,
}

impl RankingSession {
    /// Construct an empty session with the `all` purpose and no preferences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current records snapshot in source order.
    #[must_use]
    pub fn records(&self) -> &[CafeRecord] {
        &self.records
    }

    /// Query most recently started with [`Self::begin_query`].
    #[must_use]
    pub const fn current_query(&self) -> Option<&CafeQuery> {
        self.query.as_ref()
    }

    /// Active purpose.
    #[must_use]
    pub const fn purpose(&self) -> Purpose {
        self.ranker.purpose()
    }

    /// Active preferences, oldest first.
    #[must_use]
    pub const fn preferences(&self) -> &PreferenceSet {
        self.ranker.preferences()
    }

    /// Switch to another purpose.
    pub const fn set_purpose(&mut self, purpose: Purpose) {
        self.ranker.set_purpose(purpose);
    }

    /// Toggle a preference, returning whether it is active afterwards.
    pub fn toggle_preference(&mut self, preference: Preference) -> bool {
        self.ranker.toggle_preference(preference)
    }

    /// Replace the whole preference set.
    pub fn set_preferences(&mut self, preferences: PreferenceSet) {
        self.ranker = self.ranker.clone().with_preferences(preferences);
    }

    /// Install a new records snapshot and clear the selection.
    pub fn replace_records(&mut self, records: impl Into<Arc<[CafeRecord]>>) {
        self.records = records.into();
        self.version = self.version.wrapping_add(1);
        self.selected = None;
    }

    /// Start a fetch for `query`, superseding any fetch still in flight.
    pub fn begin_query(&mut self, query: CafeQuery) -> QueryTicket {
        self.latest_ticket = self.latest_ticket.wrapping_add(1);
        self.query = Some(query);
        QueryTicket(self.latest_ticket)
    }

    /// Deliver the records fetched for `ticket`.
    ///
    /// Returns `false`, leaving the session untouched, when a newer query has
    /// been started since `ticket` was issued.
    pub fn complete_query(&mut self, ticket: QueryTicket, records: Vec<CafeRecord>) -> bool {
        if ticket.0 != self.latest_ticket {
            debug!(
                "discarding {} records for stale query ticket {} (latest is {})",
                records.len(),
                ticket.0,
                self.latest_ticket
            );
            return false;
        }
        self.replace_records(records);
        true
    }

    /// Filtered and ordered view of the current records.
    pub fn ranked(&mut self) -> Vec<&CafeRecord> {
        let key = RankingKey {
            version: self.version,
            ranker: self.ranker.clone(),
        };
        let fresh = self.cache.as_ref().is_some_and(|cached| cached.key == key);
        if !fresh {
            let order = self
                .ranker
                .rank(
                    self.records
                        .iter()
                        .enumerate()
                        .map(|(index, record)| Indexed { index, record }),
                )
                .into_iter()
                .map(|entry| entry.index)
                .collect();
            self.recomputations = self.recomputations.saturating_add(1);
            debug!(
                "recomputed ranking for purpose {} with preferences [{}]",
                key.ranker.purpose(),
                key.ranker.preferences()
            );
            self.cache = Some(CachedRanking { key, order });
        }
        self.cache
            .as_ref()
            .map(|cached| {
                cached
                    .order
                    .iter()
                    .filter_map(|&index| self.records.get(index))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// How many times the ranked view has been recomputed.
    #[must_use]
    pub const fn recompute_count(&self) -> usize {
        self.recomputations
    }

    /// Select the café with `id`, returning whether it exists in the snapshot.
    ///
    /// Integer and digit-only string keys match each other; see
    /// [`CafeId::same_key`].
    pub fn select(&mut self, id: &CafeId) -> bool {
        self.selected = self
            .records
            .iter()
            .find(|record| record.id.same_key(id))
            .map(|record| record.id.clone());
        self.selected.is_some()
    }

    /// Currently selected café, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&CafeRecord> {
        let id = self.selected.as_ref()?;
        self.records.iter().find(|record| &record.id == id)
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
