//! Test-only, in-memory `CafeSource` implementation used by unit and
//! behaviour tests across the workspace.

use crate::{CafeQuery, CafeRecord, CafeSource, CafeSourceError};

/// In-memory `CafeSource` returning a fixed record list.
///
/// Queries are validated like a real backend would, then the first
/// `query.limit` records are returned in insertion order. The location is
/// ignored.
#[derive(Default, Debug, Clone)]
pub struct MemoryCafeSource {
    records: Vec<CafeRecord>,
}

impl MemoryCafeSource {
    /// Create a source serving `records`.
    #[must_use]
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CafeRecord>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl CafeSource for MemoryCafeSource {
    fn nearby(&self, query: &CafeQuery) -> Result<Vec<CafeRecord>, CafeSourceError> {
        query.validate()?;
        let limit = usize::try_from(query.limit).unwrap_or(usize::MAX);
        Ok(self.records.iter().take(limit).cloned().collect())
    }
}
