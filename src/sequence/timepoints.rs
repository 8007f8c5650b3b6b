use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Ordered set of time point ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePoints {
    ids: BTreeSet<i32>,
}

impl TimePoints {
    /// Time points `0..count`
    pub fn range(count: u32) -> Self {
        let last = i32::try_from(count).unwrap_or(i32::MAX);
        Self {
            ids: (0..last).collect(),
        }
    }

    /// Time points from explicit ids
    pub fn from_ids<I: IntoIterator<Item = i32>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Whether `id` is a time point of the sequence
    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }

    /// Number of time points
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no time points
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.ids.iter().copied()
    }

    /// `(first, last)` when the ids form a gap-free run
    pub fn as_range(&self) -> Option<(i32, i32)> {
        let first = *self.ids.first()?;
        let last = *self.ids.last()?;
        let span = i64::from(last) - i64::from(first) + 1;
        (span == self.ids.len() as i64).then_some((first, last))
    }
}
