use std::collections::{VecDeque, vec_deque};

use crate::TipRecord;

/// Committed calculations, newest first.
///
/// The only mutation is inserting at the head; records are never edited or
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLedger {
    records: VecDeque<TipRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record ahead of every existing one and returns it.
    pub(crate) fn prepend(
        &mut self,
        record: TipRecord,
    ) -> &TipRecord {
        self.records.push_front(record);
        &self.records[0]
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&TipRecord> {
        self.records.front()
    }

    /// Iterates newest to oldest.
    pub fn iter(&self) -> vec_deque::Iter<'_, TipRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a HistoryLedger {
    type Item = &'a TipRecord;
    type IntoIter = vec_deque::Iter<'a, TipRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
