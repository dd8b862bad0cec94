use std::collections::BTreeSet;

use super::RateRecord;

/// Deduplicated union of records from every source table.
///
/// Iteration is always in ascending (year, month) order, whatever order the
/// records were inserted in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RateSet {
    records: BTreeSet<RateRecord>,
}

impl RateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if an identical record was already present.
    pub fn insert(&mut self, record: RateRecord) -> bool {
        self.records.insert(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Periods that carry more than one distinct rate.
    ///
    /// Both records are kept; callers decide how loudly to report them.
    pub fn conflicts(&self) -> Vec<(i32, u32)> {
        let mut conflicts = Vec::new();
        let mut previous = None;

        for record in &self.records {
            let period = record.period();
            if previous == Some(period) && conflicts.last() != Some(&period) {
                conflicts.push(period);
            }
            previous = Some(period);
        }

        conflicts
    }

    pub fn into_sorted(self) -> Vec<RateRecord> {
        self.records.into_iter().collect()
    }
}

impl Extend<RateRecord> for RateSet {
    fn extend<T: IntoIterator<Item = RateRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl FromIterator<RateRecord> for RateSet {
    fn from_iter<T: IntoIterator<Item = RateRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
