use crate::tx::Tx;

/// **A per-account transaction history**
///
/// Append-only; the most recent transaction comes first when reading.
///
/// Entries are stored oldest-first internally, so appending is an amortized
/// O(1) push, and reading walks the vector backwards.
#[derive(Debug, Default)]
pub struct TransactionLog {
    entries: Vec<Tx>,
}

impl TransactionLog {
    /// Returns an empty log
    pub fn new() -> Self {
        TransactionLog { entries: vec![] }
    }

    /// Records `tx` as the most recent entry.
    pub fn append(&mut self, tx: Tx) {
        self.entries.push(tx);
    }

    /// Iterates from the most recent entry to the oldest one.
    pub fn all_in_order(&self) -> impl Iterator<Item = &Tx> {
        self.entries.iter().rev()
    }

    /// The most recent entry, if any
    pub fn latest(&self) -> Option<&Tx> {
        self.entries.last()
    }

    /// Number of appends ever made, since nothing is ever removed
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
