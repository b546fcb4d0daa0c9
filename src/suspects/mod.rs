//! Suspect index
//!
//! Fixed-size chained hash table mapping clue text to one suspect.
//! Collisions chain inside a bucket, newest entry first. Re-inserting a
//! clue overwrites its suspect in place, so each clue appears once.

mod hash;
mod tally;

pub use hash::{hash_key, DEFAULT_BUCKETS};
pub use tally::{Citation, CitationTally};

use crate::GameError;
use std::collections::VecDeque;

/// One clue → suspect association
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectEntry {
    /// Clue text (key)
    pub clue: String,
    /// Associated suspect
    pub suspect: String,
}

/// Chained hash table of clue → suspect associations
#[derive(Debug, Clone)]
pub struct SuspectIndex {
    buckets: Vec<VecDeque<SuspectEntry>>,
    len: usize,
}

impl SuspectIndex {
    /// Create an index with `bucket_count` buckets
    pub fn new(bucket_count: usize) -> Result<Self, GameError> {
        if bucket_count == 0 {
            return Err(GameError::InvalidBucketCount(bucket_count));
        }

        Ok(Self {
            buckets: vec![VecDeque::new(); bucket_count],
            len: 0,
        })
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket a clue hashes to
    pub fn bucket_of(&self, clue: &str) -> usize {
        hash_key(clue, self.buckets.len())
    }

    /// Associate `clue` with `suspect`
    ///
    /// Overwrites the suspect if the clue is already stored and returns the
    /// previous one; otherwise chains a new entry at the front of its bucket.
    pub fn insert(&mut self, clue: &str, suspect: &str) -> Option<String> {
        let index = self.bucket_of(clue);
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.iter_mut().find(|entry| entry.clue == clue) {
            tracing::debug!(clue, suspect, bucket = index, "association updated");
            return Some(std::mem::replace(&mut entry.suspect, suspect.to_string()));
        }

        bucket.push_front(SuspectEntry {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        });
        self.len += 1;
        tracing::debug!(clue, suspect, bucket = index, "association added");
        None
    }

    /// Suspect associated with `clue`
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.buckets[self.bucket_of(clue)]
            .iter()
            .find(|entry| entry.clue == clue)
            .map(|entry| entry.suspect.as_str())
    }

    /// All associations, bucket by bucket, each chain newest first
    ///
    /// The order is deterministic for a given insertion history but is not
    /// otherwise meaningful.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (entry.clue.as_str(), entry.suspect.as_str()))
    }

    /// Length of each bucket chain
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(VecDeque::len).collect()
    }

    /// Per-suspect citation counts in scan order
    pub fn tally(&self) -> CitationTally<'_> {
        self.iter().map(|(_, suspect)| suspect).collect()
    }

    /// Suspect cited by the most clues
    ///
    /// Ties go to the suspect met first while scanning buckets in order.
    /// `None` when the index is empty.
    pub fn most_cited(&self) -> Option<&str> {
        self.tally().leader().map(|citation| citation.suspect)
    }

    /// Number of stored associations
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no association is stored
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self {
            buckets: vec![VecDeque::new(); DEFAULT_BUCKETS],
            len: 0,
        }
    }
}
