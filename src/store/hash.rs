//! Chained hash store (set and table)
//!
//! Ten fixed buckets, `h(key) = |key| mod 10`, collisions resolved by
//! appending to the bucket's chain.  The store never resizes or rehashes.
//! A set stores entries without values; a table maps key to value, and a
//! repeated put overwrites in place.

use crate::step::NodeId;

/// Fixed bucket count; the store never resizes
pub const BUCKET_COUNT: usize = 10;

/// Map a key to its bucket index
pub fn bucket_index(key: i64) -> usize {
    (key.unsigned_abs() % BUCKET_COUNT as u64) as usize
}

/// One chain entry; `value` is `None` for set entries
#[derive(Debug, Clone, PartialEq)]
pub struct HashEntry {
    pub id: NodeId,
    pub key: i64,
    pub value: Option<String>,
}

/// What a put did to its bucket
#[derive(Debug, Clone)]
pub enum PutOutcome {
    /// New entry appended; `collision` when the bucket already held entries
    Appended { id: NodeId, collision: bool },
    /// Table put over an existing key: value overwritten in place
    Updated { id: NodeId },
    /// Set add of a key that was already present
    AlreadyPresent { id: NodeId },
}

/// Record of one put or remove
#[derive(Debug, Clone)]
pub struct HashMutation {
    pub key: i64,
    pub bucket: usize,
    /// The bucket's chain as it was before the mutation
    pub chain_pre: Vec<HashEntry>,
    pub outcome: HashOutcome,
}

#[derive(Debug, Clone)]
pub enum HashOutcome {
    Put(PutOutcome),
    Removed(HashEntry),
    RemoveMissed,
}

/// The bucket store
#[derive(Debug, Clone)]
pub struct HashBuckets {
    buckets: Vec<Vec<HashEntry>>,
    next_id: NodeId,
    /// Set mode: duplicate keys are a no-op instead of an overwrite
    is_set: bool,
}

impl HashBuckets {
    pub fn new(is_set: bool) -> Self {
        HashBuckets {
            buckets: vec![Vec::new(); BUCKET_COUNT],
            next_id: 0,
            is_set,
        }
    }

    /// Put a key (table: with value, overwriting; set: value `None`, no-op on
    /// duplicates)
    pub fn put(&mut self, key: i64, value: Option<String>) -> HashMutation {
        let bucket = bucket_index(key);
        let chain_pre = self.buckets[bucket].clone();
        let existing = self.buckets[bucket].iter().position(|e| e.key == key);
        let outcome = match existing {
            Some(pos) => {
                let id = self.buckets[bucket][pos].id;
                if self.is_set {
                    PutOutcome::AlreadyPresent { id }
                } else {
                    self.buckets[bucket][pos].value = value;
                    PutOutcome::Updated { id }
                }
            }
            None => {
                let collision = !self.buckets[bucket].is_empty();
                let id = self.next_id;
                self.next_id += 1;
                self.buckets[bucket].push(HashEntry { id, key, value });
                PutOutcome::Appended { id, collision }
            }
        };
        HashMutation {
            key,
            bucket,
            chain_pre,
            outcome: HashOutcome::Put(outcome),
        }
    }

    /// Remove a key from its chain; a miss is recorded, not an error
    pub fn remove(&mut self, key: i64) -> HashMutation {
        let bucket = bucket_index(key);
        let chain_pre = self.buckets[bucket].clone();
        let outcome = match self.buckets[bucket].iter().position(|e| e.key == key) {
            Some(pos) => HashOutcome::Removed(self.buckets[bucket].remove(pos)),
            None => HashOutcome::RemoveMissed,
        };
        HashMutation {
            key,
            bucket,
            chain_pre,
            outcome,
        }
    }

    /// Hash-then-scan lookup, read-only
    pub fn get(&self, key: i64) -> Option<&HashEntry> {
        self.buckets[bucket_index(key)]
            .iter()
            .find(|e| e.key == key)
    }

    pub fn chain(&self, bucket: usize) -> &[HashEntry] {
        &self.buckets[bucket]
    }

    pub fn buckets(&self) -> &[Vec<HashEntry>] {
        &self.buckets
    }

    pub fn is_set(&self) -> bool {
        self.is_set
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
    }
}

impl Default for HashBuckets {
    fn default() -> Self {
        Self::new(false)
    }
}
