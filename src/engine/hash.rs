//! Chained hash narration
//!
//! Every operation narrates the same walk: hash the key to its bucket, then
//! linearly scan that bucket's chain.  A collision step is recorded only when
//! an append lands in a bucket that already held entries.

use crate::step::{Overlay, StepKind, StepRecorder, StepSequence};
use crate::store::hash::{
    bucket_index, HashBuckets, HashEntry, HashMutation, HashOutcome, PutOutcome, BUCKET_COUNT,
};

fn hash_step(rec: &mut StepRecorder, key: i64, bucket: usize) {
    rec.push(
        StepKind::Visit,
        format!(
            "Hash key {}: |{}| mod {} = bucket {}",
            key, key, BUCKET_COUNT, bucket
        ),
        Overlay {
            indices: vec![bucket],
            ..Overlay::default()
        },
    );
}

/// Scan `chain` for `key`, narrating each comparison; returns the hit
fn scan_chain<'a>(
    rec: &mut StepRecorder,
    chain: &'a [HashEntry],
    key: i64,
    bucket: usize,
) -> Option<&'a HashEntry> {
    for entry in chain {
        rec.push(
            StepKind::Compare,
            format!("Compare with key {} in the chain", entry.key),
            Overlay {
                nodes: vec![entry.id],
                indices: vec![bucket],
                ..Overlay::default()
            },
        );
        if entry.key == key {
            return Some(entry);
        }
    }
    None
}

/// Narrate a put (table) or add (set)
pub fn narrate_put(store: &HashBuckets, mutation: &HashMutation) -> StepSequence {
    let HashOutcome::Put(outcome) = &mutation.outcome else {
        return StepRecorder::new().finish();
    };
    let mut rec = StepRecorder::new();
    hash_step(&mut rec, mutation.key, mutation.bucket);
    scan_chain(&mut rec, &mutation.chain_pre, mutation.key, mutation.bucket);

    match outcome {
        PutOutcome::Appended { id, collision } => {
            if *collision {
                rec.push(
                    StepKind::Collision,
                    format!(
                        "Collision: bucket {} already holds {} entry(ies), chain the new one",
                        mutation.bucket,
                        mutation.chain_pre.len()
                    ),
                    Overlay {
                        nodes: mutation.chain_pre.iter().map(|e| e.id).collect(),
                        indices: vec![mutation.bucket],
                        ..Overlay::default()
                    },
                );
            }
            rec.push(
                StepKind::Insert,
                format!(
                    "Append key {} to the end of bucket {}'s chain",
                    mutation.key, mutation.bucket
                ),
                Overlay {
                    nodes: vec![*id],
                    indices: vec![mutation.bucket],
                    ..Overlay::default()
                },
            );
        }
        PutOutcome::Updated { id } => {
            rec.push(
                StepKind::Update,
                format!("Key {} already present: overwrite its value in place", mutation.key),
                Overlay {
                    nodes: vec![*id],
                    indices: vec![mutation.bucket],
                    ..Overlay::default()
                },
            );
        }
        PutOutcome::AlreadyPresent { id } => {
            rec.push(
                StepKind::Found,
                format!("Key {} is already in the set: nothing to do", mutation.key),
                Overlay {
                    nodes: vec![*id],
                    indices: vec![mutation.bucket],
                    ..Overlay::default()
                },
            );
        }
    }

    rec.push_plain(
        StepKind::Complete,
        format!("Bucket {} now holds {} entry(ies)", mutation.bucket, store.chain(mutation.bucket).len()),
    );
    rec.finish()
}

/// Narrate a get (table) or contains (set), read-only against the live store
pub fn narrate_get(store: &HashBuckets, key: i64) -> StepSequence {
    let bucket = bucket_index(key);
    let mut rec = StepRecorder::new();
    hash_step(&mut rec, key, bucket);

    let chain = store.chain(bucket);
    if chain.is_empty() {
        rec.push(
            StepKind::NotFound,
            format!("Bucket {} is empty: key {} is not here", bucket, key),
            Overlay {
                indices: vec![bucket],
                ..Overlay::default()
            },
        );
        return rec.finish();
    }
    match scan_chain(&mut rec, chain, key, bucket) {
        Some(entry) => {
            let what = match &entry.value {
                Some(v) => format!("Found key {} with value \"{}\"", key, v),
                None => format!("Found key {} in the set", key),
            };
            rec.push(
                StepKind::Found,
                what,
                Overlay {
                    nodes: vec![entry.id],
                    indices: vec![bucket],
                    ..Overlay::default()
                },
            );
        }
        None => rec.push(
            StepKind::NotFound,
            format!("Chain exhausted: key {} is not in bucket {}", key, bucket),
            Overlay {
                indices: vec![bucket],
                ..Overlay::default()
            },
        ),
    }
    rec.finish()
}

/// Narrate a remove against the pre-mutation chain
pub fn narrate_remove(mutation: &HashMutation) -> StepSequence {
    let mut rec = StepRecorder::new();
    hash_step(&mut rec, mutation.key, mutation.bucket);

    if mutation.chain_pre.is_empty() {
        rec.push(
            StepKind::NotFound,
            format!(
                "Bucket {} is empty: key {} is not here",
                mutation.bucket, mutation.key
            ),
            Overlay {
                indices: vec![mutation.bucket],
                ..Overlay::default()
            },
        );
        return rec.finish();
    }
    scan_chain(&mut rec, &mutation.chain_pre, mutation.key, mutation.bucket);
    match &mutation.outcome {
        HashOutcome::Removed(entry) => {
            rec.push(
                StepKind::Remove,
                format!("Unlink key {} from bucket {}'s chain", entry.key, mutation.bucket),
                Overlay {
                    nodes: vec![entry.id],
                    indices: vec![mutation.bucket],
                    ..Overlay::default()
                },
            );
            rec.push_plain(StepKind::Complete, "Remove complete");
        }
        _ => rec.push(
            StepKind::NotFound,
            format!(
                "Chain exhausted: key {} is not in bucket {}",
                mutation.key, mutation.bucket
            ),
            Overlay {
                indices: vec![mutation.bucket],
                ..Overlay::default()
            },
        ),
    }
    rec.finish()
}
