//! Trie walk narration
//!
//! All walks operate on lowercased input, matching the store's case folding.
//! Search distinguishes three terminal outcomes: found, not found (a
//! character is missing), and "path exists but not a complete word" (the walk
//! succeeds but the end flag is unset).

use crate::step::{NodeId, Overlay, StepKind, StepRecorder, StepSequence};
use crate::store::trie::{Trie, TrieMutation};

/// Narrate an insert by walking the final trie with the mutation's
/// created-node set
pub fn narrate_insert(trie: &Trie, mutation: &TrieMutation) -> StepSequence {
    let mut rec = StepRecorder::new();
    let mut path: Vec<NodeId> = vec![trie.root()];
    let mut current = trie.root();

    for ch in mutation.word.chars() {
        let Some(&child) = trie
            .node(current)
            .and_then(|n| n.children.get(&ch))
        else {
            break;
        };
        path.push(child);
        current = child;
        if mutation.created.contains(&child) {
            rec.push(
                StepKind::Insert,
                format!("'{}' has no child here: create a new node", ch),
                Overlay {
                    nodes: path.clone(),
                    ..Overlay::default()
                },
            );
        } else {
            rec.push(
                StepKind::Visit,
                format!("'{}' already has a node: follow it", ch),
                Overlay {
                    nodes: path.clone(),
                    ..Overlay::default()
                },
            );
        }
    }

    if mutation.already_present {
        rec.push(
            StepKind::Found,
            format!("\"{}\" was already a complete word", mutation.word),
            Overlay {
                nodes: path.clone(),
                ..Overlay::default()
            },
        );
    } else {
        rec.push(
            StepKind::Update,
            format!("Mark the final node: \"{}\" is now a complete word", mutation.word),
            Overlay {
                nodes: vec![current],
                ..Overlay::default()
            },
        );
    }
    rec.push_plain(
        StepKind::Complete,
        format!("Insert complete: {} node(s) created", mutation.created.len()),
    );
    rec.finish()
}

fn narrate_walk(trie: &Trie, word: &str, rec: &mut StepRecorder) -> Option<NodeId> {
    let mut path: Vec<NodeId> = vec![trie.root()];
    let mut current = trie.root();
    for ch in word.chars() {
        match trie.node(current).and_then(|n| n.children.get(&ch)) {
            Some(&child) => {
                path.push(child);
                current = child;
                rec.push(
                    StepKind::Visit,
                    format!("'{}' matches: follow the child node", ch),
                    Overlay {
                        nodes: path.clone(),
                        ..Overlay::default()
                    },
                );
            }
            None => {
                rec.push(
                    StepKind::NotFound,
                    format!("'{}' has no child here: the walk fails", ch),
                    Overlay {
                        nodes: path.clone(),
                        ..Overlay::default()
                    },
                );
                return None;
            }
        }
    }
    Some(current)
}

/// Narrate a whole-word search
pub fn narrate_search(trie: &Trie, word: &str) -> StepSequence {
    let word = Trie::normalize(word);
    let mut rec = StepRecorder::new();
    match narrate_walk(trie, &word, &mut rec) {
        Some(end) => {
            if trie.node(end).is_some_and(|n| n.is_end_of_word) {
                rec.push(
                    StepKind::Found,
                    format!("\"{}\" is a complete word in the trie", word),
                    Overlay {
                        nodes: vec![end],
                        ..Overlay::default()
                    },
                );
            } else {
                rec.push(
                    StepKind::NotFound,
                    format!(
                        "The path for \"{}\" exists but it is not a complete word",
                        word
                    ),
                    Overlay {
                        nodes: vec![end],
                        ..Overlay::default()
                    },
                );
            }
        }
        None => rec.push_plain(
            StepKind::Complete,
            format!("Search complete: \"{}\" is not in the trie", word),
        ),
    }
    rec.finish()
}

/// Narrate a prefix check
pub fn narrate_starts_with(trie: &Trie, prefix: &str) -> StepSequence {
    let prefix = Trie::normalize(prefix);
    let mut rec = StepRecorder::new();
    match narrate_walk(trie, &prefix, &mut rec) {
        Some(end) => rec.push(
            StepKind::Found,
            format!("Prefix \"{}\" exists in the trie", prefix),
            Overlay {
                nodes: vec![end],
                ..Overlay::default()
            },
        ),
        None => rec.push_plain(
            StepKind::Complete,
            format!("No word starts with \"{}\"", prefix),
        ),
    }
    rec.finish()
}

/// Narrate a word removal (the end flag was already unmarked by the store)
pub fn narrate_remove(trie: &Trie, word: &str, removed: bool) -> StepSequence {
    let word = Trie::normalize(word);
    let mut rec = StepRecorder::new();
    match narrate_walk(trie, &word, &mut rec) {
        Some(end) if removed => {
            rec.push(
                StepKind::Remove,
                format!("Unmark the final node: \"{}\" is no longer a word", word),
                Overlay {
                    nodes: vec![end],
                    ..Overlay::default()
                },
            );
            rec.push_plain(StepKind::Complete, "Remove complete: shared prefixes kept");
        }
        _ => rec.push_plain(
            StepKind::NotFound,
            format!("\"{}\" was not a complete word: nothing to remove", word),
        ),
    }
    rec.finish()
}
