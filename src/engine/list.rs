//! Linked list narration

use crate::step::{NodeId, Overlay, StepKind, StepRecorder, StepSequence};
use crate::store::list::{LinkedList, ListRemoval};

fn value_of(list: &LinkedList, id: NodeId) -> i64 {
    list.node(id).map(|n| n.value).unwrap_or_default()
}

/// Narrate an insert by walking the final list up to the new node
pub fn narrate_insert(list: &LinkedList, new_id: NodeId) -> StepSequence {
    let mut rec = StepRecorder::new();
    let mut position = 0;
    for id in list.iter_ids() {
        if id == new_id {
            rec.push(
                StepKind::Insert,
                format!(
                    "Link the new node {} in at position {}",
                    value_of(list, id),
                    position
                ),
                Overlay {
                    nodes: vec![id],
                    indices: vec![position],
                    ..Overlay::default()
                },
            );
            break;
        }
        rec.push(
            StepKind::Visit,
            format!("Walk past {} (position {})", value_of(list, id), position),
            Overlay {
                nodes: vec![id],
                indices: vec![position],
                ..Overlay::default()
            },
        );
        position += 1;
    }
    rec.push_plain(
        StepKind::Complete,
        format!("Insert complete: the list holds {} node(s)", list.len()),
    );
    rec.finish()
}

/// Narrate a delete by replaying the scan against the pre-mutation list
pub fn narrate_remove(removal: &ListRemoval) -> StepSequence {
    let pre = &removal.pre;
    let mut rec = StepRecorder::new();
    let mut position = 0;
    for id in pre.iter_ids() {
        rec.push(
            StepKind::Compare,
            format!(
                "Compare {} (position {}) with {}",
                value_of(pre, id),
                position,
                removal.value
            ),
            Overlay {
                nodes: vec![id],
                indices: vec![position],
                ..Overlay::default()
            },
        );
        if Some(id) == removal.removed {
            rec.push(
                StepKind::Remove,
                format!(
                    "Match: unlink {} and point the previous node past it",
                    removal.value
                ),
                Overlay {
                    nodes: vec![id],
                    indices: vec![position],
                    ..Overlay::default()
                },
            );
            rec.push_plain(StepKind::Complete, "Delete complete");
            return rec.finish();
        }
        position += 1;
    }
    rec.push_plain(
        StepKind::NotFound,
        format!("Reached the end: {} is not in the list", removal.value),
    );
    rec.finish()
}

/// Narrate a read-only search on the live list
pub fn narrate_search(list: &LinkedList, value: i64) -> StepSequence {
    let mut rec = StepRecorder::new();
    let mut position = 0;
    for id in list.iter_ids() {
        rec.push(
            StepKind::Compare,
            format!(
                "Compare {} (position {}) with {}",
                value_of(list, id),
                position,
                value
            ),
            Overlay {
                nodes: vec![id],
                indices: vec![position],
                ..Overlay::default()
            },
        );
        if value_of(list, id) == value {
            rec.push(
                StepKind::Found,
                format!("Found {} at position {}", value, position),
                Overlay {
                    nodes: vec![id],
                    indices: vec![position],
                    ..Overlay::default()
                },
            );
            return rec.finish();
        }
        position += 1;
    }
    rec.push_plain(
        StepKind::NotFound,
        format!("Reached the end: {} is not in the list", value),
    );
    rec.finish()
}

/// Narrate a full head-to-tail walk
pub fn narrate_traverse(list: &LinkedList) -> StepSequence {
    let mut rec = StepRecorder::new();
    let mut visited: Vec<NodeId> = Vec::new();
    for (position, id) in list.iter_ids().into_iter().enumerate() {
        visited.push(id);
        rec.push(
            StepKind::Visit,
            format!("Visit {} (position {})", value_of(list, id), position),
            Overlay {
                nodes: vec![id],
                visited: visited.clone(),
                indices: vec![position],
                ..Overlay::default()
            },
        );
    }
    rec.push(
        StepKind::Complete,
        format!("Traversal complete: {} node(s)", visited.len()),
        Overlay {
            visited,
            ..Overlay::default()
        },
    );
    rec.finish()
}
