//! Heap sift narration
//!
//! Insert and extract replay the sift walk against the pre-mutation array
//! captured by the store, so every comparison, swap, and settle point becomes
//! its own step and the replay ends in exactly the state the store already
//! holds.

use crate::step::{Overlay, StepKind, StepRecorder, StepSequence};
use crate::store::heap::{BinaryHeap, HeapMutation, HeapNode};

fn order_word(is_min: bool) -> &'static str {
    if is_min {
        "min-heap"
    } else {
        "max-heap"
    }
}

/// Narrate an insert: append at the end, then sift up
pub fn narrate_insert(heap: &BinaryHeap, mutation: &HeapMutation) -> StepSequence {
    let HeapMutation::Insert { pre, node } = mutation else {
        return StepRecorder::new().finish();
    };
    let mut rec = StepRecorder::new();
    let mut items: Vec<HeapNode> = pre.clone();
    items.push(node.clone());
    let mut i = items.len() - 1;

    rec.push(
        StepKind::Insert,
        format!("Insert {} at the end of the array (index {})", node.value, i),
        Overlay {
            nodes: vec![node.id],
            indices: vec![i],
            ..Overlay::default()
        },
    );

    while i > 0 {
        let parent = (i - 1) / 2;
        rec.push(
            StepKind::Compare,
            format!(
                "Compare {} (index {}) with its parent {} (index {})",
                items[i].value, i, items[parent].value, parent
            ),
            Overlay {
                nodes: vec![items[i].id, items[parent].id],
                indices: vec![i, parent],
                ..Overlay::default()
            },
        );
        if heap.violates(items[parent].value, items[i].value) {
            rec.push(
                StepKind::Swap,
                format!(
                    "{} violates the {} order: swap {} and {}",
                    items[parent].value,
                    order_word(heap.is_min()),
                    items[i].value,
                    items[parent].value
                ),
                Overlay {
                    nodes: vec![items[i].id, items[parent].id],
                    swap: Some((items[i].id, items[parent].id)),
                    indices: vec![i, parent],
                    ..Overlay::default()
                },
            );
            items.swap(i, parent);
            i = parent;
        } else {
            rec.push(
                StepKind::Settle,
                format!(
                    "Heap property satisfied: {} stays at index {}",
                    items[i].value, i
                ),
                Overlay {
                    nodes: vec![items[i].id],
                    indices: vec![i],
                    ..Overlay::default()
                },
            );
            break;
        }
    }
    if i == 0 {
        rec.push(
            StepKind::Settle,
            format!("{} reached the root", items[0].value),
            Overlay {
                nodes: vec![items[0].id],
                indices: vec![0],
                ..Overlay::default()
            },
        );
    }

    rec.push_plain(
        StepKind::Complete,
        format!("Insert complete: {} element(s) in the heap", items.len()),
    );
    rec.finish()
}

/// Narrate an extract: root out, last element to the root, then sift down
pub fn narrate_extract(heap: &BinaryHeap, mutation: &HeapMutation) -> StepSequence {
    let HeapMutation::Extract { pre, root } = mutation else {
        return StepRecorder::new().finish();
    };
    let mut rec = StepRecorder::new();

    rec.push(
        StepKind::Remove,
        format!("Extract the root {} (index 0)", root.value),
        Overlay {
            nodes: vec![root.id],
            indices: vec![0],
            ..Overlay::default()
        },
    );

    if pre.len() == 1 {
        rec.push_plain(StepKind::Complete, "The heap is now empty");
        return rec.finish();
    }

    let mut items: Vec<HeapNode> = pre.clone();
    let last = items.pop().unwrap_or_else(|| root.clone());
    let last_index = items.len();
    rec.push(
        StepKind::Update,
        format!(
            "Move the last element {} (index {}) to the root",
            last.value, last_index
        ),
        Overlay {
            nodes: vec![last.id],
            indices: vec![0, last_index],
            ..Overlay::default()
        },
    );
    items[0] = last;

    let mut i = 0;
    loop {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        if left >= items.len() {
            rec.push(
                StepKind::Settle,
                format!("{} has no children: sift-down ends", items[i].value),
                Overlay {
                    nodes: vec![items[i].id],
                    indices: vec![i],
                    ..Overlay::default()
                },
            );
            break;
        }
        let mut compared = vec![i, left];
        let mut compared_nodes = vec![items[i].id, items[left].id];
        if right < items.len() {
            compared.push(right);
            compared_nodes.push(items[right].id);
        }
        rec.push(
            StepKind::Compare,
            format!(
                "Compare {} (index {}) with its child(ren)",
                items[i].value, i
            ),
            Overlay {
                nodes: compared_nodes,
                indices: compared,
                ..Overlay::default()
            },
        );
        match heap.sift_target(&items, i) {
            Some(child) => {
                rec.push(
                    StepKind::Swap,
                    format!(
                        "{} violates the {} order against {}: swap them",
                        items[i].value,
                        order_word(heap.is_min()),
                        items[child].value
                    ),
                    Overlay {
                        nodes: vec![items[i].id, items[child].id],
                        swap: Some((items[i].id, items[child].id)),
                        indices: vec![i, child],
                        ..Overlay::default()
                    },
                );
                items.swap(i, child);
                i = child;
            }
            None => {
                rec.push(
                    StepKind::Settle,
                    format!(
                        "Heap property satisfied: {} stays at index {}",
                        items[i].value, i
                    ),
                    Overlay {
                        nodes: vec![items[i].id],
                        indices: vec![i],
                        ..Overlay::default()
                    },
                );
                break;
            }
        }
    }

    rec.push_plain(
        StepKind::Complete,
        format!(
            "Extract complete: removed {}, {} element(s) remain",
            root.value,
            items.len()
        ),
    );
    rec.finish()
}

/// Narrate a peek: read-only, no mutation
pub fn narrate_peek(heap: &BinaryHeap) -> StepSequence {
    let mut rec = StepRecorder::new();
    match heap.peek() {
        Some(root) => {
            rec.push(
                StepKind::Peek,
                format!(
                    "The root of the {} is {}",
                    order_word(heap.is_min()),
                    root.value
                ),
                Overlay {
                    nodes: vec![root.id],
                    indices: vec![0],
                    ..Overlay::default()
                },
            );
            rec.push_plain(StepKind::Complete, "Peek complete: nothing was removed");
        }
        None => rec.push_plain(StepKind::NotFound, "The heap is empty"),
    }
    rec.finish()
}
