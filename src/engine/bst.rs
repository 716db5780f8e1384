//! BST narration: insert, search, delete, and the four traversal modes
//!
//! Traversals keep their own auxiliary stack or queue, and every push, pop,
//! enqueue, and dequeue of that auxiliary structure is a step of its own,
//! separate from the visit steps that emit node values.  In-order and
//! post-order use an explicit stack plus a visited-marker set to express the
//! "visit after children" rule.

use crate::step::{NodeId, Overlay, StepKind, StepRecorder, StepSequence};
use crate::store::bst::{Bst, BstRemoval, BstRemoveCase};
use rustc_hash::FxHashSet;

/// The four traversal modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    InOrder,
    PreOrder,
    PostOrder,
    LevelOrder,
}

impl TraversalOrder {
    pub fn label(self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "in-order",
            TraversalOrder::PreOrder => "pre-order",
            TraversalOrder::PostOrder => "post-order",
            TraversalOrder::LevelOrder => "level-order",
        }
    }
}

fn value_of(bst: &Bst, id: NodeId) -> i64 {
    bst.node(id).map(|n| n.value).unwrap_or_default()
}

/// Narrate an insert by walking the final tree down to the new leaf
pub fn narrate_insert(bst: &Bst, new_id: NodeId) -> StepSequence {
    let mut rec = StepRecorder::new();
    let Some(new_node) = bst.node(new_id) else {
        return rec.finish();
    };
    let value = new_node.value;

    if bst.root() == Some(new_id) {
        rec.push(
            StepKind::Insert,
            format!("The tree was empty: {} becomes the root", value),
            Overlay {
                nodes: vec![new_id],
                ..Overlay::default()
            },
        );
        rec.push_plain(StepKind::Complete, "Insert complete");
        return rec.finish();
    }

    let mut current = bst.root();
    while let Some(id) = current {
        let Some(node) = bst.node(id) else { break };
        let go_left = value < node.value;
        let (arrow, next) = if go_left {
            ("smaller, go left", node.left)
        } else {
            ("not smaller, go right", node.right)
        };
        rec.push(
            StepKind::Compare,
            format!("Compare {} with {}: {}", value, node.value, arrow),
            Overlay {
                nodes: vec![id],
                ..Overlay::default()
            },
        );
        if next == Some(new_id) {
            rec.push(
                StepKind::Insert,
                format!(
                    "Attach {} as the {} child of {}",
                    value,
                    if go_left { "left" } else { "right" },
                    node.value
                ),
                Overlay {
                    nodes: vec![new_id, id],
                    ..Overlay::default()
                },
            );
            break;
        }
        current = next;
    }

    rec.push_plain(StepKind::Complete, "Insert complete");
    rec.finish()
}

/// Narrate a read-only search on the live tree
pub fn narrate_search(bst: &Bst, value: i64) -> StepSequence {
    let mut rec = StepRecorder::new();
    let mut current = bst.root();
    while let Some(id) = current {
        let Some(node) = bst.node(id) else { break };
        if value == node.value {
            rec.push(
                StepKind::Found,
                format!("Found {} at this node", value),
                Overlay {
                    nodes: vec![id],
                    ..Overlay::default()
                },
            );
            return rec.finish();
        }
        let go_left = value < node.value;
        rec.push(
            StepKind::Compare,
            format!(
                "Compare {} with {}: go {}",
                value,
                node.value,
                if go_left { "left" } else { "right" }
            ),
            Overlay {
                nodes: vec![id],
                ..Overlay::default()
            },
        );
        current = if go_left { node.left } else { node.right };
    }
    rec.push_plain(
        StepKind::NotFound,
        format!("Reached an empty spot: {} is not in the tree", value),
    );
    rec.finish()
}

/// Narrate a delete by replaying the search and the removal case against the
/// pre-mutation tree
pub fn narrate_remove(removal: &BstRemoval) -> StepSequence {
    let pre = &removal.pre;
    let value = removal.value;
    let mut rec = StepRecorder::new();

    let mut current = pre.root();
    let mut target = None;
    while let Some(id) = current {
        let Some(node) = pre.node(id) else { break };
        if value == node.value {
            target = Some(id);
            rec.push(
                StepKind::Found,
                format!("Found {} at this node", value),
                Overlay {
                    nodes: vec![id],
                    ..Overlay::default()
                },
            );
            break;
        }
        let go_left = value < node.value;
        rec.push(
            StepKind::Compare,
            format!(
                "Compare {} with {}: go {}",
                value,
                node.value,
                if go_left { "left" } else { "right" }
            ),
            Overlay {
                nodes: vec![id],
                ..Overlay::default()
            },
        );
        current = if go_left { node.left } else { node.right };
    }

    let Some(target) = target else {
        rec.push_plain(
            StepKind::NotFound,
            format!("Reached an empty spot: {} is not in the tree", value),
        );
        return rec.finish();
    };

    match &removal.case {
        BstRemoveCase::NotFound => {}
        BstRemoveCase::Leaf => {
            rec.push(
                StepKind::Remove,
                format!("{} is a leaf: unlink it from its parent", value),
                Overlay {
                    nodes: vec![target],
                    ..Overlay::default()
                },
            );
        }
        BstRemoveCase::OneChild => {
            rec.push(
                StepKind::Remove,
                format!("{} has one child: splice the child into its place", value),
                Overlay {
                    nodes: vec![target],
                    ..Overlay::default()
                },
            );
        }
        BstRemoveCase::TwoChildren { successor } => {
            rec.push(
                StepKind::Select,
                format!(
                    "{} has two children: find the in-order successor {} (leftmost of the right subtree)",
                    value,
                    value_of(pre, *successor)
                ),
                Overlay {
                    nodes: vec![*successor],
                    ..Overlay::default()
                },
            );
            rec.push(
                StepKind::Remove,
                format!(
                    "Relink successor {} into the removed node's place",
                    value_of(pre, *successor)
                ),
                Overlay {
                    nodes: vec![target, *successor],
                    ..Overlay::default()
                },
            );
        }
    }
    rec.push_plain(StepKind::Complete, "Delete complete");
    rec.finish()
}

/// Narrate one of the four traversals over the live tree
pub fn narrate_traversal(bst: &Bst, order: TraversalOrder) -> StepSequence {
    let mut rec = StepRecorder::new();
    let Some(root) = bst.root() else {
        rec.push_plain(StepKind::Complete, "The tree is empty: nothing to traverse");
        return rec.finish();
    };
    let mut output: Vec<NodeId> = Vec::new();

    match order {
        TraversalOrder::LevelOrder => {
            let mut queue: std::collections::VecDeque<NodeId> = std::collections::VecDeque::new();
            queue.push_back(root);
            rec.push(
                StepKind::Enqueue,
                format!("Enqueue the root {}", value_of(bst, root)),
                Overlay {
                    nodes: vec![root],
                    frontier: queue.iter().copied().collect(),
                    ..Overlay::default()
                },
            );
            while let Some(id) = queue.pop_front() {
                rec.push(
                    StepKind::Dequeue,
                    format!("Dequeue {}", value_of(bst, id)),
                    Overlay {
                        nodes: vec![id],
                        frontier: queue.iter().copied().collect(),
                        visited: output.clone(),
                        ..Overlay::default()
                    },
                );
                output.push(id);
                rec.push(
                    StepKind::Visit,
                    format!("Visit {}", value_of(bst, id)),
                    Overlay {
                        nodes: vec![id],
                        frontier: queue.iter().copied().collect(),
                        visited: output.clone(),
                        ..Overlay::default()
                    },
                );
                let (left, right) = bst
                    .node(id)
                    .map(|n| (n.left, n.right))
                    .unwrap_or((None, None));
                for child in [left, right].into_iter().flatten() {
                    queue.push_back(child);
                    rec.push(
                        StepKind::Enqueue,
                        format!("Enqueue child {}", value_of(bst, child)),
                        Overlay {
                            nodes: vec![child],
                            frontier: queue.iter().copied().collect(),
                            visited: output.clone(),
                            ..Overlay::default()
                        },
                    );
                }
            }
        }
        TraversalOrder::PreOrder => {
            let mut stack: Vec<NodeId> = vec![root];
            rec.push(
                StepKind::Push,
                format!("Push the root {}", value_of(bst, root)),
                Overlay {
                    nodes: vec![root],
                    frontier: stack.clone(),
                    ..Overlay::default()
                },
            );
            while let Some(id) = stack.pop() {
                rec.push(
                    StepKind::Pop,
                    format!("Pop {}", value_of(bst, id)),
                    Overlay {
                        nodes: vec![id],
                        frontier: stack.clone(),
                        visited: output.clone(),
                        ..Overlay::default()
                    },
                );
                output.push(id);
                rec.push(
                    StepKind::Visit,
                    format!("Visit {}", value_of(bst, id)),
                    Overlay {
                        nodes: vec![id],
                        frontier: stack.clone(),
                        visited: output.clone(),
                        ..Overlay::default()
                    },
                );
                let (left, right) = bst
                    .node(id)
                    .map(|n| (n.left, n.right))
                    .unwrap_or((None, None));
                // Right first so the left child pops first
                for child in [right, left].into_iter().flatten() {
                    stack.push(child);
                    rec.push(
                        StepKind::Push,
                        format!("Push child {}", value_of(bst, child)),
                        Overlay {
                            nodes: vec![child],
                            frontier: stack.clone(),
                            visited: output.clone(),
                            ..Overlay::default()
                        },
                    );
                }
            }
        }
        TraversalOrder::InOrder | TraversalOrder::PostOrder => {
            let mut stack: Vec<NodeId> = vec![root];
            let mut marked: FxHashSet<NodeId> = FxHashSet::default();
            rec.push(
                StepKind::Push,
                format!("Push the root {}", value_of(bst, root)),
                Overlay {
                    nodes: vec![root],
                    frontier: stack.clone(),
                    ..Overlay::default()
                },
            );
            while let Some(id) = stack.pop() {
                rec.push(
                    StepKind::Pop,
                    format!("Pop {}", value_of(bst, id)),
                    Overlay {
                        nodes: vec![id],
                        frontier: stack.clone(),
                        visited: output.clone(),
                        ..Overlay::default()
                    },
                );
                if marked.contains(&id) {
                    output.push(id);
                    rec.push(
                        StepKind::Visit,
                        format!("{} is marked: visit it now", value_of(bst, id)),
                        Overlay {
                            nodes: vec![id],
                            frontier: stack.clone(),
                            visited: output.clone(),
                            ..Overlay::default()
                        },
                    );
                    continue;
                }
                marked.insert(id);
                let (left, right) = bst
                    .node(id)
                    .map(|n| (n.left, n.right))
                    .unwrap_or((None, None));
                // Push order decides when the marked node pops back out:
                // in-order between its children, post-order after both
                let pushes: Vec<(Option<NodeId>, &str)> = match order {
                    TraversalOrder::InOrder => vec![
                        (right, "right child"),
                        (Some(id), "marked node"),
                        (left, "left child"),
                    ],
                    _ => vec![
                        (Some(id), "marked node"),
                        (right, "right child"),
                        (left, "left child"),
                    ],
                };
                for (node, what) in pushes {
                    let Some(node) = node else { continue };
                    stack.push(node);
                    rec.push(
                        StepKind::Push,
                        format!("Push {} {}", what, value_of(bst, node)),
                        Overlay {
                            nodes: vec![node],
                            frontier: stack.clone(),
                            visited: output.clone(),
                            ..Overlay::default()
                        },
                    );
                }
            }
        }
    }

    rec.push(
        StepKind::Complete,
        format!(
            "{} traversal complete: {} node(s) visited",
            order.label(),
            output.len()
        ),
        Overlay {
            visited: output,
            ..Overlay::default()
        },
    );
    rec.finish()
}
