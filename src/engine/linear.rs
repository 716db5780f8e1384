//! Stack and queue narration
//!
//! These sequences are short by nature: one step for the end the operation
//! touches, one terminal step.  The frontier overlay carries the whole
//! container so the renderer can draw every cell.

use crate::step::{Overlay, StepKind, StepRecorder, StepSequence};
use crate::store::linear::{LinearNode, Queue, Stack};

fn stack_frontier(stack: &Stack) -> Vec<u64> {
    stack.items().iter().map(|n| n.id).collect()
}

fn queue_frontier(queue: &Queue) -> Vec<u64> {
    queue.items().iter().map(|n| n.id).collect()
}

/// Narrate a push (the store already holds the new top)
pub fn narrate_push(stack: &Stack, node: &LinearNode) -> StepSequence {
    let mut rec = StepRecorder::new();
    rec.push(
        StepKind::Push,
        format!("Push {} onto the top of the stack", node.value),
        Overlay {
            nodes: vec![node.id],
            frontier: stack_frontier(stack),
            indices: vec![stack.len().saturating_sub(1)],
            ..Overlay::default()
        },
    );
    rec.push_plain(
        StepKind::Complete,
        format!("Push complete: {} element(s) on the stack", stack.len()),
    );
    rec.finish()
}

/// Narrate a pop (the store already dropped `node`)
pub fn narrate_pop(stack: &Stack, node: &LinearNode) -> StepSequence {
    let mut rec = StepRecorder::new();
    rec.push(
        StepKind::Pop,
        format!("Pop {} off the top of the stack", node.value),
        Overlay {
            nodes: vec![node.id],
            frontier: stack_frontier(stack),
            ..Overlay::default()
        },
    );
    rec.push_plain(
        StepKind::Complete,
        format!("Pop complete: {} element(s) remain", stack.len()),
    );
    rec.finish()
}

/// Narrate a stack peek, read-only
pub fn narrate_stack_peek(stack: &Stack) -> StepSequence {
    let mut rec = StepRecorder::new();
    match stack.peek() {
        Some(top) => {
            rec.push(
                StepKind::Peek,
                format!("The top of the stack is {}", top.value),
                Overlay {
                    nodes: vec![top.id],
                    frontier: stack_frontier(stack),
                    indices: vec![stack.len() - 1],
                    ..Overlay::default()
                },
            );
            rec.push_plain(StepKind::Complete, "Peek complete: nothing was removed");
        }
        None => rec.push_plain(StepKind::NotFound, "The stack is empty"),
    }
    rec.finish()
}

/// Narrate an enqueue (the store already holds the new rear element)
pub fn narrate_enqueue(queue: &Queue, node: &LinearNode) -> StepSequence {
    let mut rec = StepRecorder::new();
    rec.push(
        StepKind::Enqueue,
        format!("Enqueue {} at the rear of the queue", node.value),
        Overlay {
            nodes: vec![node.id],
            frontier: queue_frontier(queue),
            indices: vec![queue.len().saturating_sub(1)],
            ..Overlay::default()
        },
    );
    rec.push_plain(
        StepKind::Complete,
        format!("Enqueue complete: {} element(s) in the queue", queue.len()),
    );
    rec.finish()
}

/// Narrate a dequeue (the store already dropped `node`)
pub fn narrate_dequeue(queue: &Queue, node: &LinearNode) -> StepSequence {
    let mut rec = StepRecorder::new();
    rec.push(
        StepKind::Dequeue,
        format!("Dequeue {} from the front of the queue", node.value),
        Overlay {
            nodes: vec![node.id],
            frontier: queue_frontier(queue),
            ..Overlay::default()
        },
    );
    rec.push_plain(
        StepKind::Complete,
        format!("Dequeue complete: {} element(s) remain", queue.len()),
    );
    rec.finish()
}

/// Narrate a queue peek, read-only
pub fn narrate_queue_peek(queue: &Queue) -> StepSequence {
    let mut rec = StepRecorder::new();
    match queue.peek() {
        Some(front) => {
            rec.push(
                StepKind::Peek,
                format!("The front of the queue is {}", front.value),
                Overlay {
                    nodes: vec![front.id],
                    frontier: queue_frontier(queue),
                    indices: vec![0],
                    ..Overlay::default()
                },
            );
            rec.push_plain(StepKind::Complete, "Peek complete: nothing was removed");
        }
        None => rec.push_plain(StepKind::NotFound, "The queue is empty"),
    }
    rec.finish()
}
