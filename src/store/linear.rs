//! Stack and queue stores
//!
//! Thin wrappers over `Vec` and `VecDeque` that keep stable element ids so
//! the narration can highlight individual cells.

use crate::step::NodeId;
use std::collections::VecDeque;

/// One stack or queue element
#[derive(Debug, Clone, PartialEq)]
pub struct LinearNode {
    pub id: NodeId,
    pub value: i64,
}

/// LIFO store
#[derive(Debug, Clone, Default)]
pub struct Stack {
    items: Vec<LinearNode>,
    next_id: NodeId,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: i64) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(LinearNode { id, value });
        id
    }

    pub fn pop(&mut self) -> Result<LinearNode, String> {
        self.items.pop().ok_or_else(|| "stack is empty".to_string())
    }

    /// Top element, read-only
    pub fn peek(&self) -> Option<&LinearNode> {
        self.items.last()
    }

    /// Bottom-to-top contents
    pub fn items(&self) -> &[LinearNode] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// FIFO store
#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: VecDeque<LinearNode>,
    next_id: NodeId,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, value: i64) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(LinearNode { id, value });
        id
    }

    pub fn dequeue(&mut self) -> Result<LinearNode, String> {
        self.items
            .pop_front()
            .ok_or_else(|| "queue is empty".to_string())
    }

    /// Front element, read-only
    pub fn peek(&self) -> Option<&LinearNode> {
        self.items.front()
    }

    /// Front-to-rear contents
    pub fn items(&self) -> &VecDeque<LinearNode> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
