//! Singly linked list store

use crate::step::NodeId;
use rustc_hash::FxHashMap;

/// One list node
#[derive(Debug, Clone)]
pub struct ListNode {
    pub id: NodeId,
    pub value: i64,
    pub next: Option<NodeId>,
}

/// Record of one delete, with the list as it was beforehand
#[derive(Debug, Clone)]
pub struct ListRemoval {
    pub value: i64,
    pub pre: LinkedList,
    pub removed: Option<NodeId>,
}

/// The linked list store
#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    nodes: FxHashMap<NodeId, ListNode>,
    head: Option<NodeId>,
    next_id: NodeId,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, value: i64, next: Option<NodeId>) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, ListNode { id, value, next });
        id
    }

    /// Insert at the front
    pub fn insert_head(&mut self, value: i64) -> NodeId {
        let id = self.alloc(value, self.head);
        self.head = Some(id);
        id
    }

    /// Insert at the back (walks to the tail)
    pub fn insert_tail(&mut self, value: i64) -> NodeId {
        let id = self.alloc(value, None);
        match self.tail() {
            Some(tail) => {
                if let Some(n) = self.nodes.get_mut(&tail) {
                    n.next = Some(id);
                }
            }
            None => self.head = Some(id),
        }
        id
    }

    /// Insert before position `index`; clamps to the tail when past the end
    pub fn insert_at(&mut self, value: i64, index: usize) -> NodeId {
        if index == 0 || self.head.is_none() {
            return self.insert_head(value);
        }
        let mut prev = self.head.unwrap_or_default();
        let mut walked = 1;
        while walked < index {
            match self.nodes[&prev].next {
                Some(next) => {
                    prev = next;
                    walked += 1;
                }
                None => break,
            }
        }
        let next = self.nodes[&prev].next;
        let id = self.alloc(value, next);
        if let Some(n) = self.nodes.get_mut(&prev) {
            n.next = Some(id);
        }
        id
    }

    /// Delete the first node holding `value`; a miss is recorded, not an error
    pub fn remove(&mut self, value: i64) -> ListRemoval {
        let pre = self.clone();
        let mut prev: Option<NodeId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            if self.nodes[&id].value == value {
                let next = self.nodes[&id].next;
                match prev {
                    Some(p) => {
                        if let Some(n) = self.nodes.get_mut(&p) {
                            n.next = next;
                        }
                    }
                    None => self.head = next,
                }
                self.nodes.remove(&id);
                return ListRemoval {
                    value,
                    pre,
                    removed: Some(id),
                };
            }
            prev = current;
            current = self.nodes[&id].next;
        }
        ListRemoval {
            value,
            pre,
            removed: None,
        }
    }

    /// Node ids from head to tail
    pub fn iter_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut current = self.head;
        while let Some(id) = current {
            ids.push(id);
            current = self.nodes[&id].next;
        }
        ids
    }

    pub fn node(&self, id: NodeId) -> Option<&ListNode> {
        self.nodes.get(&id)
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    fn tail(&self) -> Option<NodeId> {
        self.iter_ids().last().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }
}
