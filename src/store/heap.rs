//! Binary heap store (dense array, min or max)
//!
//! The comparator uses strict inequality in both modes, so equal values never
//! trigger a swap and duplicates stay stable.  Mutations capture the
//! pre-mutation array so the sift engine can replay the walk read-only.

use crate::step::NodeId;

/// One heap element; `id` is stable while the array index changes
#[derive(Debug, Clone, PartialEq)]
pub struct HeapNode {
    pub id: NodeId,
    pub value: i64,
}

/// What a heap mutation did, plus the array as it was beforehand
#[derive(Debug, Clone)]
pub enum HeapMutation {
    Insert {
        pre: Vec<HeapNode>,
        node: HeapNode,
    },
    Extract {
        pre: Vec<HeapNode>,
        root: HeapNode,
    },
}

/// The heap store
#[derive(Debug, Clone)]
pub struct BinaryHeap {
    items: Vec<HeapNode>,
    is_min: bool,
    next_id: NodeId,
}

impl BinaryHeap {
    pub fn new(is_min: bool) -> Self {
        BinaryHeap {
            items: Vec::new(),
            is_min,
            next_id: 0,
        }
    }

    /// Whether `parent` violates heap order against `child`.
    ///
    /// Strict inequality: equal values are already in order.
    pub fn violates(&self, parent: i64, child: i64) -> bool {
        if self.is_min {
            parent > child
        } else {
            parent < child
        }
    }

    /// Append a value and sift it up
    pub fn insert(&mut self, value: i64) -> HeapMutation {
        let pre = self.items.clone();
        let node = HeapNode {
            id: self.next_id,
            value,
        };
        self.next_id += 1;
        self.items.push(node.clone());
        let mut i = self.items.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.violates(self.items[parent].value, self.items[i].value) {
                self.items.swap(parent, i);
                i = parent;
            } else {
                break;
            }
        }
        HeapMutation::Insert { pre, node }
    }

    /// Remove the root: last element moves to index 0 and sifts down
    pub fn extract(&mut self) -> Result<HeapMutation, String> {
        if self.items.is_empty() {
            return Err("heap is empty".to_string());
        }
        let pre = self.items.clone();
        let root = self.items.swap_remove(0);
        if !self.items.is_empty() {
            let mut i = 0;
            loop {
                let target = self.sift_target(&self.items, i);
                match target {
                    Some(child) => {
                        self.items.swap(i, child);
                        i = child;
                    }
                    None => break,
                }
            }
        }
        Ok(HeapMutation::Extract { pre, root })
    }

    /// The child of `i` that most violates heap order, if any.
    ///
    /// Left is checked first; right overrides left when it is the stricter
    /// violation.
    pub fn sift_target(&self, items: &[HeapNode], i: usize) -> Option<usize> {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut target = None;
        if left < items.len() && self.violates(items[i].value, items[left].value) {
            target = Some(left);
        }
        if right < items.len() {
            let against = target.unwrap_or(i);
            if self.violates(items[against].value, items[right].value) {
                target = Some(right);
            }
        }
        target
    }

    /// Read the root without mutating
    pub fn peek(&self) -> Option<&HeapNode> {
        self.items.first()
    }

    pub fn items(&self) -> &[HeapNode] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_min(&self) -> bool {
        self.is_min
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for BinaryHeap {
    fn default() -> Self {
        Self::new(true)
    }
}
