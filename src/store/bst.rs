//! Binary search tree store
//!
//! Rotation-free insert and delete over an arena of nodes with stable ids.
//! Duplicate values go right.  Deleting a node with two children relinks the
//! in-order successor into its place; node identities never change, only
//! links do.

use crate::step::NodeId;
use rustc_hash::FxHashMap;

/// One tree node
#[derive(Debug, Clone)]
pub struct BstNode {
    pub id: NodeId,
    pub value: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// How a delete resolved
#[derive(Debug, Clone)]
pub enum BstRemoveCase {
    NotFound,
    Leaf,
    OneChild,
    /// Two children: the named successor node was relinked into place
    TwoChildren { successor: NodeId },
}

/// Record of one delete, with the tree as it was beforehand
#[derive(Debug, Clone)]
pub struct BstRemoval {
    pub value: i64,
    pub pre: Bst,
    pub removed: Option<NodeId>,
    pub case: BstRemoveCase,
}

/// The BST store
#[derive(Debug, Clone, Default)]
pub struct Bst {
    nodes: FxHashMap<NodeId, BstNode>,
    root: Option<NodeId>,
    next_id: NodeId,
}

impl Bst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value as a new leaf, returning its id
    pub fn insert(&mut self, value: i64) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(
            id,
            BstNode {
                id,
                value,
                left: None,
                right: None,
            },
        );
        match self.root {
            None => self.root = Some(id),
            Some(root) => {
                let mut current = root;
                loop {
                    let node = &self.nodes[&current];
                    if value < node.value {
                        match node.left {
                            Some(next) => current = next,
                            None => {
                                if let Some(n) = self.nodes.get_mut(&current) {
                                    n.left = Some(id);
                                }
                                break;
                            }
                        }
                    } else {
                        match node.right {
                            Some(next) => current = next,
                            None => {
                                if let Some(n) = self.nodes.get_mut(&current) {
                                    n.right = Some(id);
                                }
                                break;
                            }
                        }
                    }
                }
            }
        }
        id
    }

    /// Delete the first node holding `value` (three textbook cases)
    pub fn remove(&mut self, value: i64) -> BstRemoval {
        let pre = self.clone();

        // Find the target and its parent link
        let mut parent: Option<(NodeId, bool)> = None; // (parent id, came right)
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[&id];
            if value == node.value {
                break;
            }
            let right = value >= node.value;
            parent = Some((id, right));
            current = if right { node.right } else { node.left };
        }

        let Some(target) = current else {
            return BstRemoval {
                value,
                pre,
                removed: None,
                case: BstRemoveCase::NotFound,
            };
        };

        let (left, right) = {
            let n = &self.nodes[&target];
            (n.left, n.right)
        };

        let (replacement, case) = match (left, right) {
            (None, None) => (None, BstRemoveCase::Leaf),
            (Some(only), None) | (None, Some(only)) => (Some(only), BstRemoveCase::OneChild),
            (Some(left), Some(right)) => {
                // In-order successor: leftmost node of the right subtree
                let mut succ_parent = None;
                let mut succ = right;
                while let Some(next) = self.nodes[&succ].left {
                    succ_parent = Some(succ);
                    succ = next;
                }
                // Detach the successor (it has no left child), then relink it
                // into the target's place
                let succ_right = self.nodes[&succ].right;
                if let Some(sp) = succ_parent {
                    if let Some(n) = self.nodes.get_mut(&sp) {
                        n.left = succ_right;
                    }
                    if let Some(n) = self.nodes.get_mut(&succ) {
                        n.right = Some(right);
                    }
                }
                if let Some(n) = self.nodes.get_mut(&succ) {
                    n.left = Some(left);
                }
                (Some(succ), BstRemoveCase::TwoChildren { successor: succ })
            }
        };

        match parent {
            Some((pid, came_right)) => {
                if let Some(p) = self.nodes.get_mut(&pid) {
                    if came_right {
                        p.right = replacement;
                    } else {
                        p.left = replacement;
                    }
                }
            }
            None => self.root = replacement,
        }
        self.nodes.remove(&target);

        BstRemoval {
            value,
            pre,
            removed: Some(target),
            case,
        }
    }

    /// Read-only search by value
    pub fn find(&self, value: i64) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[&id];
            if value == node.value {
                return Some(id);
            }
            current = if value < node.value {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    pub fn node(&self, id: NodeId) -> Option<&BstNode> {
        self.nodes.get(&id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}
