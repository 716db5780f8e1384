//! Trie store
//!
//! A synthetic root node anchors the structure.  Every word is case-folded to
//! lowercase before insert and lookup; callers never see mixed-case paths.
//! Removing a word only unmarks its end flag, so shared prefixes stay intact.

use crate::step::NodeId;
use rustc_hash::FxHashMap;

/// One trie node; the root carries no character
#[derive(Debug, Clone)]
pub struct TrieNode {
    pub id: NodeId,
    pub ch: Option<char>,
    pub children: FxHashMap<char, NodeId>,
    pub is_end_of_word: bool,
}

/// Record of one trie insert
#[derive(Debug, Clone)]
pub struct TrieMutation {
    /// The word as stored (lowercased)
    pub word: String,
    /// Ids of the nodes created by this insert, in path order
    pub created: Vec<NodeId>,
    /// Whether the word's end flag was already set
    pub already_present: bool,
}

/// The trie store
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: FxHashMap<NodeId, TrieNode>,
    root: NodeId,
    next_id: NodeId,
}

impl Trie {
    pub fn new() -> Self {
        let mut nodes = FxHashMap::default();
        nodes.insert(
            0,
            TrieNode {
                id: 0,
                ch: None,
                children: FxHashMap::default(),
                is_end_of_word: false,
            },
        );
        Trie {
            nodes,
            root: 0,
            next_id: 1,
        }
    }

    /// Case-fold a word the way the store does internally
    pub fn normalize(word: &str) -> String {
        word.to_lowercase()
    }

    /// Insert a word, creating a node per unmatched character
    pub fn insert(&mut self, word: &str) -> TrieMutation {
        let word = Self::normalize(word);
        let mut created = Vec::new();
        let mut current = self.root;
        for ch in word.chars() {
            match self.nodes[&current].children.get(&ch) {
                Some(&child) => current = child,
                None => {
                    let id = self.next_id;
                    self.next_id += 1;
                    self.nodes.insert(
                        id,
                        TrieNode {
                            id,
                            ch: Some(ch),
                            children: FxHashMap::default(),
                            is_end_of_word: false,
                        },
                    );
                    if let Some(node) = self.nodes.get_mut(&current) {
                        node.children.insert(ch, id);
                    }
                    created.push(id);
                    current = id;
                }
            }
        }
        let end = self.nodes.get_mut(&current);
        let already_present = end.as_ref().is_some_and(|n| n.is_end_of_word);
        if let Some(node) = end {
            node.is_end_of_word = true;
        }
        TrieMutation {
            word,
            created,
            already_present,
        }
    }

    /// Unmark a word's end flag; `false` when the word was not present
    pub fn remove(&mut self, word: &str) -> bool {
        let word = Self::normalize(word);
        match self.walk(&word) {
            Some(id) if self.nodes[&id].is_end_of_word => {
                if let Some(node) = self.nodes.get_mut(&id) {
                    node.is_end_of_word = false;
                }
                true
            }
            _ => false,
        }
    }

    /// Follow an already-normalized path; `None` the moment a character is
    /// missing
    pub fn walk(&self, word: &str) -> Option<NodeId> {
        let mut current = self.root;
        for ch in word.chars() {
            current = *self.nodes[&current].children.get(&ch)?;
        }
        Some(current)
    }

    /// Whether `word` is stored as a complete word
    pub fn contains(&self, word: &str) -> bool {
        self.walk(&Self::normalize(word))
            .is_some_and(|id| self.nodes[&id].is_end_of_word)
    }

    /// Whether any stored word starts with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(&Self::normalize(prefix)).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(&id)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Reset to a lone root node
    pub fn clear(&mut self) {
        *self = Trie::new();
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
