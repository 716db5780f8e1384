//! Visualizer sessions
//!
//! A [`VisualizerSession`] is the one aggregate behind a visualizer page: the
//! structure store, and the playback controller for the most recent
//! operation's steps.  [`VisualizerSession::apply`] is the single entry
//! point: it validates, mutates the store eagerly, invokes the matching
//! narration engine, and loads the fresh sequence into playback (stopping and
//! discarding the previous one in the same call).
//!
//! Input validation ([`OperationError::InvalidInput`], `EmptyStructure`,
//! `UnknownNode`) happens before the store is touched; a failed apply leaves
//! both the store and the loaded step sequence unchanged.

pub mod commands;

use crate::engine;
use crate::engine::bst::TraversalOrder;
use crate::engine::errors::OperationError;
use crate::playback::PlaybackController;
use crate::step::{EdgeId, NodeId, Overlay, StepKind, StepRecorder, StepSequence};
use crate::store::bst::Bst;
use crate::store::graph::Graph;
use crate::store::hash::HashBuckets;
use crate::store::heap::{BinaryHeap, HeapMutation};
use crate::store::linear::{LinearNode, Queue, Stack};
use crate::store::list::LinkedList;
use crate::store::trie::Trie;

/// The nine visualizer pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    LinkedList,
    Bst,
    Stack,
    Queue,
    Graph,
    Trie,
    HashSet,
    HashTable,
    Heap,
}

impl StructureKind {
    pub fn label(self) -> &'static str {
        match self {
            StructureKind::LinkedList => "linked list",
            StructureKind::Bst => "binary search tree",
            StructureKind::Stack => "stack",
            StructureKind::Queue => "queue",
            StructureKind::Graph => "graph",
            StructureKind::Trie => "trie",
            StructureKind::HashSet => "hash set",
            StructureKind::HashTable => "hash table",
            StructureKind::Heap => "binary heap",
        }
    }

    /// Parse a structure name as given on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "list" | "linked-list" | "linkedlist" => Some(StructureKind::LinkedList),
            "bst" | "tree" => Some(StructureKind::Bst),
            "stack" => Some(StructureKind::Stack),
            "queue" => Some(StructureKind::Queue),
            "graph" => Some(StructureKind::Graph),
            "trie" => Some(StructureKind::Trie),
            "hashset" | "set" => Some(StructureKind::HashSet),
            "hashtable" | "table" | "map" => Some(StructureKind::HashTable),
            "heap" | "min-heap" | "max-heap" => Some(StructureKind::Heap),
            _ => None,
        }
    }
}

/// One user-triggered operation against a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    // graph
    AddNode { label: String },
    AddEdge { from: String, to: String, weight: i64 },
    RemoveNode { label: String },
    Bfs { start: String },
    Dfs { start: String },
    Dijkstra { start: String },
    Prim,
    Boruvka,
    FloydWarshall,
    // heap
    HeapInsert { value: i64 },
    HeapExtract,
    HeapPeek,
    // trie
    TrieInsert { word: String },
    TrieSearch { word: String },
    TrieStartsWith { prefix: String },
    TrieRemove { word: String },
    // hash set / hash table
    HashPut { key: i64, value: Option<String> },
    HashGet { key: i64 },
    HashRemove { key: i64 },
    // bst
    BstInsert { value: i64 },
    BstSearch { value: i64 },
    BstRemove { value: i64 },
    BstTraverse(TraversalOrder),
    // linked list
    ListInsertHead { value: i64 },
    ListInsertTail { value: i64 },
    ListInsertAt { value: i64, index: usize },
    ListRemove { value: i64 },
    ListSearch { value: i64 },
    ListTraverse,
    // stack / queue
    StackPush { value: i64 },
    StackPop,
    StackPeek,
    QueueEnqueue { value: i64 },
    QueueDequeue,
    QueuePeek,
    // any structure
    Clear,
}

impl Operation {
    fn name(&self) -> &'static str {
        match self {
            Operation::AddNode { .. } => "node",
            Operation::AddEdge { .. } => "edge",
            Operation::RemoveNode { .. } => "remove",
            Operation::Bfs { .. } => "bfs",
            Operation::Dfs { .. } => "dfs",
            Operation::Dijkstra { .. } => "dijkstra",
            Operation::Prim => "prim",
            Operation::Boruvka => "boruvka",
            Operation::FloydWarshall => "floyd",
            Operation::HeapInsert { .. } | Operation::BstInsert { .. } => "insert",
            Operation::HeapExtract => "extract",
            Operation::HeapPeek | Operation::StackPeek | Operation::QueuePeek => "peek",
            Operation::TrieInsert { .. } => "insert",
            Operation::TrieSearch { .. } | Operation::BstSearch { .. } => "search",
            Operation::TrieStartsWith { .. } => "prefix",
            Operation::TrieRemove { .. } | Operation::HashRemove { .. } => "remove",
            Operation::HashPut { .. } => "put",
            Operation::HashGet { .. } => "get",
            Operation::BstRemove { .. } | Operation::ListRemove { .. } => "delete",
            Operation::BstTraverse(_) | Operation::ListTraverse => "traverse",
            Operation::ListSearch { .. } => "search",
            Operation::ListInsertHead { .. } => "head",
            Operation::ListInsertTail { .. } => "tail",
            Operation::ListInsertAt { .. } => "at",
            Operation::StackPush { .. } => "push",
            Operation::StackPop => "pop",
            Operation::QueueEnqueue { .. } => "enqueue",
            Operation::QueueDequeue => "dequeue",
            Operation::Clear => "clear",
        }
    }
}

/// What an operation changed in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureDelta {
    /// Read-only operation, nothing changed
    None,
    NodeAdded(NodeId),
    EdgeAdded(EdgeId),
    NodeRemoved(NodeId),
    /// A delete/remove that found nothing to remove
    Missed,
    /// Extract/pop/dequeue returned this value
    Extracted(i64),
    Cleared,
}

/// Result of a successful apply: the delta plus the recorded narration
#[derive(Debug, Clone)]
pub struct OperationOutcome {
    pub delta: StructureDelta,
    pub steps: StepSequence,
}

enum Store {
    Graph(Graph),
    Heap(BinaryHeap),
    Trie(Trie),
    Hash(HashBuckets),
    Bst(Bst),
    List(LinkedList),
    Stack(Stack),
    Queue(Queue),
}

/// The aggregate behind one visualizer page
pub struct VisualizerSession {
    kind: StructureKind,
    store: Store,
    playback: PlaybackController,
}

impl VisualizerSession {
    /// Create a session with an empty structure.  The heap defaults to a
    /// min-heap and the graph to undirected; see [`Self::max_heap`] and
    /// [`Self::directed_graph`].
    pub fn new(kind: StructureKind) -> Self {
        let store = match kind {
            StructureKind::LinkedList => Store::List(LinkedList::new()),
            StructureKind::Bst => Store::Bst(Bst::new()),
            StructureKind::Stack => Store::Stack(Stack::new()),
            StructureKind::Queue => Store::Queue(Queue::new()),
            StructureKind::Graph => Store::Graph(Graph::new(false)),
            StructureKind::Trie => Store::Trie(Trie::new()),
            StructureKind::HashSet => Store::Hash(HashBuckets::new(true)),
            StructureKind::HashTable => Store::Hash(HashBuckets::new(false)),
            StructureKind::Heap => Store::Heap(BinaryHeap::new(true)),
        };
        VisualizerSession {
            kind,
            store,
            playback: PlaybackController::new(),
        }
    }

    /// A max-heap session
    pub fn max_heap() -> Self {
        VisualizerSession {
            kind: StructureKind::Heap,
            store: Store::Heap(BinaryHeap::new(false)),
            playback: PlaybackController::new(),
        }
    }

    /// A directed-graph session
    pub fn directed_graph() -> Self {
        VisualizerSession {
            kind: StructureKind::Graph,
            store: Store::Graph(Graph::new(true)),
            playback: PlaybackController::new(),
        }
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut PlaybackController {
        &mut self.playback
    }

    pub fn graph(&self) -> Option<&Graph> {
        match &self.store {
            Store::Graph(g) => Some(g),
            _ => None,
        }
    }

    pub fn heap(&self) -> Option<&BinaryHeap> {
        match &self.store {
            Store::Heap(h) => Some(h),
            _ => None,
        }
    }

    pub fn trie(&self) -> Option<&Trie> {
        match &self.store {
            Store::Trie(t) => Some(t),
            _ => None,
        }
    }

    pub fn hash(&self) -> Option<&HashBuckets> {
        match &self.store {
            Store::Hash(h) => Some(h),
            _ => None,
        }
    }

    pub fn bst(&self) -> Option<&Bst> {
        match &self.store {
            Store::Bst(b) => Some(b),
            _ => None,
        }
    }

    pub fn list(&self) -> Option<&LinkedList> {
        match &self.store {
            Store::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn stack(&self) -> Option<&Stack> {
        match &self.store {
            Store::Stack(s) => Some(s),
            _ => None,
        }
    }

    pub fn queue(&self) -> Option<&Queue> {
        match &self.store {
            Store::Queue(q) => Some(q),
            _ => None,
        }
    }

    /// Run one operation: validate, mutate eagerly, narrate, load playback.
    ///
    /// On error nothing was mutated and the previously loaded sequence keeps
    /// playing back.
    pub fn apply(&mut self, op: Operation) -> Result<OperationOutcome, OperationError> {
        if op == Operation::Clear {
            self.clear_store();
            let mut rec = StepRecorder::new();
            rec.push_plain(StepKind::Complete, "Structure cleared");
            let steps = rec.finish();
            self.playback.load(steps.clone());
            return Ok(OperationOutcome {
                delta: StructureDelta::Cleared,
                steps,
            });
        }

        let name = op.name();
        let (delta, steps) = match (&mut self.store, op) {
            // --- graph ---
            (Store::Graph(g), Operation::AddNode { label }) => {
                let id = g.add_node(label.clone());
                let mut rec = StepRecorder::new();
                rec.push(
                    StepKind::Insert,
                    format!("Added node {}", label),
                    Overlay {
                        nodes: vec![id],
                        ..Overlay::default()
                    },
                );
                (StructureDelta::NodeAdded(id), rec.finish())
            }
            (Store::Graph(g), Operation::AddEdge { from, to, weight }) => {
                let from_id = Self::resolve(g, &from)?;
                let to_id = Self::resolve(g, &to)?;
                let edge = g
                    .add_edge(from_id, to_id, weight)
                    .map_err(|message| OperationError::InvalidInput { message })?;
                let mut rec = StepRecorder::new();
                rec.push(
                    StepKind::Insert,
                    format!("Added edge {}-{} with weight {}", from, to, weight),
                    Overlay {
                        nodes: vec![from_id, to_id],
                        edge: Some(edge),
                        ..Overlay::default()
                    },
                );
                (StructureDelta::EdgeAdded(edge), rec.finish())
            }
            (Store::Graph(g), Operation::RemoveNode { label }) => {
                match g.node_by_label(&label).map(|n| n.id) {
                    Some(id) => {
                        g.remove_node(id);
                        let mut rec = StepRecorder::new();
                        rec.push_plain(
                            StepKind::Remove,
                            format!("Removed node {} and its incident edges", label),
                        );
                        (StructureDelta::NodeRemoved(id), rec.finish())
                    }
                    None => {
                        let mut rec = StepRecorder::new();
                        rec.push_plain(
                            StepKind::NotFound,
                            format!("No node labeled '{}' to remove", label),
                        );
                        (StructureDelta::Missed, rec.finish())
                    }
                }
            }
            (Store::Graph(g), Operation::Bfs { start }) => {
                let id = Self::resolve(g, &start)?;
                (StructureDelta::None, engine::graph::bfs(g, id))
            }
            (Store::Graph(g), Operation::Dfs { start }) => {
                let id = Self::resolve(g, &start)?;
                (StructureDelta::None, engine::graph::dfs(g, id))
            }
            (Store::Graph(g), Operation::Dijkstra { start }) => {
                let id = Self::resolve(g, &start)?;
                (StructureDelta::None, engine::graph::dijkstra(g, id))
            }
            (Store::Graph(g), Operation::Prim) => {
                (StructureDelta::None, engine::graph::prim(g))
            }
            (Store::Graph(g), Operation::Boruvka) => {
                (StructureDelta::None, engine::graph::boruvka(g))
            }
            (Store::Graph(g), Operation::FloydWarshall) => {
                (StructureDelta::None, engine::graph::floyd_warshall(g))
            }

            // --- heap ---
            (Store::Heap(h), Operation::HeapInsert { value }) => {
                let mutation = h.insert(value);
                let steps = engine::heap::narrate_insert(h, &mutation);
                let delta = match &mutation {
                    HeapMutation::Insert { node, .. } => StructureDelta::NodeAdded(node.id),
                    HeapMutation::Extract { .. } => StructureDelta::None,
                };
                (delta, steps)
            }
            (Store::Heap(h), Operation::HeapExtract) => {
                if h.is_empty() {
                    return Err(OperationError::EmptyStructure { structure: "heap" });
                }
                let mutation = h
                    .extract()
                    .map_err(|message| OperationError::InvalidInput { message })?;
                let steps = engine::heap::narrate_extract(h, &mutation);
                let delta = match &mutation {
                    HeapMutation::Extract { root, .. } => StructureDelta::Extracted(root.value),
                    HeapMutation::Insert { .. } => StructureDelta::None,
                };
                (delta, steps)
            }
            (Store::Heap(h), Operation::HeapPeek) => {
                if h.is_empty() {
                    return Err(OperationError::EmptyStructure { structure: "heap" });
                }
                (StructureDelta::None, engine::heap::narrate_peek(h))
            }

            // --- trie ---
            (Store::Trie(t), Operation::TrieInsert { word }) => {
                Self::require_text(&word, "word")?;
                let mutation = t.insert(&word);
                let steps = engine::trie::narrate_insert(t, &mutation);
                (StructureDelta::None, steps)
            }
            (Store::Trie(t), Operation::TrieSearch { word }) => {
                Self::require_text(&word, "word")?;
                (StructureDelta::None, engine::trie::narrate_search(t, &word))
            }
            (Store::Trie(t), Operation::TrieStartsWith { prefix }) => {
                Self::require_text(&prefix, "prefix")?;
                (
                    StructureDelta::None,
                    engine::trie::narrate_starts_with(t, &prefix),
                )
            }
            (Store::Trie(t), Operation::TrieRemove { word }) => {
                Self::require_text(&word, "word")?;
                let removed = t.remove(&word);
                let steps = engine::trie::narrate_remove(t, &word, removed);
                let delta = if removed {
                    StructureDelta::None
                } else {
                    StructureDelta::Missed
                };
                (delta, steps)
            }

            // --- hash set / table ---
            (Store::Hash(h), Operation::HashPut { key, value }) => {
                let mutation = h.put(key, value);
                let steps = engine::hash::narrate_put(h, &mutation);
                (StructureDelta::None, steps)
            }
            (Store::Hash(h), Operation::HashGet { key }) => {
                (StructureDelta::None, engine::hash::narrate_get(h, key))
            }
            (Store::Hash(h), Operation::HashRemove { key }) => {
                let mutation = h.remove(key);
                let steps = engine::hash::narrate_remove(&mutation);
                (StructureDelta::None, steps)
            }

            // --- bst ---
            (Store::Bst(b), Operation::BstInsert { value }) => {
                let id = b.insert(value);
                let steps = engine::bst::narrate_insert(b, id);
                (StructureDelta::NodeAdded(id), steps)
            }
            (Store::Bst(b), Operation::BstSearch { value }) => {
                (StructureDelta::None, engine::bst::narrate_search(b, value))
            }
            (Store::Bst(b), Operation::BstRemove { value }) => {
                let removal = b.remove(value);
                let steps = engine::bst::narrate_remove(&removal);
                let delta = match removal.removed {
                    Some(id) => StructureDelta::NodeRemoved(id),
                    None => StructureDelta::Missed,
                };
                (delta, steps)
            }
            (Store::Bst(b), Operation::BstTraverse(order)) => (
                StructureDelta::None,
                engine::bst::narrate_traversal(b, order),
            ),

            // --- linked list ---
            (Store::List(l), Operation::ListInsertHead { value }) => {
                let id = l.insert_head(value);
                (StructureDelta::NodeAdded(id), engine::list::narrate_insert(l, id))
            }
            (Store::List(l), Operation::ListInsertTail { value }) => {
                let id = l.insert_tail(value);
                (StructureDelta::NodeAdded(id), engine::list::narrate_insert(l, id))
            }
            (Store::List(l), Operation::ListInsertAt { value, index }) => {
                let id = l.insert_at(value, index);
                (StructureDelta::NodeAdded(id), engine::list::narrate_insert(l, id))
            }
            (Store::List(l), Operation::ListRemove { value }) => {
                let removal = l.remove(value);
                let steps = engine::list::narrate_remove(&removal);
                let delta = match removal.removed {
                    Some(id) => StructureDelta::NodeRemoved(id),
                    None => StructureDelta::Missed,
                };
                (delta, steps)
            }
            (Store::List(l), Operation::ListSearch { value }) => {
                (StructureDelta::None, engine::list::narrate_search(l, value))
            }
            (Store::List(l), Operation::ListTraverse) => {
                (StructureDelta::None, engine::list::narrate_traverse(l))
            }

            // --- stack / queue ---
            (Store::Stack(s), Operation::StackPush { value }) => {
                let id = s.push(value);
                let node = LinearNode { id, value };
                (StructureDelta::NodeAdded(id), engine::linear::narrate_push(s, &node))
            }
            (Store::Stack(s), Operation::StackPop) => {
                if s.is_empty() {
                    return Err(OperationError::EmptyStructure { structure: "stack" });
                }
                let node = s
                    .pop()
                    .map_err(|message| OperationError::InvalidInput { message })?;
                (
                    StructureDelta::Extracted(node.value),
                    engine::linear::narrate_pop(s, &node),
                )
            }
            (Store::Stack(s), Operation::StackPeek) => {
                if s.is_empty() {
                    return Err(OperationError::EmptyStructure { structure: "stack" });
                }
                (StructureDelta::None, engine::linear::narrate_stack_peek(s))
            }
            (Store::Queue(q), Operation::QueueEnqueue { value }) => {
                let id = q.enqueue(value);
                let node = LinearNode { id, value };
                (
                    StructureDelta::NodeAdded(id),
                    engine::linear::narrate_enqueue(q, &node),
                )
            }
            (Store::Queue(q), Operation::QueueDequeue) => {
                if q.is_empty() {
                    return Err(OperationError::EmptyStructure { structure: "queue" });
                }
                let node = q
                    .dequeue()
                    .map_err(|message| OperationError::InvalidInput { message })?;
                (
                    StructureDelta::Extracted(node.value),
                    engine::linear::narrate_dequeue(q, &node),
                )
            }
            (Store::Queue(q), Operation::QueuePeek) => {
                if q.is_empty() {
                    return Err(OperationError::EmptyStructure { structure: "queue" });
                }
                (StructureDelta::None, engine::linear::narrate_queue_peek(q))
            }

            _ => {
                return Err(OperationError::WrongStructure {
                    operation: name,
                    structure: self.kind.label(),
                })
            }
        };

        self.playback.load(steps.clone());
        Ok(OperationOutcome { delta, steps })
    }

    fn clear_store(&mut self) {
        match &mut self.store {
            Store::Graph(g) => g.clear(),
            Store::Heap(h) => h.clear(),
            Store::Trie(t) => t.clear(),
            Store::Hash(h) => h.clear(),
            Store::Bst(b) => b.clear(),
            Store::List(l) => l.clear(),
            Store::Stack(s) => s.clear(),
            Store::Queue(q) => q.clear(),
        }
    }

    /// Reject an empty word or prefix before the store sees it.
    ///
    /// Without this a zero-character insert would mark the trie's synthetic
    /// root as a complete word.
    fn require_text(text: &str, what: &'static str) -> Result<(), OperationError> {
        if text.is_empty() {
            return Err(OperationError::InvalidInput {
                message: format!("missing {}", what),
            });
        }
        Ok(())
    }

    fn resolve(graph: &Graph, label: &str) -> Result<NodeId, OperationError> {
        graph
            .node_by_label(label)
            .map(|n| n.id)
            .ok_or_else(|| OperationError::UnknownNode {
                label: label.to_string(),
            })
    }
}
