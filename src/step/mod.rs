// Step records for algorithm playback

use std::fmt;

/// Stable identity of a node within one structure store.
///
/// Ids are allocated from a per-store counter and never reused; a node keeps
/// its id across link and position changes.
pub type NodeId = u64;

/// Stable identity of a graph edge.
pub type EdgeId = u64;

/// Tag describing what kind of moment a [`Step`] narrates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Visit,
    Compare,
    Swap,
    Push,
    Pop,
    Peek,
    Enqueue,
    Dequeue,
    Insert,
    Update,
    Remove,
    Skip,
    Settle,
    Relax,
    Select,
    Merge,
    Collision,
    Found,
    NotFound,
    Complete,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            StepKind::Visit => "visit",
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Push => "push",
            StepKind::Pop => "pop",
            StepKind::Peek => "peek",
            StepKind::Enqueue => "enqueue",
            StepKind::Dequeue => "dequeue",
            StepKind::Insert => "insert",
            StepKind::Update => "update",
            StepKind::Remove => "remove",
            StepKind::Skip => "skip",
            StepKind::Settle => "settle",
            StepKind::Relax => "relax",
            StepKind::Select => "select",
            StepKind::Merge => "merge",
            StepKind::Collision => "collision",
            StepKind::Found => "found",
            StepKind::NotFound => "not-found",
            StepKind::Complete => "complete",
        };
        write!(f, "{}", tag)
    }
}

/// Snapshot of auxiliary algorithm state at one instant.
///
/// Every field is a complete, owned copy taken when the step is recorded.
/// Jumping directly to any step is sufficient to reconstruct the whole
/// overlay; the playback controller never merges a step with its predecessor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    /// Highlighted node ids
    pub nodes: Vec<NodeId>,
    /// Highlighted edge id
    pub edge: Option<EdgeId>,
    /// The algorithm's own explicit stack or queue of node ids, front first
    pub frontier: Vec<NodeId>,
    /// Visited-set snapshot, in visit order
    pub visited: Vec<NodeId>,
    /// Running distance table; `None` means unreachable so far
    pub distances: Vec<(NodeId, Option<i64>)>,
    /// Full distance matrix (Floyd–Warshall); `None` entries are infinity
    pub matrix: Option<Vec<Vec<Option<i64>>>>,
    /// Accumulated MST edge ids
    pub mst_edges: Vec<EdgeId>,
    /// Pair of node ids being swapped (heap)
    pub swap: Option<(NodeId, NodeId)>,
    /// Touched array positions or bucket indices
    pub indices: Vec<usize>,
}

/// One narrated moment inside an algorithm's execution
#[derive(Debug, Clone)]
pub struct Step {
    pub kind: StepKind,
    /// Human-readable narration, consumed verbatim by the UI
    pub description: String,
    pub overlay: Overlay,
}

/// The full ordered list of steps produced by one operation.
///
/// Built atomically via [`StepRecorder`] and never mutated afterwards; a new
/// operation produces a brand-new sequence.
#[derive(Debug, Clone, Default)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Iterate over the steps in order
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The terminal step, if any
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }
}

/// Append-only builder for a [`StepSequence`].
///
/// Engines push steps as they conceptually progress; the overlay is taken by
/// value so no step can alias the engine's working collections.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    pub fn new() -> Self {
        StepRecorder { steps: Vec::new() }
    }

    /// Record one step
    pub fn push(&mut self, kind: StepKind, description: impl Into<String>, overlay: Overlay) {
        self.steps.push(Step {
            kind,
            description: description.into(),
            overlay,
        });
    }

    /// Record a step with no overlay
    pub fn push_plain(&mut self, kind: StepKind, description: impl Into<String>) {
        self.push(kind, description, Overlay::default());
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consume the recorder and seal the sequence
    pub fn finish(self) -> StepSequence {
        StepSequence { steps: self.steps }
    }
}
