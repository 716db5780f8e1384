//! # Introduction
//!
//! Algoviz is an interactive teaching tool for classic data structures.  Each
//! operation on a structure (insert into a heap, run BFS over a graph, look a
//! word up in a trie, ...) executes eagerly and is narrated as an ordered
//! sequence of immutable [`step::Step`] records.  The recorded sequence is
//! then replayed forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Operation → Store mutation → Engine narration → StepSequence → Playback → TUI
//! ```
//!
//! 1. [`store`] — the live, eagerly-mutated structures: graph, binary heap,
//!    trie, chained hash buckets, BST, linked list, stack, queue.
//! 2. [`engine`] — one narration routine per algorithm; each reads the store
//!    (and the mutation's pre-state where it replays a repair walk) and emits
//!    a [`step::StepSequence`].
//! 3. [`step`] — the step records themselves: every step carries a complete
//!    overlay snapshot, so seeking to any step reconstructs the full picture.
//! 4. [`playback`] — the playback controller: cursor, play/pause, manual
//!    stepping, three speed presets.
//! 5. [`session`] — one [`session::VisualizerSession`] per structure page
//!    with a single `apply` entry point tying mutation to narration.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported structures
//!
//! Linked list, binary search tree (with four traversal modes), stack, queue,
//! weighted graph (BFS, DFS, Dijkstra, Prim, Borůvka, Floyd–Warshall), trie,
//! hash set, hash table, binary min/max heap.

pub mod engine;
pub mod playback;
pub mod session;
pub mod step;
pub mod store;
pub mod ui;
