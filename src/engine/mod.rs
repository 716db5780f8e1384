//! Algorithm narration engines
//!
//! One routine per algorithm.  Every engine is read-only with respect to the
//! live store: graph algorithms and searches read the current structure
//! directly, and mutation narrations replay the operation against the
//! pre-mutation snapshot captured in the store's mutation record, ending in
//! exactly the state the store already reached.
//!
//! Each routine produces a [`StepSequence`](crate::step::StepSequence) whose
//! steps carry complete overlay snapshots; nothing an engine records aliases
//! its working stacks, queues, or visited sets.

pub mod bst;
pub mod errors;
pub mod graph;
pub mod hash;
pub mod heap;
pub mod linear;
pub mod list;
pub mod trie;
