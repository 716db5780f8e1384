//! The live structure stores
//!
//! Each store is the authoritative in-memory shape of one visualized
//! structure.  Operations mutate it eagerly and synchronously; playback never
//! rolls a store back.  Mutating operations return a mutation record carrying
//! what the narration engine needs (created ids, removed nodes, and a
//! pre-mutation snapshot where the narration replays a repair walk).
//!
//! Stores hand out stable [`NodeId`]s from a per-store counter; a node keeps
//! its id for as long as it lives, no matter how its links change.  No node is
//! shared across structures.
//!
//! [`NodeId`]: crate::step::NodeId

pub mod bst;
pub mod graph;
pub mod hash;
pub mod heap;
pub mod linear;
pub mod list;
pub mod trie;
