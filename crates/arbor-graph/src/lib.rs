//! # arbor-graph
//!
//! Word-association graph model for arbor.
//!
//! Provides the data model and in-memory index the tree sampler reads from:
//! - [`model::AssocEntry`]       — one ranked neighbor of a word (wire format `{"w", "l"}`)
//! - [`adjacency::AssocIndex`]   — lock-free word → ranked-neighbors index
//! - [`model::is_numeric`]       — the numeric-word exclusion policy

pub mod adjacency;
pub mod model;

pub use adjacency::AssocIndex;
pub use model::{is_numeric, AssocEntry};
