//! `arbor-sampler` — bounded random sampling walk over the word-association graph.
//!
//! Converts a flat "word → ranked related words" index ([`arbor_graph::AssocIndex`])
//! into a finite, de-duplicated, randomly-ordered tree for interactive renderers.
//!
//! ## Crate structure
//!
//! | Module     | Responsibility                                            |
//! |------------|-----------------------------------------------------------|
//! | [`config`] | [`SamplerConfig`], the two [`BranchingMode`]s             |
//! | [`grow`]   | [`sample`] — the recursive expansion walk                 |
//! | [`tree`]   | [`SampleNode`] output tree + inspection helpers           |
//! | [`shape`]  | Renderer adapters: [`TreeShape`], [`CloudWord`] lists     |
//! | [`error`]  | [`SampleError`] (seed-not-found, returned as a value)     |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use arbor_sampler::{sample, SamplerConfig, TreeShape};
//!
//! let config = SamplerConfig { seed: Some(42), ..Default::default() };
//! let shape = match sample(&index, "word2vec", &config) {
//!     Ok(tree) => TreeShape::from(&tree),
//!     Err(_)   => TreeShape::placeholder(),
//! };
//! ```

pub mod config;
pub mod error;
pub mod grow;
pub mod shape;
pub mod tree;

// ── Sampler ───────────────────────────────────────────────────────────────────
pub use grow::sample;

// ── Config ────────────────────────────────────────────────────────────────────
pub use config::{BranchingMode, SamplerConfig, DEFAULT_MAX_DEPTH};

// ── Output ────────────────────────────────────────────────────────────────────
pub use shape::{cloud_words, cloud_words_ordered, default_weight, CloudWord, TreeShape, ROOT_SIZE};
pub use tree::SampleNode;

// ── Error ─────────────────────────────────────────────────────────────────────
pub use error::SampleError;
