use thiserror::Error;

/// Sampling failure, reported to the caller as a value — never panicked
/// across the sampler boundary. Exhausted candidates, short adjacency lists
/// and numeric tokens are normal termination, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The seed word has no entry in the association index. Callers render
    /// a placeholder shape instead of failing the pipeline.
    #[error("seed word not found: {0}")]
    SeedNotFound(String),
}
