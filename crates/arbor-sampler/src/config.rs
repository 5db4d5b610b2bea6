use rand::{Rng, RngCore};

// ─────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────

/// Default hard ceiling on tree depth from the root.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default root branching factor in jitter mode.
pub const DEFAULT_JITTER_BASE: usize = 3;
/// Default lower bound of the per-call jitter re-roll.
pub const DEFAULT_JITTER_LO: usize = 2;
/// Default upper bound of the per-call jitter re-roll.
pub const DEFAULT_JITTER_HI: usize = 5;

/// Default fixed branching factor in decaying mode.
pub const DEFAULT_DECAY_BRANCH: usize = 4;
/// Default initial depth budget in decaying mode.
pub const DEFAULT_DECAY_BUDGET: usize = 16;
/// Default budget consumed per level in decaying mode.
pub const DEFAULT_DECAY_STEP: usize = 2;

// ─────────────────────────────────────────────
// BranchingMode
// ─────────────────────────────────────────────

/// How the branching factor evolves as the walk descends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchingMode {
    /// Branching factor is `base` at the root and is re-rolled to a uniform
    /// random integer in `[jitter_lo, jitter_hi]` per recursive call before a
    /// node's own children are generated. Depth is limited by the hard cap
    /// alone. Invariant: `jitter_lo <= jitter_hi`.
    FixedWithJitter {
        base: usize,
        jitter_lo: usize,
        jitter_hi: usize,
    },

    /// Branching factor is fixed at `branch` for the whole run; a depth
    /// budget decreases by `decay` per level and the walk self-terminates
    /// once it reaches zero. The hard depth cap still applies on top, so
    /// the walk terminates even with `decay = 0`.
    Decaying {
        branch: usize,
        budget: usize,
        decay: usize,
    },
}

impl Default for BranchingMode {
    fn default() -> Self {
        Self::FixedWithJitter {
            base: DEFAULT_JITTER_BASE,
            jitter_lo: DEFAULT_JITTER_LO,
            jitter_hi: DEFAULT_JITTER_HI,
        }
    }
}

impl BranchingMode {
    /// Decaying mode with its default parameters (branch 4, budget 16, −2 per level).
    pub fn decaying() -> Self {
        Self::Decaying {
            branch: DEFAULT_DECAY_BRANCH,
            budget: DEFAULT_DECAY_BUDGET,
            decay: DEFAULT_DECAY_STEP,
        }
    }

    /// Branching factor for the root call.
    pub(crate) fn root_branch(&self) -> usize {
        match self {
            Self::FixedWithJitter { base, .. } => *base,
            Self::Decaying { branch, .. } => *branch,
        }
    }

    /// Branching factor for a recursive call — re-rolled in jitter mode,
    /// fixed in decaying mode.
    pub(crate) fn reroll(&self, rng: &mut dyn RngCore) -> usize {
        match self {
            Self::FixedWithJitter { jitter_lo, jitter_hi, .. } => {
                rng.gen_range(*jitter_lo..=*jitter_hi)
            }
            Self::Decaying { branch, .. } => *branch,
        }
    }

    /// Depth budget the root call starts with (unused in jitter mode).
    pub(crate) fn initial_budget(&self) -> usize {
        match self {
            Self::Decaying { budget, .. } => *budget,
            Self::FixedWithJitter { .. } => 0,
        }
    }

    /// Budget handed to the next level down.
    pub(crate) fn next_budget(&self, budget: usize) -> usize {
        match self {
            Self::Decaying { decay, .. } => budget.saturating_sub(*decay),
            Self::FixedWithJitter { .. } => budget,
        }
    }

    /// Whether the decaying budget forbids expanding at this level.
    pub(crate) fn budget_spent(&self, budget: usize) -> bool {
        matches!(self, Self::Decaying { .. }) && budget == 0
    }
}

// ─────────────────────────────────────────────
// SamplerConfig
// ─────────────────────────────────────────────

/// Configuration for one sampling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Branching behavior of the walk.
    pub mode: BranchingMode,
    /// Hard ceiling on tree depth from the root (applies in both modes).
    pub max_depth: usize,
    /// RNG seed for reproducible sampling; `None` = thread RNG.
    pub seed: Option<u64>,
    /// When false, children keep rank-then-traversal order
    /// (identity permutation) so callers can assert exact structure.
    pub shuffle: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            mode: BranchingMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            seed: None,
            shuffle: true,
        }
    }
}

impl SamplerConfig {
    /// Decaying-budget preset. The cap is set to the number of levels the
    /// default budget affords, so the budget stays the binding constraint.
    pub fn decaying() -> Self {
        Self {
            mode: BranchingMode::decaying(),
            max_depth: DEFAULT_DECAY_BUDGET / DEFAULT_DECAY_STEP,
            ..Default::default()
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
