use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use arbor_graph::{is_numeric, AssocIndex};

use crate::config::SamplerConfig;
use crate::error::SampleError;
use crate::tree::SampleNode;

// ─────────────────────────────────────────────
// Sampling walk
// ─────────────────────────────────────────────

/// Sample a word-association tree rooted at `seed`.
///
/// Recursive depth-first expansion over the ranked neighbor lists in `index`:
/// each node claims up to its branching factor of still-unused words in rank
/// order, descends into them, then shuffles the finished sibling list. Words
/// are unique across the whole tree — whichever branch reaches a word first
/// keeps it. Each call builds the tree from scratch with a fresh used-words
/// set; nothing is shared between runs.
///
/// The only failure is a seed word missing from the index, returned as
/// [`SampleError::SeedNotFound`] with no partial tree.
pub fn sample(
    index: &AssocIndex,
    seed: &str,
    config: &SamplerConfig,
) -> Result<SampleNode, SampleError> {
    if !index.contains(seed) {
        return Err(SampleError::SeedNotFound(seed.to_string()));
    }

    // Optionally seeded RNG for reproducible trees
    let mut rng: Box<dyn RngCore> = match config.seed {
        Some(s) => Box::new(StdRng::seed_from_u64(s)),
        None => Box::new(rand::thread_rng()),
    };

    debug!(seed, mode = ?config.mode, "sampling run started");

    let mut used: HashSet<String> = HashSet::new();
    used.insert(seed.to_string());

    let mut root = SampleNode::new(seed, true);
    root.children = grow(
        index,
        config,
        &mut rng,
        &mut used,
        seed,
        0,
        config.mode.initial_budget(),
        config.mode.root_branch(),
    );

    debug!(seed, nodes = root.node_count(), depth = root.depth(), "sampling run finished");
    Ok(root)
}

/// Expand one node: claim children, recurse, shuffle.
///
/// `branch` is the branching factor for this call — the root's base value or
/// the caller's re-roll. Returns the (possibly empty) children list.
#[allow(clippy::too_many_arguments)]
fn grow(
    index: &AssocIndex,
    config: &SamplerConfig,
    rng: &mut dyn RngCore,
    used: &mut HashSet<String>,
    word: &str,
    depth: usize,
    budget: usize,
    branch: usize,
) -> Vec<SampleNode> {
    if depth >= config.max_depth
        || config.mode.budget_spent(budget)
        || is_numeric(word)
        || !index.contains(word)
    {
        return Vec::new();
    }

    // Claim up to `branch` unused words in rank order. A shorter neighbor
    // list than `branch` uses whatever is there; a word already claimed by
    // another branch is skipped. Claiming happens for the whole sibling
    // level before any descent.
    let mut claimed: Vec<(String, bool)> = Vec::new();
    for entry in index.neighbors(word).into_iter().take(branch) {
        if used.contains(&entry.word) {
            continue;
        }
        used.insert(entry.word.clone());
        claimed.push((entry.word, entry.strong));
    }

    // Descend before shuffling: the shuffle reorders siblings only and must
    // not affect which words were claimed.
    let next_budget = config.mode.next_budget(budget);
    let mut children: Vec<SampleNode> = claimed
        .into_iter()
        .map(|(child_word, strong)| {
            let child_branch = config.mode.reroll(rng);
            let grandchildren = grow(
                index, config, rng, used, &child_word, depth + 1, next_budget, child_branch,
            );
            SampleNode { word: child_word, strong, children: grandchildren }
        })
        .collect();

    if config.shuffle {
        children.shuffle(rng);
    }

    children
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
