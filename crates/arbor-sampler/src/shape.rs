use rand::seq::SliceRandom;
use rand::RngCore;
use serde::Serialize;

use crate::tree::SampleNode;

/// Fixed size of the root word in a cloud list, regardless of the weight fn.
pub const ROOT_SIZE: f64 = 95.0;

// ─────────────────────────────────────────────
// Tree shape
// ─────────────────────────────────────────────

/// Renderer-facing tree: `{name, fruit, children}`.
///
/// Serializes straight into the expand/collapse node-link renderer, which
/// owns layout, animation and collapse bookkeeping. Leaves serialize
/// without a `children` key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeShape {
    pub name: String,
    pub fruit: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeShape>,
}

impl TreeShape {
    /// Fallback tree rendered in place of a sampled one when the seed word
    /// is unknown.
    pub fn placeholder() -> Self {
        Self {
            name: "Seed word not found".to_string(),
            fruit: false,
            children: vec![Self {
                name: "Please try another word".to_string(),
                fruit: false,
                children: Vec::new(),
            }],
        }
    }
}

impl From<&SampleNode> for TreeShape {
    fn from(node: &SampleNode) -> Self {
        Self {
            name: node.word.clone(),
            fruit: node.strong,
            children: node.children.iter().map(Self::from).collect(),
        }
    }
}

// ─────────────────────────────────────────────
// Cloud list
// ─────────────────────────────────────────────

/// One entry of the flat weighted list consumed by the word-cloud layout
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudWord {
    pub text: String,
    pub size: f64,
}

impl CloudWord {
    /// Single-entry fallback list for an unknown seed, sized like a root so
    /// the message flows through the normal renderer path.
    pub fn placeholder() -> Vec<CloudWord> {
        vec![CloudWord {
            text: "Seed word not found. Please try another word".to_string(),
            size: ROOT_SIZE,
        }]
    }
}

/// Default cloud weight: `depth * 5 + 8`.
pub fn default_weight(depth: usize) -> f64 {
    (depth * 5 + 8) as f64
}

/// Flatten a sampled tree into weighted cloud entries and shuffle the list.
///
/// Sizes come from `weight(depth)` except the root, which always gets
/// [`ROOT_SIZE`]. The shuffle is independent of the tree's own per-node
/// sibling shuffle — it only perturbs the layout engine's placement race,
/// not which words appear.
pub fn cloud_words<F>(root: &SampleNode, weight: F, rng: &mut dyn RngCore) -> Vec<CloudWord>
where
    F: Fn(usize) -> f64,
{
    let mut words = cloud_words_ordered(root, weight);
    words.shuffle(rng);
    words
}

/// Pre-order variant of [`cloud_words`] without the final shuffle.
pub fn cloud_words_ordered<F>(root: &SampleNode, weight: F) -> Vec<CloudWord>
where
    F: Fn(usize) -> f64,
{
    let mut out = Vec::with_capacity(root.node_count());
    flatten(root, 0, &weight, &mut out);
    out
}

fn flatten<F>(node: &SampleNode, depth: usize, weight: &F, out: &mut Vec<CloudWord>)
where
    F: Fn(usize) -> f64,
{
    let size = if depth == 0 { ROOT_SIZE } else { weight(depth) };
    out.push(CloudWord { text: node.word.clone(), size });
    for child in &node.children {
        flatten(child, depth + 1, weight, out);
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    /// seed ── alpha ── beta
    fn chain_tree() -> SampleNode {
        let mut alpha = SampleNode::new("alpha", false);
        alpha.children.push(SampleNode::new("beta", true));

        let mut root = SampleNode::new("seed", true);
        root.children.push(alpha);
        root
    }

    // ── tree shape ───────────────────────────────────────

    #[test]
    fn tree_shape_maps_fields() {
        let shape = TreeShape::from(&chain_tree());
        assert_eq!(shape.name, "seed");
        assert!(shape.fruit);
        assert_eq!(shape.children.len(), 1);
        assert!(!shape.children[0].fruit);
        assert_eq!(shape.children[0].children[0].name, "beta");
    }

    #[test]
    fn leaves_serialize_without_children_key() {
        let shape = TreeShape::from(&chain_tree());
        assert_eq!(
            serde_json::to_value(&shape).unwrap(),
            json!({
                "name": "seed",
                "fruit": true,
                "children": [{
                    "name": "alpha",
                    "fruit": false,
                    "children": [{"name": "beta", "fruit": true}],
                }],
            })
        );
    }

    #[test]
    fn placeholder_tree_carries_the_hint() {
        let shape = TreeShape::placeholder();
        assert_eq!(shape.name, "Seed word not found");
        assert!(!shape.fruit);
        assert_eq!(shape.children[0].name, "Please try another word");
    }

    // ── cloud list ───────────────────────────────────────

    #[test]
    fn cloud_sizes_follow_depth_with_root_override() {
        let words = cloud_words_ordered(&chain_tree(), default_weight);
        assert_eq!(words.len(), 3);

        // pre-order: seed, alpha, beta
        assert_eq!(words[0], CloudWord { text: "seed".to_string(), size: ROOT_SIZE });
        assert_eq!(words[1], CloudWord { text: "alpha".to_string(), size: 13.0 });
        assert_eq!(words[2], CloudWord { text: "beta".to_string(), size: 18.0 });
    }

    #[test]
    fn custom_weight_fn_is_honored_below_the_root() {
        let words = cloud_words_ordered(&chain_tree(), |d| (d * 100) as f64);
        assert_eq!(words[0].size, ROOT_SIZE);
        assert_eq!(words[1].size, 100.0);
        assert_eq!(words[2].size, 200.0);
    }

    #[test]
    fn cloud_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut shuffled = cloud_words(&chain_tree(), default_weight, &mut rng);
        let mut ordered = cloud_words_ordered(&chain_tree(), default_weight);

        shuffled.sort_by(|a, b| a.text.cmp(&b.text));
        ordered.sort_by(|a, b| a.text.cmp(&b.text));
        assert_eq!(shuffled, ordered);
    }

    #[test]
    fn cloud_placeholder_is_a_single_root_sized_entry() {
        let words = CloudWord::placeholder();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].size, ROOT_SIZE);
        assert!(words[0].text.contains("not found"));
    }
}
