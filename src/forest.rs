//! Tree-ensemble classifier loaded from a JSON artifact.
//!
//! The trained model is exported as a forest of binary decision trees.
//! Each leaf carries the probability of the bad-risk class observed in the
//! training samples that reached it; the forest's probability is the mean
//! over all trees.

use crate::classifier::ProbabilityModel;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Internal node in a decision tree.
///
/// Contains a split condition (feature and threshold) and pointers to
/// left and right subtrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Index of the feature to split on
    pub feature_idx: usize,
    /// Threshold value for the split
    pub threshold: f64,
    /// Left subtree (samples where feature <= threshold)
    pub left: Box<TreeNode>,
    /// Right subtree (samples where feature > threshold)
    pub right: Box<TreeNode>,
}

/// Leaf node in a decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaf {
    /// Probability of the bad-risk class in this leaf
    pub probability: f64,
}

/// A node in a decision tree (either internal node or leaf).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Internal decision node with split condition
    Node(Node),
    /// Leaf node with class probability
    Leaf(Leaf),
}

impl TreeNode {
    /// Returns the depth of the tree rooted at this node.
    ///
    /// Leaf nodes have depth 0, internal nodes have depth 1 + max(left, right).
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 0,
            TreeNode::Node(node) => 1 + node.left.depth().max(node.right.depth()),
        }
    }
}

/// A single decision tree of the forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Root node of the tree
    pub root: TreeNode,
}

impl DecisionTree {
    /// Walks the tree for one sample and returns the leaf probability.
    fn predict_proba(&self, features: &[f64]) -> Result<f64, AppError> {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Leaf(leaf) => return Ok(leaf.probability),
                TreeNode::Node(split) => {
                    let value = features.get(split.feature_idx).ok_or_else(|| {
                        AppError::Inference(format!(
                            "Split references feature index {} but vector has {} features",
                            split.feature_idx,
                            features.len()
                        ))
                    })?;
                    node = if *value <= split.threshold {
                        &split.left
                    } else {
                        &split.right
                    };
                }
            }
        }
    }
}

/// Random-forest style ensemble: averages bad-risk probabilities over trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestModel {
    /// Number of features the forest was trained on
    pub n_features: usize,
    /// The trees of the ensemble
    pub trees: Vec<DecisionTree>,
}

impl ForestModel {
    /// Loads a forest from a JSON artifact file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read model file {}: {}", path.display(), e))?;
        let model: ForestModel = serde_json::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Failed to parse model file {}: {}", path.display(), e))?;
        if model.trees.is_empty() {
            anyhow::bail!("Model file {} contains no trees", path.display());
        }
        Ok(model)
    }
}

impl ProbabilityModel for ForestModel {
    fn n_features(&self) -> usize {
        self.n_features
    }

    /// Mean of per-tree leaf probabilities.
    fn predict_proba(&self, features: &[f64]) -> Result<f64, AppError> {
        if features.len() != self.n_features {
            return Err(AppError::Inference(format!(
                "Feature vector has {} columns, model expects {}",
                features.len(),
                self.n_features
            )));
        }
        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.predict_proba(features)?;
        }
        Ok(total / self.trees.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(probability: f64) -> TreeNode {
        TreeNode::Leaf(Leaf { probability })
    }

    fn split(feature_idx: usize, threshold: f64, left: TreeNode, right: TreeNode) -> TreeNode {
        TreeNode::Node(Node {
            feature_idx,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    #[test]
    fn test_leaf_only_tree() {
        let model = ForestModel {
            n_features: 3,
            trees: vec![DecisionTree { root: leaf(0.42) }],
        };
        let proba = model.predict_proba(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(proba, 0.42);
    }

    #[test]
    fn test_split_goes_left_on_equal() {
        // Left branch covers feature <= threshold, inclusive
        let tree = DecisionTree {
            root: split(0, 5.0, leaf(0.1), leaf(0.9)),
        };
        assert_eq!(tree.predict_proba(&[5.0]).unwrap(), 0.1);
        assert_eq!(tree.predict_proba(&[4.9]).unwrap(), 0.1);
        assert_eq!(tree.predict_proba(&[5.1]).unwrap(), 0.9);
    }

    #[test]
    fn test_forest_averages_trees() {
        let model = ForestModel {
            n_features: 1,
            trees: vec![
                DecisionTree { root: leaf(0.2) },
                DecisionTree { root: leaf(0.4) },
            ],
        };
        let proba = model.predict_proba(&[0.0]).unwrap();
        assert!((proba - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_wrong_width_rejected() {
        let model = ForestModel {
            n_features: 4,
            trees: vec![DecisionTree { root: leaf(0.5) }],
        };
        let err = model.predict_proba(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, AppError::Inference(_)));
    }

    #[test]
    fn test_serde_round_trip() {
        let model = ForestModel {
            n_features: 2,
            trees: vec![DecisionTree {
                root: split(1, 0.5, leaf(0.25), leaf(0.75)),
            }],
        };

        let serialized = serde_json::to_string(&model).unwrap();
        let deserialized: ForestModel = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.n_features, 2);
        assert_eq!(
            deserialized.predict_proba(&[0.0, 0.4]).unwrap(),
            model.predict_proba(&[0.0, 0.4]).unwrap()
        );
    }

    #[test]
    fn test_depth() {
        let root = split(0, 1.0, leaf(0.0), split(0, 2.0, leaf(0.0), leaf(1.0)));
        assert_eq!(root.depth(), 2);
    }
}
