//! The serialized classifier artifact.
//!
//! An [`InterestModel`] is a pre-fitted decision tree over the two-column
//! input schema `[Age, Gender]`, persisted as MessagePack. The crate never
//! trains one; an offline pipeline produces the artifact and this module
//! only deserializes and queries it. Leaves carry the class probability
//! distribution, so a single tree walk serves both `predict` and
//! `predict_proba`.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// Structural faults in the artifact surfaced while answering a query.
///
/// These indicate artifact/schema drift rather than bad caller input; the
/// inference engine reports them per-request without retrying.
#[derive(Debug, thiserror::Error)]
pub enum ModelFault {
    #[error("split references feature index {index}, input row has {columns} columns")]
    FeatureOutOfRange { index: usize, columns: usize },
    #[error("leaf distribution has {found} entries, expected {expected} classes")]
    DistributionArity { expected: usize, found: usize },
    #[error("model declares no classes")]
    NoClasses,
}

/// One node of the fitted tree. Split nodes follow the CART convention:
/// rows with `row[feature] <= threshold` descend left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        /// Class probabilities, aligned with [`InterestModel::classes`].
        distribution: Vec<f64>,
    },
}

/// A fitted three-class decision tree, immutable after deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestModel {
    classes: Vec<String>,
    root: TreeNode,
}

impl InterestModel {
    pub fn new(classes: Vec<String>, root: TreeNode) -> Self {
        Self { classes, root }
    }

    /// Class names in training order; probability vectors align with this.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    fn leaf(&self, row: ArrayView1<'_, f64>) -> Result<&[f64], ModelFault> {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = *row.get(*feature).ok_or(ModelFault::FeatureOutOfRange {
                        index: *feature,
                        columns: row.len(),
                    })?;
                    node = if value <= *threshold {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
                TreeNode::Leaf { distribution } => {
                    if distribution.len() != self.classes.len() {
                        return Err(ModelFault::DistributionArity {
                            expected: self.classes.len(),
                            found: distribution.len(),
                        });
                    }
                    return Ok(distribution);
                }
            }
        }
    }

    /// Predicts the class label for a single feature row.
    ///
    /// The label is the argmax of the leaf distribution; ties break to the
    /// lowest class index, matching the behavior of the training stack.
    pub fn predict(&self, row: ArrayView1<'_, f64>) -> Result<&str, ModelFault> {
        let distribution = self.leaf(row)?;
        let best = distribution
            .iter()
            .enumerate()
            .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
            .ok_or(ModelFault::NoClasses)?;
        Ok(&self.classes[best.0])
    }

    /// Probability distribution over [`Self::classes`] for a single row.
    pub fn predict_proba(&self, row: ArrayView1<'_, f64>) -> Result<Vec<f64>, ModelFault> {
        Ok(self.leaf(row)?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn three_classes() -> Vec<String> {
        vec!["Animation".into(), "Action".into(), "Drama".into()]
    }

    fn fixture_tree() -> TreeNode {
        TreeNode::Split {
            feature: 1,
            threshold: 0.5,
            left: Box::new(TreeNode::Leaf {
                distribution: vec![0.7, 0.2, 0.1],
            }),
            right: Box::new(TreeNode::Leaf {
                distribution: vec![0.1, 0.85, 0.05],
            }),
        }
    }

    #[test]
    fn walk_follows_split_threshold() {
        let model = InterestModel::new(three_classes(), fixture_tree());
        assert_eq!(model.predict(array![25.0, 0.0].view()).unwrap(), "Animation");
        assert_eq!(model.predict(array![25.0, 1.0].view()).unwrap(), "Action");
    }

    #[test]
    fn boundary_value_descends_left() {
        let model = InterestModel::new(three_classes(), fixture_tree());
        // Gender exactly at the threshold takes the left branch.
        assert_eq!(model.predict(array![40.0, 0.5].view()).unwrap(), "Animation");
    }

    #[test]
    fn argmax_tie_breaks_to_lowest_index() {
        let model = InterestModel::new(
            three_classes(),
            TreeNode::Leaf {
                distribution: vec![0.4, 0.4, 0.2],
            },
        );
        assert_eq!(model.predict(array![30.0, 0.0].view()).unwrap(), "Animation");
    }

    #[test]
    fn proba_matches_leaf_distribution() {
        let model = InterestModel::new(three_classes(), fixture_tree());
        let proba = model.predict_proba(array![50.0, 1.0].view()).unwrap();
        assert_eq!(proba, vec![0.1, 0.85, 0.05]);
    }

    #[test]
    fn rejects_split_on_missing_feature() {
        let model = InterestModel::new(
            three_classes(),
            TreeNode::Split {
                feature: 7,
                threshold: 1.0,
                left: Box::new(TreeNode::Leaf {
                    distribution: vec![1.0, 0.0, 0.0],
                }),
                right: Box::new(TreeNode::Leaf {
                    distribution: vec![0.0, 1.0, 0.0],
                }),
            },
        );
        let err = model.predict(array![25.0, 0.0].view()).unwrap_err();
        assert!(matches!(
            err,
            ModelFault::FeatureOutOfRange { index: 7, columns: 2 }
        ));
    }

    #[test]
    fn rejects_distribution_arity_mismatch() {
        let model = InterestModel::new(
            three_classes(),
            TreeNode::Leaf {
                distribution: vec![0.5, 0.5],
            },
        );
        let err = model.predict_proba(array![25.0, 0.0].view()).unwrap_err();
        assert!(matches!(
            err,
            ModelFault::DistributionArity {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn survives_msgpack_round_trip() {
        let model = InterestModel::new(three_classes(), fixture_tree());
        let bytes = rmp_serde::to_vec_named(&model).unwrap();
        let restored: InterestModel = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(restored.classes(), model.classes());
        assert_eq!(
            restored.predict(array![25.0, 0.0].view()).unwrap(),
            model.predict(array![25.0, 0.0].view()).unwrap()
        );
    }
}
