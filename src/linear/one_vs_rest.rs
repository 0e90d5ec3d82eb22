use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::error::Result;
use crate::linear::logistic::{LinearBinaryTrainer, StepDirection};
use crate::math::vector::argmax;
use crate::train::metrics::accuracy_percent;
use crate::train::train_config::LinearConfig;

/// Multi-class classifier built from one binary model per class.
///
/// Model `c` is trained on labels binarized as `1` for class `c` and `0` for
/// every other class. The models share nothing and are trained independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneVsRest {
    models: Vec<LinearBinaryTrainer>,
}

impl OneVsRest {
    /// # Panics
    /// Panics if `n_classes` is zero.
    pub fn new(n_classes: usize) -> Self {
        assert!(n_classes > 0, "one-vs-rest needs at least one class");
        OneVsRest { models: vec![LinearBinaryTrainer::new(); n_classes] }
    }

    pub fn with_step_direction(self, step: StepDirection) -> Self {
        OneVsRest {
            models: self.models.into_iter().map(|m| m.with_step_direction(step)).collect(),
        }
    }

    pub fn n_classes(&self) -> usize {
        self.models.len()
    }

    pub fn models(&self) -> &[LinearBinaryTrainer] {
        &self.models
    }

    /// Trains every per-class model on `features` against its binarized view
    /// of `labels`.
    ///
    /// # Panics
    /// Panics if `labels.len() != features.len()`.
    pub fn train(&mut self, features: &[Vec<f64>], labels: &[usize], config: LinearConfig) -> Result<()> {
        assert_eq!(features.len(), labels.len(), "features and labels must have equal length");
        for (class, model) in self.models.iter_mut().enumerate() {
            let binary = binarize(labels, class);
            let positives = binary.iter().filter(|&&y| y == 1).count();
            model.train_with(features, &binary, config)?;
            debug!(class, positives, weights = ?model.weights(), "one-vs-rest model trained");
        }
        Ok(())
    }

    /// Per-example vector of per-class probabilities.
    pub fn predict_probabilities(&self, features: &[Vec<f64>]) -> Vec<Vec<f64>> {
        let per_class: Vec<Vec<f64>> = self.models.iter()
            .map(|m| m.predict_probabilities(features))
            .collect();
        (0..features.len())
            .map(|i| per_class.iter().map(|scores| scores[i]).collect())
            .collect()
    }

    /// Class with the highest probability; ties go to the lowest class index.
    pub fn predict(&self, features: &[Vec<f64>]) -> Vec<usize> {
        self.predict_probabilities(features).iter()
            .map(|scores| argmax(scores))
            .collect()
    }

    /// # Panics
    /// Panics if `labels.len() != features.len()`.
    pub fn evaluate(&self, features: &[Vec<f64>], labels: &[usize]) -> Result<f64> {
        assert_eq!(features.len(), labels.len(), "features and labels must have equal length");
        let correct = self.predict(features).iter().zip(labels)
            .filter(|(p, y)| p == y)
            .count();
        accuracy_percent(correct, labels.len())
    }
}

/// `1` where the label equals `class`, `0` elsewhere.
pub fn binarize(labels: &[usize], class: usize) -> Vec<usize> {
    labels.iter().map(|&y| usize::from(y == class)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrainError;

    #[test]
    fn binarize_marks_only_the_class() {
        assert_eq!(binarize(&[0, 1, 2, 1], 1), vec![0, 1, 0, 1]);
    }

    #[test]
    fn one_model_per_class() {
        let ovr = OneVsRest::new(3);
        assert_eq!(ovr.n_classes(), 3);
        assert!(ovr.models().iter().all(|m| m.weights().is_empty()));
    }

    #[test]
    fn separates_axis_aligned_classes() {
        let features = vec![
            vec![1.0, 0.0, 0.0],
            vec![0.9, 0.1, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.1, 0.9, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 0.1, 0.9],
        ];
        let labels = vec![0, 0, 1, 1, 2, 2];
        let mut ovr = OneVsRest::new(3);
        ovr.train(&features, &labels, LinearConfig::new(0.5, 200)).unwrap();
        assert_eq!(ovr.predict(&features), labels);
        assert_eq!(ovr.evaluate(&features, &labels), Ok(100.0));
    }

    #[test]
    #[should_panic(expected = "at least one class")]
    fn zero_classes_are_rejected() {
        OneVsRest::new(0);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn evaluate_needs_one_label_per_row() {
        let features = vec![vec![1.0, 0.0]];
        let labels = vec![0];
        let mut ovr = OneVsRest::new(3);
        ovr.train(&features, &labels, LinearConfig::default()).unwrap();
        let _ = ovr.evaluate(&features, &[0, 1]);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn train_needs_one_label_per_row() {
        let mut ovr = OneVsRest::new(2);
        let _ = ovr.train(&[vec![1.0], vec![2.0]], &[1], LinearConfig::default());
    }

    #[test]
    fn evaluate_rejects_empty_input() {
        let ovr = OneVsRest::new(2);
        assert_eq!(ovr.evaluate(&[], &[]), Err(TrainError::EmptyDataset));
    }
}
