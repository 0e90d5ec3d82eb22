use serde::{Serialize, Deserialize};

use crate::activation::activation::sigmoid;
use crate::error::{Result, TrainError};
use crate::math::vector::dot;
use crate::train::train_config::LinearConfig;

/// Direction of the weight step, given `error = label - score` and
/// `gradient[j] = Σ_i error[i] · x[i][j]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    /// `w += lr · gradient`: scores move toward the labels.
    #[default]
    TowardLabels,
    /// `w -= lr · gradient`: the literal subtraction, which pushes scores
    /// away from the labels. Kept for comparison runs.
    AwayFromLabels,
}

/// Binary logistic regression fitted by full-batch gradient descent.
///
/// Every row of `features` must have the same width, and prediction must use
/// that width too. Mismatched widths panic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearBinaryTrainer {
    weights: Vec<f64>,
    step: StepDirection,
}

impl LinearBinaryTrainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step_direction(mut self, step: StepDirection) -> Self {
        self.step = step;
        self
    }

    /// Empty until the first `train` call.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn step_direction(&self) -> StepDirection {
        self.step
    }

    /// Resets the weights to zero and runs exactly `iterations` batch
    /// gradient-descent passes. `labels` must be `0` or `1`.
    ///
    /// # Panics
    /// Panics if `labels.len() != features.len()` or rows differ in width.
    pub fn train(
        &mut self,
        features: &[Vec<f64>],
        labels: &[usize],
        learning_rate: f64,
        iterations: usize,
    ) -> Result<()> {
        let width = features.first().ok_or(TrainError::EmptyDataset)?.len();
        assert_eq!(features.len(), labels.len(), "features and labels must have equal length");

        self.weights = vec![0.0; width];
        let sign = match self.step {
            StepDirection::TowardLabels => 1.0,
            StepDirection::AwayFromLabels => -1.0,
        };

        for _ in 0..iterations {
            let scores = self.predict_probabilities(features);
            let errors: Vec<f64> = labels.iter().zip(&scores)
                .map(|(&y, s)| y as f64 - s)
                .collect();
            let gradients = gradients(features, &errors, width);

            for (w, g) in self.weights.iter_mut().zip(&gradients) {
                *w += sign * learning_rate * g;
            }
        }
        Ok(())
    }

    pub fn train_with(&mut self, features: &[Vec<f64>], labels: &[usize], config: LinearConfig) -> Result<()> {
        self.train(features, labels, config.learning_rate, config.iterations)
    }

    /// `sigmoid(x · w)` for each row.
    pub fn predict_probabilities(&self, features: &[Vec<f64>]) -> Vec<f64> {
        features.iter()
            .map(|x| sigmoid(dot(&self.weights, x)))
            .collect()
    }

    /// `1` where the probability is at least `0.5`, else `0`.
    pub fn predict(&self, features: &[Vec<f64>]) -> Vec<usize> {
        self.predict_probabilities(features).into_iter()
            .map(|p| usize::from(p >= 0.5))
            .collect()
    }
}

/// `gradient[j] = Σ_i errors[i] · features[i][j]`
fn gradients(features: &[Vec<f64>], errors: &[f64], width: usize) -> Vec<f64> {
    let mut grad = vec![0.0; width];
    for (row, e) in features.iter().zip(errors) {
        assert_eq!(row.len(), width, "Vectors are of incorrect sizes");
        for (g, x) in grad.iter_mut().zip(row) {
            *g += e * x;
        }
    }
    grad
}
