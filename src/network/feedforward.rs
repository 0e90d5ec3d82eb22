use rand::Rng;
use serde::{Serialize, Deserialize};
use tracing::info;

use crate::activation::activation::ActivationFunction;
use crate::data::example::Example;
use crate::error::{Result, TrainError};
use crate::loss::half_squared::HalfSquaredError;
use crate::math::vector::argmax;
use crate::network::params::{apply_update, NetworkParams};
use crate::network::propagation::{backward, forward, BackwardPass, ForwardPass, HiddenDerivative};
use crate::train::epoch_stats::TrainReport;
use crate::train::epochs::Epochs;
use crate::train::metrics::{accuracy_percent, mean};
use crate::train::train_config::TrainConfig;

/// Number of input features: sweetness and color.
pub const INPUT_SIZE: usize = 2;
/// Number of output classes: apple, banana, orange.
pub const OUTPUT_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainerState {
    Untrained,
    Training,
    Trained,
}

/// A 2 → hidden → 3 sigmoid network trained by online backpropagation.
///
/// Feature vectors passed to any method must have exactly [`INPUT_SIZE`]
/// entries and labels must be below [`OUTPUT_SIZE`]; either violation panics.
#[derive(Debug, Clone)]
pub struct FeedforwardTrainer {
    params: NetworkParams,
    activation: String,
    learning_rate: f64,
    hidden_derivative: HiddenDerivative,
    state: TrainerState,
}

impl FeedforwardTrainer {
    /// Builds a trainer with weights drawn from the thread-local RNG.
    ///
    /// `activation` is only checked when the network is evaluated, so an
    /// unknown kind surfaces as [`TrainError::UnsupportedActivation`] from
    /// `forward`, `train`, `predict` and `evaluate`.
    pub fn new(hidden_size: usize, activation: impl Into<String>, learning_rate: f64) -> Self {
        Self::with_rng(hidden_size, activation, learning_rate, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        hidden_size: usize,
        activation: impl Into<String>,
        learning_rate: f64,
        rng: &mut R,
    ) -> Self {
        FeedforwardTrainer {
            params: NetworkParams::random(INPUT_SIZE, hidden_size, OUTPUT_SIZE, rng),
            activation: activation.into(),
            learning_rate,
            hidden_derivative: HiddenDerivative::default(),
            state: TrainerState::Untrained,
        }
    }

    pub fn with_hidden_derivative(mut self, policy: HiddenDerivative) -> Self {
        self.hidden_derivative = policy;
        self
    }

    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    pub fn hidden_size(&self) -> usize {
        self.params.hidden_size()
    }

    pub fn activation_kind(&self) -> &str {
        &self.activation
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn hidden_derivative(&self) -> HiddenDerivative {
        self.hidden_derivative
    }

    pub fn state(&self) -> TrainerState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: TrainerState) {
        self.state = state;
    }

    fn activation(&self) -> Result<ActivationFunction> {
        ActivationFunction::from_kind(&self.activation)
    }

    /// Output-layer activations for `input`, one value per class.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        Ok(self.forward_pass(input)?.output)
    }

    /// Forward pass keeping the hidden activations for backprop.
    pub fn forward_pass(&self, input: &[f64]) -> Result<ForwardPass> {
        Ok(forward(&self.params, self.activation()?, input))
    }

    /// Half squared error of `output` against the one-hot vector of `target`.
    ///
    /// # Panics
    /// Panics if `target >= output.len()`.
    pub fn loss(output: &[f64], target: usize) -> f64 {
        HalfSquaredError::loss_for_class(output, target)
    }

    pub fn backward(&self, pass: &ForwardPass, target: usize) -> Result<BackwardPass> {
        backward(&self.params, self.activation()?, pass, target, self.hidden_derivative)
    }

    /// Forward, backward and update for a single example. Returns the
    /// example's loss measured before the update.
    pub fn step(&mut self, example: &Example) -> Result<f64> {
        let pass = self.forward_pass(&example.features)?;
        let loss = Self::loss(&pass.output, example.label);
        let deltas = self.backward(&pass, example.label)?;
        self.params = apply_update(&self.params, &pass, &deltas, self.learning_rate);
        Ok(loss)
    }

    /// One online pass over `dataset` in order. Returns the mean loss.
    pub(crate) fn run_epoch(&mut self, dataset: &[Example]) -> Result<f64> {
        if dataset.is_empty() {
            return Err(TrainError::EmptyDataset);
        }
        let mut total = 0.0;
        for example in dataset {
            total += self.step(example)?;
        }
        mean(total, dataset.len())
    }

    /// Lazy training run: each item is one completed epoch.
    pub fn epochs<'a>(&'a mut self, dataset: &'a [Example], config: TrainConfig) -> Epochs<'a> {
        Epochs::new(self, dataset, config)
    }

    /// Trains for at most `max_epochs` epochs, stopping after the first epoch
    /// whose mean loss is strictly below `goal`.
    pub fn train(&mut self, dataset: &[Example], max_epochs: usize, goal: f64) -> Result<TrainReport> {
        self.train_with(dataset, TrainConfig::new(max_epochs, goal))
    }

    pub fn train_with(&mut self, dataset: &[Example], config: TrainConfig) -> Result<TrainReport> {
        let epochs = self.epochs(dataset, config).collect::<Result<Vec<_>>>()?;
        let converged = epochs.last().map_or(false, |s| s.goal_reached);
        let report = TrainReport { epochs, converged };
        if let Some(loss) = report.final_loss() {
            info!(epochs = report.epochs_run(), final_loss = loss, converged, "training finished");
        }
        Ok(report)
    }

    /// Index of the highest output; ties go to the lowest index.
    pub fn predict(&self, input: &[f64]) -> Result<usize> {
        Ok(argmax(&self.forward(input)?))
    }

    /// Percentage of examples whose prediction matches the label.
    pub fn evaluate(&self, dataset: &[Example]) -> Result<f64> {
        let mut correct = 0;
        for example in dataset {
            if self.predict(&example.features)? == example.label {
                correct += 1;
            }
        }
        accuracy_percent(correct, dataset.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn trainer(hidden: usize, lr: f64) -> FeedforwardTrainer {
        FeedforwardTrainer::with_rng(hidden, "sigmoid", lr, &mut StdRng::seed_from_u64(42))
    }

    fn dataset() -> Vec<Example> {
        vec![
            Example::new(vec![0.9, 0.1], 0),
            Example::new(vec![0.1, 0.9], 1),
            Example::new(vec![0.5, 0.5], 2),
        ]
    }

    #[test]
    fn new_trainer_is_untrained() {
        let t = trainer(4, 0.1);
        assert_eq!(t.state(), TrainerState::Untrained);
        assert_eq!(t.hidden_size(), 4);
        assert_eq!(t.hidden_derivative(), HiddenDerivative::Activations);
    }

    #[test]
    fn unknown_activation_fails_on_use_not_construction() {
        let t = FeedforwardTrainer::new(3, "tanh", 0.1);
        assert_eq!(t.forward(&[0.0, 0.0]), Err(TrainError::UnsupportedActivation("tanh".into())));
        assert!(t.predict(&[0.0, 0.0]).is_err());
    }

    #[test]
    fn zero_epochs_leaves_params_untouched() {
        let mut t = trainer(4, 0.1);
        let before = t.params().clone();
        let report = t.train(&dataset(), 0, 0.01).unwrap();
        assert_eq!(report.epochs_run(), 0);
        assert!(!report.converged);
        assert_eq!(t.params(), &before);
        assert_eq!(t.state(), TrainerState::Untrained);
    }

    #[test]
    fn training_marks_state_trained() {
        let mut t = trainer(4, 0.1);
        t.train(&dataset(), 3, 0.0).unwrap();
        assert_eq!(t.state(), TrainerState::Trained);
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let mut t = trainer(4, 0.1);
        assert_eq!(t.train(&[], 5, 0.01), Err(TrainError::EmptyDataset));
        assert_eq!(t.evaluate(&[]), Err(TrainError::EmptyDataset));
        assert_eq!(t.state(), TrainerState::Untrained);
    }

    #[test]
    fn goal_stops_training_early() {
        let mut t = trainer(4, 0.1);
        // Any finite loss is below an infinite goal.
        let report = t.train(&dataset(), 50, f64::INFINITY).unwrap();
        assert_eq!(report.epochs_run(), 1);
        assert!(report.converged);
    }

    #[test]
    fn step_changes_parameters() {
        let mut t = trainer(2, 0.5);
        let before = t.params().clone();
        let loss = t.step(&dataset()[0]).unwrap();
        assert!(loss > 0.0);
        assert_ne!(t.params(), &before);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn label_past_the_last_class_panics() {
        let mut t = trainer(4, 0.1);
        let _ = t.train(&[Example::new(vec![0.2, 0.3], 7)], 3, 0.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn loss_rejects_out_of_range_target() {
        FeedforwardTrainer::loss(&[0.2, 0.3, 0.4], 7);
    }

    #[test]
    fn epochs_are_lazy() {
        let mut t = trainer(4, 0.1);
        let first: Vec<_> = t.epochs(&dataset(), TrainConfig::new(100, 0.0)).take(2).collect();
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].as_ref().unwrap().epoch, 2);
        assert_eq!(t.state(), TrainerState::Trained);
    }
}
