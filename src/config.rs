use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::DataError;
use crate::linear::logistic::StepDirection;
use crate::network::propagation::HiddenDerivative;
use crate::train::train_config::{LinearConfig, TrainConfig};

/// Settings for a command-line run. Also defines the config file format;
/// `Option` fields can be omitted and fall back to the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub hidden_size: Option<usize>,
    pub activation: Option<String>,
    pub learning_rate: Option<f64>,
    pub max_epochs: Option<usize>,
    pub goal: Option<f64>,
    /// Gradient-descent passes for the linear models.
    pub iterations: Option<usize>,
    /// Seeds weight initialisation; unset means a fresh random start.
    pub seed: Option<u64>,
    pub hidden_derivative: Option<HiddenDerivative>,
    pub step_direction: Option<StepDirection>,
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<RunConfig, DataError> {
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    // merge configs where the second overwrites the first
    pub fn merge(self, other: Self) -> Self {
        Self {
            hidden_size: other.hidden_size.or(self.hidden_size),
            activation: other.activation.or(self.activation),
            learning_rate: other.learning_rate.or(self.learning_rate),
            max_epochs: other.max_epochs.or(self.max_epochs),
            goal: other.goal.or(self.goal),
            iterations: other.iterations.or(self.iterations),
            seed: other.seed.or(self.seed),
            hidden_derivative: other.hidden_derivative.or(self.hidden_derivative),
            step_direction: other.step_direction.or(self.step_direction),
        }
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size.unwrap_or(4)
    }

    pub fn activation(&self) -> &str {
        self.activation.as_deref().unwrap_or("sigmoid")
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate.unwrap_or(0.1)
    }

    pub fn train_config(&self) -> TrainConfig {
        let defaults = TrainConfig::default();
        TrainConfig::new(
            self.max_epochs.unwrap_or(defaults.max_epochs),
            self.goal.unwrap_or(defaults.goal),
        )
    }

    pub fn linear_config(&self) -> LinearConfig {
        LinearConfig::new(
            self.learning_rate(),
            self.iterations.unwrap_or(LinearConfig::default().iterations),
        )
    }
}
