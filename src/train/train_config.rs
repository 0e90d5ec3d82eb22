use serde::{Serialize, Deserialize};

/// Stopping rule for the feedforward training loop.
///
/// # Fields
/// - `max_epochs` — upper bound on full passes over the dataset
/// - `goal`       — training stops after the first epoch whose mean loss is
///                  strictly below this value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub max_epochs: usize,
    pub goal: f64,
}

impl TrainConfig {
    pub fn new(max_epochs: usize, goal: f64) -> Self {
        TrainConfig { max_epochs, goal }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig { max_epochs: 1000, goal: 0.01 }
    }
}

/// Hyperparameters for batch gradient descent on a linear binary model.
/// The loop always runs exactly `iterations` passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearConfig {
    pub learning_rate: f64,
    pub iterations: usize,
}

impl LinearConfig {
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        LinearConfig { learning_rate, iterations }
    }
}

impl Default for LinearConfig {
    fn default() -> Self {
        LinearConfig { learning_rate: 0.1, iterations: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: TrainConfig = serde_json::from_str(r#"{ "max_epochs": 50 }"#).unwrap();
        assert_eq!(cfg, TrainConfig::new(50, 0.01));

        let lin: LinearConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(lin, LinearConfig::default());
    }
}
