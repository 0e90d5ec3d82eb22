use serde::{Serialize, Deserialize};

/// Per-epoch statistics yielded by [`Epochs`](crate::train::Epochs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Epoch budget for this run.
    pub total_epochs: usize,
    /// Mean loss over all examples in this epoch.
    pub mean_loss: f64,
    /// `true` when `mean_loss` fell strictly below the goal; this is then the
    /// last epoch of the run.
    pub goal_reached: bool,
}

impl EpochStats {
    pub fn as_pair(&self) -> (usize, f64) {
        (self.epoch, self.mean_loss)
    }
}

/// Everything a finished feedforward run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub epochs: Vec<EpochStats>,
    pub converged: bool,
}

impl TrainReport {
    pub fn epochs_run(&self) -> usize {
        self.epochs.len()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.epochs.last().map(|s| s.mean_loss)
    }
}
