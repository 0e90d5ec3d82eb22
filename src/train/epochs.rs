use tracing::{debug, info};

use crate::data::example::Example;
use crate::error::Result;
use crate::network::feedforward::{FeedforwardTrainer, TrainerState};
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Lazily runs one training epoch per call to `next()`.
///
/// Each item is the mean loss of the epoch just completed. The sequence ends
/// after `config.max_epochs` epochs, after the first epoch whose mean loss is
/// strictly below `config.goal`, or right after an error is yielded.
/// Dropping the iterator early simply stops training.
pub struct Epochs<'a> {
    trainer: &'a mut FeedforwardTrainer,
    dataset: &'a [Example],
    config: TrainConfig,
    completed: usize,
    prev_state: TrainerState,
    done: bool,
}

impl<'a> Epochs<'a> {
    pub(crate) fn new(
        trainer: &'a mut FeedforwardTrainer,
        dataset: &'a [Example],
        config: TrainConfig,
    ) -> Epochs<'a> {
        let prev_state = trainer.state();
        Epochs { trainer, dataset, config, completed: 0, prev_state, done: false }
    }

    fn finish(&mut self) {
        self.done = true;
        if self.trainer.state() == TrainerState::Training {
            let state = if self.completed > 0 { TrainerState::Trained } else { self.prev_state };
            self.trainer.set_state(state);
        }
    }
}

impl Iterator for Epochs<'_> {
    type Item = Result<EpochStats>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.completed >= self.config.max_epochs {
            self.finish();
            return None;
        }

        self.trainer.set_state(TrainerState::Training);
        let mean_loss = match self.trainer.run_epoch(self.dataset) {
            Ok(loss) => loss,
            Err(e) => {
                self.finish();
                return Some(Err(e));
            }
        };
        self.completed += 1;

        let goal_reached = mean_loss < self.config.goal;
        let stats = EpochStats {
            epoch: self.completed,
            total_epochs: self.config.max_epochs,
            mean_loss,
            goal_reached,
        };
        debug!(epoch = stats.epoch, total = stats.total_epochs, mean_loss, "epoch finished");

        if goal_reached {
            info!(epoch = stats.epoch, mean_loss, goal = self.config.goal, "training goal reached");
            self.finish();
        } else if self.completed >= self.config.max_epochs {
            self.finish();
        }

        Some(Ok(stats))
    }
}

impl Drop for Epochs<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}
