pub mod epoch_stats;
pub mod epochs;
pub mod metrics;
pub mod train_config;

pub use epoch_stats::{EpochStats, TrainReport};
pub use epochs::Epochs;
pub use metrics::accuracy_percent;
pub use train_config::{LinearConfig, TrainConfig};
