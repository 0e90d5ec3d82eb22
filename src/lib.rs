pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod linear;
pub mod train;
pub mod data;
pub mod config;
pub mod error;
pub mod logging;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use network::feedforward::{FeedforwardTrainer, TrainerState};
pub use network::propagation::HiddenDerivative;
pub use linear::logistic::{LinearBinaryTrainer, StepDirection};
pub use linear::one_vs_rest::OneVsRest;
pub use train::{EpochStats, TrainConfig, LinearConfig, TrainReport};
pub use data::{Example, Fruit, FruitSample};
pub use error::{DataError, Result, TrainError};
