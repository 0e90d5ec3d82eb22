pub mod feedforward;
pub mod params;
pub mod propagation;

pub use feedforward::{FeedforwardTrainer, TrainerState, INPUT_SIZE, OUTPUT_SIZE};
pub use params::{apply_update, NetworkParams};
pub use propagation::{backward, forward, BackwardPass, ForwardPass, HiddenDerivative};
