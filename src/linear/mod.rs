pub mod logistic;
pub mod one_vs_rest;

pub use logistic::{LinearBinaryTrainer, StepDirection};
pub use one_vs_rest::{binarize, OneVsRest};
