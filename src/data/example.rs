use serde::{Serialize, Deserialize};

/// One labelled feature vector. For the feedforward network `label` is a
/// class index; for a binary model it is `0` or `1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub features: Vec<f64>,
    pub label: usize,
}

impl Example {
    pub fn new(features: Vec<f64>, label: usize) -> Example {
        Example { features, label }
    }
}

/// Splits examples into the parallel `(features, labels)` form the linear
/// trainers take.
pub fn split_examples(examples: &[Example]) -> (Vec<Vec<f64>>, Vec<usize>) {
    examples.iter()
        .map(|ex| (ex.features.clone(), ex.label))
        .unzip()
}
