use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;
use crate::network::propagation::{BackwardPass, ForwardPass};

/// Every trainable parameter of the one-hidden-layer network.
///
/// Shapes are fixed when the value is built and no update ever resizes them:
/// - `weights_input_hidden`:  `input_size × hidden_size`
/// - `bias_hidden`:           `hidden_size`
/// - `weights_hidden_output`: `hidden_size × output_size`
/// - `bias_output`:           `output_size`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkParams {
    pub weights_input_hidden: Matrix,
    pub bias_hidden: Vec<f64>,
    pub weights_hidden_output: Matrix,
    pub bias_output: Vec<f64>,
}

impl NetworkParams {
    /// Draws every weight and bias independently from `[-0.5, 0.5)`.
    pub fn random<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> NetworkParams {
        let weights_input_hidden = Matrix::uniform(input_size, hidden_size, rng);
        let bias_hidden = Matrix::uniform(1, hidden_size, rng).data.remove(0);
        let weights_hidden_output = Matrix::uniform(hidden_size, output_size, rng);
        let bias_output = Matrix::uniform(1, output_size, rng).data.remove(0);

        NetworkParams {
            weights_input_hidden,
            bias_hidden,
            weights_hidden_output,
            bias_output,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights_input_hidden.rows
    }

    pub fn hidden_size(&self) -> usize {
        self.weights_input_hidden.cols
    }

    pub fn output_size(&self) -> usize {
        self.weights_hidden_output.cols
    }
}

/// One online SGD step. Returns the stepped parameters and leaves `params`
/// untouched.
///
/// Each weight moves by `lr · delta[j] · upstream[i]`, where the upstream
/// activation is the hidden output for the second layer and the raw input
/// for the first. Every bias of a layer moves by `lr · Σ delta` of that layer.
pub fn apply_update(
    params: &NetworkParams,
    pass: &ForwardPass,
    deltas: &BackwardPass,
    lr: f64,
) -> NetworkParams {
    let hidden_shift = lr * deltas.hidden_delta.iter().sum::<f64>();
    let output_shift = lr * deltas.output_delta.iter().sum::<f64>();

    NetworkParams {
        weights_input_hidden: params.weights_input_hidden
            .outer_step(&pass.input, &deltas.hidden_delta, lr),
        bias_hidden: params.bias_hidden.iter().map(|b| b - hidden_shift).collect(),
        weights_hidden_output: params.weights_hidden_output
            .outer_step(&pass.hidden, &deltas.output_delta, lr),
        bias_output: params.bias_output.iter().map(|b| b - output_shift).collect(),
    }
}
