use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{Result, TrainError};
use crate::loss::half_squared::HalfSquaredError;
use crate::network::params::NetworkParams;

/// Where the hidden-layer activation derivative is evaluated during backprop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenDerivative {
    /// At the hidden layer's activations: the derivative function is applied
    /// to the sigmoid outputs themselves, giving `σ'(h) = σ(h)(1 - σ(h))`.
    #[default]
    Activations,
    /// At the raw input feature with the same index as the hidden unit.
    /// Only defined while `hidden_size <= input_size`.
    RawInput,
}

/// Values produced by one forward pass, kept for the backward pass and the
/// update that follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    pub input: Vec<f64>,
    pub hidden: Vec<f64>,
    pub output: Vec<f64>,
}

/// Per-layer deltas produced by one backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BackwardPass {
    pub output_delta: Vec<f64>,
    pub hidden_delta: Vec<f64>,
}

/// `hidden = act(input · W_ih + b_h)`, `output = act(hidden · W_ho + b_o)`.
///
/// # Panics
/// Panics if `input.len()` differs from the network's input size.
pub fn forward(
    params: &NetworkParams,
    activation: ActivationFunction,
    input: &[f64],
) -> ForwardPass {
    let hidden = layer(input, params, Layer::Hidden, activation);
    let output = layer(&hidden, params, Layer::Output, activation);
    ForwardPass { input: input.to_vec(), hidden, output }
}

/// Deltas for both layers against the one-hot encoding of `target`.
///
/// The output delta is `(output - onehot) ⊙ act'(output)`; it is carried back
/// through `W_ho` and scaled by `act'` at the point chosen by `policy`.
///
/// # Panics
/// Panics if `target` is not below the output size.
pub fn backward(
    params: &NetworkParams,
    activation: ActivationFunction,
    pass: &ForwardPass,
    target: usize,
    policy: HiddenDerivative,
) -> Result<BackwardPass> {
    let output_error = HalfSquaredError::derivative_for_class(&pass.output, target);
    let output_delta: Vec<f64> = output_error.iter().zip(&pass.output)
        .map(|(e, o)| e * activation.derivative(*o))
        .collect();

    let hidden_error = params.weights_hidden_output.mul_vec(&output_delta);
    let at: &[f64] = match policy {
        HiddenDerivative::Activations => &pass.hidden,
        HiddenDerivative::RawInput => {
            if pass.input.len() < hidden_error.len() {
                return Err(TrainError::DimensionMismatch {
                    expected: hidden_error.len(),
                    got: pass.input.len(),
                });
            }
            &pass.input
        }
    };
    let hidden_delta = hidden_error.iter().zip(at)
        .map(|(e, x)| e * activation.derivative(*x))
        .collect();

    Ok(BackwardPass { output_delta, hidden_delta })
}

enum Layer {
    Hidden,
    Output,
}

fn layer(
    input: &[f64],
    params: &NetworkParams,
    which: Layer,
    activation: ActivationFunction,
) -> Vec<f64> {
    let (weights, bias) = match which {
        Layer::Hidden => (&params.weights_input_hidden, &params.bias_hidden),
        Layer::Output => (&params.weights_hidden_output, &params.bias_output),
    };
    weights.left_mul(input).into_iter()
        .zip(bias)
        .map(|(z, b)| activation.function(z + b))
        .collect()
}
