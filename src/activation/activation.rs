use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::str::FromStr;

use crate::error::TrainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
}

impl ActivationFunction {
    /// Resolves a caller-supplied kind such as `"sigmoid"`.
    pub fn from_kind(kind: &str) -> Result<ActivationFunction, TrainError> {
        match kind {
            "sigmoid" => Ok(ActivationFunction::Sigmoid),
            other => Err(TrainError::UnsupportedActivation(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Sigmoid => "sigmoid",
        }
    }

    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => sigmoid(x),
        }
    }

    /// Derivative of the activation, evaluated at `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = TrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivationFunction::from_kind(s)
    }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}
