use crate::math::vector::one_hot;

/// Half squared error summed over the output units: `Σ 0.5·(p - y)²`.
pub struct HalfSquaredError;

impl HalfSquaredError {
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| 0.5 * (p - y).powi(2))
            .sum::<f64>()
    }

    /// Per-output gradient: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| p - y)
            .collect()
    }

    /// Loss against the one-hot vector for `target`. Unit `target`
    /// contributes `0.5·(p - 1)²`, every other unit `0.5·p²`.
    pub fn loss_for_class(predicted: &[f64], target: usize) -> f64 {
        Self::loss(predicted, &one_hot(target, predicted.len()))
    }

    /// `p - 1` at `target`, `p` elsewhere.
    pub fn derivative_for_class(predicted: &[f64], target: usize) -> Vec<f64> {
        Self::derivative(predicted, &one_hot(target, predicted.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_loss_matches_one_hot_loss() {
        let out = [0.2, 0.9, 0.4];
        let expected = 0.5 * 0.04 + 0.5 * 0.01 + 0.5 * 0.16;
        assert!((HalfSquaredError::loss_for_class(&out, 1) - expected).abs() < 1e-12);
    }

    #[test]
    fn class_derivative_subtracts_one_at_target() {
        let d = HalfSquaredError::derivative_for_class(&[0.25, 0.5, 0.75], 2);
        assert_eq!(d, vec![0.25, 0.5, -0.25]);
    }

    #[test]
    fn perfect_prediction_has_zero_loss() {
        assert_eq!(HalfSquaredError::loss_for_class(&[0.0, 1.0, 0.0], 1), 0.0);
    }
}
