use crate::error::{Result, TrainError};

/// `correct / total × 100`. Fails on an empty dataset instead of yielding NaN.
pub fn accuracy_percent(correct: usize, total: usize) -> Result<f64> {
    if total == 0 {
        return Err(TrainError::EmptyDataset);
    }
    Ok(correct as f64 / total as f64 * 100.0)
}

/// Mean of an accumulated total over `count` items.
pub fn mean(total: f64, count: usize) -> Result<f64> {
    if count == 0 {
        return Err(TrainError::EmptyDataset);
    }
    Ok(total / count as f64)
}
