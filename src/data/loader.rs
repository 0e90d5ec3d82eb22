use std::fs;
use std::path::Path;

use crate::data::csv::parse_fruit_csv;
use crate::data::fruit::FruitSample;
use crate::error::DataError;

/// Loads fruit samples from a `.json` file (an array of samples) or, for any
/// other extension, a CSV file.
pub fn load_samples(path: &Path) -> Result<Vec<FruitSample>, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let is_json = path.extension().map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let samples: Vec<FruitSample> = serde_json::from_str(&text)?;
        if samples.is_empty() {
            return Err(DataError::NoRows);
        }
        Ok(samples)
    } else {
        parse_fruit_csv(&text)
    }
}
