/// CSV parsing for fruit datasets.
///
/// Supported format:
/// - UTF-8, comma-separated, one `sweetness,color,fruit` row per line
/// - Optional header row (auto-detected: the first row is a header if its
///   feature cells are not numeric)
/// - Double-quoted fields with embedded commas are handled correctly
/// - `fruit` is a name (`Apple`, `banana`, ...) or a class index (`0`-`2`)
use crate::data::fruit::{Fruit, FruitSample};
use crate::error::DataError;

/// Parses CSV text into fruit samples.
pub fn parse_fruit_csv(text: &str) -> Result<Vec<FruitSample>, DataError> {
    let mut lines = text.lines().enumerate().peekable();

    // Auto-detect header.
    if let Some((_, first)) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut samples = Vec::new();

    for (idx, line) in lines {
        let row = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells = parse_csv_row(line);
        if cells.len() != 3 {
            return Err(DataError::Row {
                row,
                message: format!("expected 3 columns (sweetness,color,fruit), got {}", cells.len()),
            });
        }

        let sweetness = parse_float(&cells[0], row)?;
        let color = parse_float(&cells[1], row)?;
        let fruit: Fruit = cells[2].parse()?;
        samples.push(FruitSample::new(sweetness, color, fruit));
    }

    if samples.is_empty() {
        return Err(DataError::NoRows);
    }

    Ok(samples)
}

/// Returns `true` if the row looks like a header (a non-numeric feature cell).
fn is_header(line: &str) -> bool {
    let cells = parse_csv_row(line);
    cells.iter().take(2).any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_float(cell: &str, row: usize) -> Result<f64, DataError> {
    cell.trim().parse::<f64>().map_err(|_| DataError::Row {
        row,
        message: format!("'{}' is not a valid number", cell),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_skipped() {
        let text = "sweetness,color,fruit\n8,1,Apple\n5,9,banana\n";
        let samples = parse_fruit_csv(text).unwrap();
        assert_eq!(samples, vec![
            FruitSample::new(8.0, 1.0, Fruit::Apple),
            FruitSample::new(5.0, 9.0, Fruit::Banana),
        ]);
    }

    #[test]
    fn quoted_fields_and_indices() {
        let samples = parse_fruit_csv("\"7.5\",\"2\",2\n").unwrap();
        assert_eq!(samples, vec![FruitSample::new(7.5, 2.0, Fruit::Orange)]);
    }

    #[test]
    fn bad_rows_report_their_line() {
        match parse_fruit_csv("1,2,Apple\n1,x,Apple\n") {
            Err(DataError::Row { row, .. }) => assert_eq!(row, 2),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(parse_fruit_csv("1,2\n"), Err(DataError::Row { row: 1, .. })));
        assert!(matches!(parse_fruit_csv("1,2,Kiwi\n"), Err(DataError::UnknownFruit(_))));
    }

    #[test]
    fn header_only_has_no_rows() {
        assert!(matches!(parse_fruit_csv("sweetness,color,fruit\n"), Err(DataError::NoRows)));
    }
}
