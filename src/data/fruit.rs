use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::data::example::Example;
use crate::error::DataError;

/// The three classes of the fruit problem, in output-unit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fruit {
    Apple,
    Banana,
    Orange,
}

impl Fruit {
    pub const ALL: [Fruit; 3] = [Fruit::Apple, Fruit::Banana, Fruit::Orange];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Fruit> {
        Fruit::ALL.get(index).copied()
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Fruit::Apple => "Apple",
            Fruit::Banana => "Banana",
            Fruit::Orange => "Orange",
        };
        f.write_str(name)
    }
}

/// Accepts a case-insensitive name or a class index.
impl FromStr for Fruit {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if let Ok(i) = t.parse::<usize>() {
            return Fruit::from_index(i).ok_or_else(|| DataError::UnknownFruit(t.to_string()));
        }
        match t.to_ascii_lowercase().as_str() {
            "apple" => Ok(Fruit::Apple),
            "banana" => Ok(Fruit::Banana),
            "orange" => Ok(Fruit::Orange),
            _ => Err(DataError::UnknownFruit(t.to_string())),
        }
    }
}

/// A labelled fruit: sweetness and color scores plus its class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FruitSample {
    pub sweetness: f64,
    pub color: f64,
    pub fruit: Fruit,
}

impl FruitSample {
    pub fn new(sweetness: f64, color: f64, fruit: Fruit) -> FruitSample {
        FruitSample { sweetness, color, fruit }
    }

    pub fn features(&self) -> Vec<f64> {
        vec![self.sweetness, self.color]
    }
}

impl From<FruitSample> for Example {
    fn from(s: FruitSample) -> Example {
        Example::new(s.features(), s.fruit.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_indices() {
        assert_eq!("banana".parse::<Fruit>().unwrap(), Fruit::Banana);
        assert_eq!(" Orange ".parse::<Fruit>().unwrap(), Fruit::Orange);
        assert_eq!("0".parse::<Fruit>().unwrap(), Fruit::Apple);
        assert!("3".parse::<Fruit>().is_err());
        assert!("kiwi".parse::<Fruit>().is_err());
    }

    #[test]
    fn sample_becomes_example() {
        let ex: Example = FruitSample::new(7.0, 2.0, Fruit::Orange).into();
        assert_eq!(ex, Example::new(vec![7.0, 2.0], 2));
        assert_eq!(Fruit::from_index(ex.label), Some(Fruit::Orange));
    }
}
