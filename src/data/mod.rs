pub mod builtin;
pub mod csv;
pub mod example;
pub mod fruit;
pub mod loader;

pub use builtin::{builtin_fruit, normalized};
pub use csv::parse_fruit_csv;
pub use example::{split_examples, Example};
pub use fruit::{Fruit, FruitSample};
pub use loader::load_samples;
