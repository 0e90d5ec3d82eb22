pub mod half_squared;

pub use half_squared::HalfSquaredError;
