mod matrix;
pub use matrix::*;
