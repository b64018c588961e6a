pub mod matrix;
pub mod rescale;

pub use matrix::Matrix;
pub use rescale::{rescale, Range};
