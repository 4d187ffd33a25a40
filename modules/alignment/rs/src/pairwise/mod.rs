pub use alignment::{Alignment, Coord, Gapped};
pub use matrix::Matrix;

pub mod alignment;
mod matrix;
pub mod nw;
pub mod scoring;
