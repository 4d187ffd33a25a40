pub use alignment::Alignment;
pub use coord::Coord;
pub use gapped::Gapped;

pub mod alignment;
mod coord;
mod gapped;
