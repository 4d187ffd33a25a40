use derive_getters::Dissolve;
use derive_more::{Constructor, From, Into};

/// A single (row, col) cell coordinate in the alignment matrix.
/// Row `i` corresponds to the length-`i` prefix of the first sequence,
/// column `j` to the length-`j` prefix of the second one.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Debug,
    Hash,
    Default,
    Constructor,
    Dissolve,
    From,
    Into,
)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Componentwise difference to the next cell on a forward path.
    /// Valid alignment paths only ever step by (1, 1), (1, 0) or (0, 1).
    pub fn step_to(&self, next: &Coord) -> (usize, usize) {
        (
            next.row.saturating_sub(self.row),
            next.col.saturating_sub(self.col),
        )
    }
}
