use eyre::{ensure, Result};

use crate::pairwise::alignment::{Coord, Gapped};
use crate::pairwise::Matrix;
use crate::Alignable;

/// The operation that produced a cell's score. Decided once, while the
/// matrix is filled; the traceback is a plain table lookup and never
/// re-derives score comparisons.
///
/// On ties the fill step picks `Left` over `Diagonal` over `Up`. The order
/// carries no deeper meaning, but it is contractual: it is what makes the
/// reconstructed alignment reproducible when several alignments share the
/// optimal score.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    /// Horizontal move: a gap in the first sequence.
    Left,
    /// Diagonal move: the two symbols are aligned to each other.
    Diagonal,
    /// Vertical move: a gap in the second sequence.
    Up,
}

impl Dir {
    /// Single-character rendering, useful when dumping the direction table.
    pub fn symbol(&self) -> char {
        match self {
            Dir::Left => '<',
            Dir::Diagonal => '\\',
            Dir::Up => '^',
        }
    }
}

/// Walks the direction table from the bottom-right corner back to the
/// origin, rebuilding the gapped sequences and recording every visited
/// cell. The returned sequences and path are in forward order.
///
/// `dirs` covers interior cells only: entry (i, j) holds the direction for
/// matrix cell (i + 1, j + 1). Cells on the boundary rows need no stored
/// direction - their move is forced by the edge.
pub(super) fn walk<S1, S2, Smb>(
    seq1: &S1,
    seq2: &S2,
    dirs: &Matrix<Dir>,
) -> Result<(Vec<Gapped<Smb>>, Vec<Gapped<Smb>>, Vec<Coord>)>
where
    Smb: Copy,
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
{
    let (m, n) = (seq1.len(), seq2.len());
    let mut gapped1 = Vec::with_capacity(m + n);
    let mut gapped2 = Vec::with_capacity(m + n);
    let mut path = Vec::with_capacity(m + n + 1);

    let (mut row, mut col) = (m, n);
    while row > 0 || col > 0 {
        // Every step consumes at least one symbol, so a longer walk means
        // the fill and the traceback have diverged.
        ensure!(
            path.len() < m + n,
            "traceback did not reach the origin after {} steps, stuck at ({}, {})",
            m + n,
            row,
            col
        );
        path.push(Coord::new(row, col));

        let dir = if row == 0 {
            Dir::Left
        } else if col == 0 {
            Dir::Up
        } else {
            dirs[(row - 1, col - 1)]
        };

        match dir {
            Dir::Left => {
                gapped1.push(Gapped::Gap);
                gapped2.push(Gapped::Symbol(*seq2.at(col - 1)));
                col -= 1;
            }
            Dir::Diagonal => {
                gapped1.push(Gapped::Symbol(*seq1.at(row - 1)));
                gapped2.push(Gapped::Symbol(*seq2.at(col - 1)));
                row -= 1;
                col -= 1;
            }
            Dir::Up => {
                gapped1.push(Gapped::Symbol(*seq1.at(row - 1)));
                gapped2.push(Gapped::Gap);
                row -= 1;
            }
        }
    }
    path.push(Coord::new(0, 0));

    gapped1.reverse();
    gapped2.reverse();
    path.reverse();
    Ok((gapped1, gapped2, path))
}
