use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::pairwise::Matrix;
use crate::Score;

use super::{Coord, Gapped};

/// A global alignment between two sequences.
///
/// Besides the gapped sequences and the optimal score, the full scoring
/// matrix and the traceback path are kept so that callers can inspect or
/// visualize how the score was reached. The score always equals the
/// bottom-right matrix cell.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve)]
pub struct Alignment<S: Score, Smb> {
    score: S,
    seq1: Vec<Gapped<Smb>>,
    seq2: Vec<Gapped<Smb>>,
    matrix: Matrix<S>,
    path: Vec<Coord>,
}

impl<S: Score, Smb> Alignment<S, Smb> {
    /// Number of columns in the gapped alignment.
    /// Both gapped sequences are guaranteed to have this length.
    pub fn len(&self) -> usize {
        self.seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq1.is_empty()
    }
}

impl<S: Score, Smb: Copy> Alignment<S, Smb> {
    /// The first input sequence, recovered by dropping gap columns.
    pub fn ungapped_seq1(&self) -> Vec<Smb> {
        self.seq1.iter().filter_map(|x| x.symbol().copied()).collect()
    }

    /// The second input sequence, recovered by dropping gap columns.
    pub fn ungapped_seq2(&self) -> Vec<Smb> {
        self.seq2.iter().filter_map(|x| x.symbol().copied()).collect()
    }
}

impl<S: Score, Smb: Copy + Into<char>> Alignment<S, Smb> {
    /// Renders both gapped sequences, with `-` as the gap marker.
    pub fn to_strings(&self) -> (String, String) {
        let render = |seq: &[Gapped<Smb>]| seq.iter().map(|x| x.to_char()).collect();
        (render(&self.seq1), render(&self.seq2))
    }
}
