use eyre::Result;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring;
use crate::pairwise::scoring::gaps::Scorer as _;
use crate::pairwise::scoring::symbols::Scorer as _;
use crate::pairwise::Matrix;
use crate::Alignable;

use super::traceback::{self, Dir};

/// Global alignment engine. Holds only the scoring scheme - every call to
/// [`Engine::align`] allocates its own matrices, so a single engine can be
/// shared freely between calls and threads.
pub struct Engine<Scheme: scoring::Scheme> {
    scoring: Scheme,
}

impl<Scheme: scoring::Scheme> Engine<Scheme> {
    pub fn new(scoring: Scheme) -> Self {
        Self { scoring }
    }

    pub fn with_scoring(&mut self, scoring: Scheme) {
        self.scoring = scoring;
    }

    /// Aligns the two sequences end to end and returns the alignment
    /// together with the filled matrix and the traceback path.
    ///
    /// Total for any inputs, empty sequences included. The `Err` arm is
    /// reserved for internal fill/traceback inconsistencies, which no
    /// well-formed scoring scheme can trigger.
    pub fn align<S1, S2>(
        &self,
        seq1: &S1,
        seq2: &S2,
    ) -> Result<Alignment<<Scheme as scoring::Scheme>::Score, <Scheme as scoring::Scheme>::Symbol>>
    where
        <Scheme as scoring::Scheme>::Symbol: Copy,
        S1: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol>,
        S2: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol>,
    {
        let (matrix, dirs) = self.fill(seq1, seq2);
        let (gapped1, gapped2, path) = traceback::walk(seq1, seq2, &dirs)?;

        // The score is read off the matrix corner, never recomputed.
        let score = matrix[(seq1.len(), seq2.len())];
        Ok(Alignment::new(score, gapped1, gapped2, matrix, path))
    }

    fn fill<S1, S2>(&self, seq1: &S1, seq2: &S2) -> (Matrix<<Scheme as scoring::Scheme>::Score>, Matrix<Dir>)
    where
        S1: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol>,
        S2: Alignable<Symbol = <Scheme as scoring::Scheme>::Symbol>,
    {
        let (m, n) = (seq1.len(), seq2.len());
        let zero = <<Scheme as scoring::Scheme>::Score as num::Zero>::zero();
        let mut matrix = Matrix::filled(m + 1, n + 1, zero);
        // Interior cells only; the initial value is overwritten for all of them.
        let mut dirs = Matrix::filled(m, n, Dir::Up);

        // Row 0 and column 0 are all-gap prefix alignments, accumulated one
        // gap at a time.
        for row in 1..=m {
            matrix[(row, 0)] = matrix[(row - 1, 0)] + self.scoring.seq2_gap(row - 1);
        }
        for col in 1..=n {
            matrix[(0, col)] = matrix[(0, col - 1)] + self.scoring.seq1_gap(col - 1);
        }

        for row in 1..=m {
            for col in 1..=n {
                let diag = matrix[(row - 1, col - 1)]
                    + self
                        .scoring
                        .score(row - 1, seq1.at(row - 1), col - 1, seq2.at(col - 1));
                let up = matrix[(row - 1, col)] + self.scoring.seq2_gap(row - 1);
                let left = matrix[(row, col - 1)] + self.scoring.seq1_gap(col - 1);

                // Tie precedence: left, then diagonal, then up.
                let (score, dir) = if left >= diag && left >= up {
                    (left, Dir::Left)
                } else if diag >= up {
                    (diag, Dir::Diagonal)
                } else {
                    (up, Dir::Up)
                };

                matrix[(row, col)] = score;
                dirs[(row - 1, col - 1)] = dir;
            }
        }

        (matrix, dirs)
    }
}
