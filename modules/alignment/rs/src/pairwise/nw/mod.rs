//! Global (end-to-end) pairwise alignment with linear gap penalties,
//! i.e. the classic Needleman-Wunsch algorithm. The returned alignment
//! carries the full scoring matrix and the traceback path alongside the
//! gapped sequences, so downstream code can show *how* the optimal score
//! was reached.

pub use engine::Engine;
pub use traceback::Dir;

mod engine;
mod traceback;

use eyre::Result;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::{self, gaps, symbols};
use crate::{Alignable, Score};

/// One-shot global alignment with flat match/mismatch scores and a linear
/// gap penalty.
pub fn align<S, Smb, S1, S2>(
    seq1: &S1,
    seq2: &S2,
    match_score: S,
    mismatch_score: S,
    gap_score: S,
) -> Result<Alignment<S, Smb>>
where
    S: Score,
    Smb: Copy + PartialEq,
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
{
    let engine = Engine::new(scoring::compose(
        symbols::Equality::new(match_score, mismatch_score),
        gaps::Linear::new(gap_score),
    ));
    engine.align(seq1, seq2)
}
