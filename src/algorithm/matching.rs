//! Exact pixelwise matching over a candidate set

use crate::algorithm::selection::{Candidate, CandidateSet};
use crate::color::{Pixel, pixel_distance};
use ndarray::ArrayView2;

/// Winning candidate with its full pixel distance
#[derive(Debug, Clone, Copy)]
pub struct Match<'t> {
    /// The chosen candidate
    pub candidate: Candidate<'t>,
    /// Summed pixel distance to the target region
    pub distance: u64,
}

/// Summed pixel distance over the overlap of two matrices
///
/// Only positions inside both matrices contribute, which tolerates a target
/// clipped at the image border.
pub fn region_distance(a: ArrayView2<'_, Pixel>, b: ArrayView2<'_, Pixel>) -> u64 {
    a.rows()
        .into_iter()
        .zip(b.rows())
        .map(|(row_a, row_b)| {
            row_a
                .iter()
                .zip(row_b.iter())
                .map(|(&pa, &pb)| u64::from(pixel_distance(pa, pb)))
                .sum::<u64>()
        })
        .sum()
}

/// Candidate with the smallest full pixel distance to `target`
///
/// The first candidate in set order wins ties. Returns `None` for an empty set.
pub fn best_match<'t>(
    target: ArrayView2<'_, Pixel>,
    candidates: &CandidateSet<'t>,
) -> Option<Match<'t>> {
    let mut best: Option<Match<'t>> = None;

    for candidate in candidates.iter() {
        let distance = region_distance(target, candidate.tile.view());
        match best {
            Some(ref current) if distance >= current.distance => {}
            _ => {
                best = Some(Match {
                    candidate: *candidate,
                    distance,
                });
            }
        }
    }

    best
}
