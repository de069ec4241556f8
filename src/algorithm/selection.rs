//! Coarse candidate selection by average-color distance
//!
//! Picks the tiles whose precomputed averages lie closest to a target
//! average, without replacement. Equal scores keep the lower tile index first.

use crate::color::{AverageColor, TileAverages, average_distance};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::Tile;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A tile chosen by the coarse filter
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'t> {
    /// Position of the tile in the tile list
    pub index: usize,
    /// Average-color distance to the target
    pub score: f64,
    /// The tile itself
    pub tile: &'t Tile,
}

/// Candidates ordered by ascending score, ties by ascending tile index
#[derive(Debug, Clone, Default)]
pub struct CandidateSet<'t> {
    candidates: Vec<Candidate<'t>>,
}

impl<'t> CandidateSet<'t> {
    /// Number of candidates
    pub const fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the set holds no candidate
    pub const fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in selection order
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate<'t>> {
        self.candidates.iter()
    }

    /// Tile indices in selection order
    pub fn indices(&self) -> Vec<usize> {
        self.candidates.iter().map(|c| c.index).collect()
    }
}

impl<'a, 't> IntoIterator for &'a CandidateSet<'t> {
    type Item = &'a Candidate<'t>;
    type IntoIter = std::slice::Iter<'a, Candidate<'t>>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl<'t> FromIterator<Candidate<'t>> for CandidateSet<'t> {
    fn from_iter<I: IntoIterator<Item = Candidate<'t>>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Copy)]
struct ScoredIndex {
    index: usize,
    score: f64,
}

impl PartialEq for ScoredIndex {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredIndex {}

impl Ord for ScoredIndex {
    // Index breaks ties so heap order matches a first-seen linear scan
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for ScoredIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Average-color distance from `target` to every tile, in tile order
pub fn candidate_scores(target: AverageColor, tile_averages: &TileAverages) -> Vec<f64> {
    tile_averages
        .as_slice()
        .iter()
        .map(|&average| average_distance(average, target))
        .collect()
}

/// Validate a candidate count against the tile set size
///
/// # Errors
///
/// Returns an error if `num_candidates` is zero or exceeds `tile_count`
pub fn check_candidate_count(num_candidates: usize, tile_count: usize) -> Result<()> {
    if num_candidates == 0 {
        return Err(invalid_parameter(
            "num_candidates",
            &num_candidates,
            &"at least one candidate is required",
        ));
    }
    if num_candidates > tile_count {
        return Err(invalid_parameter(
            "num_candidates",
            &num_candidates,
            &format!("exceeds the tile set size of {tile_count}"),
        ));
    }
    Ok(())
}

/// Select the `num_candidates` tiles whose averages are closest to `target`
///
/// Returns them by ascending distance. Among equal distances the tile that
/// appears first in `tiles` wins.
///
/// # Errors
///
/// Returns an error if:
/// - `num_candidates` is zero or larger than the tile set
/// - `tile_averages` is not aligned with `tiles`
pub fn select_candidates<'t>(
    target: AverageColor,
    tiles: &'t [Tile],
    tile_averages: &TileAverages,
    num_candidates: usize,
) -> Result<CandidateSet<'t>> {
    if tile_averages.len() != tiles.len() {
        return Err(MosaicError::TileAverageMismatch {
            tiles: tiles.len(),
            averages: tile_averages.len(),
        });
    }
    check_candidate_count(num_candidates, tiles.len())?;

    // Max-heap of the best k so far; its top is the worst kept candidate
    let mut heap = BinaryHeap::with_capacity(num_candidates + 1);

    for (index, score) in candidate_scores(target, tile_averages)
        .into_iter()
        .enumerate()
    {
        let scored = ScoredIndex { index, score };

        if heap.len() < num_candidates {
            heap.push(scored);
        } else if let Some(worst) = heap.peek() {
            if scored < *worst {
                heap.pop();
                heap.push(scored);
            }
        }
    }

    Ok(heap
        .into_sorted_vec()
        .into_iter()
        .filter_map(|ScoredIndex { index, score }| {
            tiles.get(index).map(|tile| Candidate { index, score, tile })
        })
        .collect())
}
