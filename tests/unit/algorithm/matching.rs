//! Tests for exact pixelwise matching among candidates

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tilemosaic::Tile;
    use tilemosaic::algorithm::matching::{best_match, region_distance};
    use tilemosaic::algorithm::selection::{Candidate, CandidateSet};

    fn candidate_set(tiles: &[Tile]) -> CandidateSet<'_> {
        tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| Candidate {
                index,
                score: 0.0,
                tile,
            })
            .collect()
    }

    #[test]
    fn test_region_distance_sums_all_cells() {
        let black = Array2::from_elem((2, 2), [0, 0, 0]);
        let white = Array2::from_elem((2, 2), [255, 255, 255]);

        assert_eq!(region_distance(black.view(), white.view()), 765 * 4);
        assert_eq!(region_distance(black.view(), black.view()), 0);
    }

    // A border piece only compares against the tile's top-left overlap
    #[test]
    fn test_region_distance_uses_overlap_only() {
        let piece = Array2::from_elem((1, 2), [10, 10, 10]);
        let tile = Array2::from_shape_fn((2, 2), |(r, _)| {
            if r == 0 { [10, 10, 10] } else { [0, 0, 0] }
        });

        assert_eq!(region_distance(piece.view(), tile.view()), 0);
        assert_eq!(region_distance(tile.view(), piece.view()), 0);
    }

    #[test]
    fn test_best_match_picks_smallest_distance() {
        let target = Array2::from_elem((2, 2), [100, 100, 100]);
        let tiles = vec![
            Array2::from_elem((2, 2), [0, 0, 0]),
            Array2::from_elem((2, 2), [90, 100, 100]),
            Array2::from_elem((2, 2), [255, 255, 255]),
        ];

        let winner = best_match(target.view(), &candidate_set(&tiles)).unwrap();

        assert_eq!(winner.candidate.index, 1);
        assert_eq!(winner.distance, 40);
    }

    #[test]
    fn test_best_match_tie_goes_to_first_candidate() {
        let target = Array2::from_elem((2, 2), [100, 100, 100]);
        let tiles = vec![
            Array2::from_elem((2, 2), [0, 0, 0]),
            Array2::from_elem((2, 2), [110, 100, 100]),
            Array2::from_elem((2, 2), [90, 100, 100]),
        ];

        let winner = best_match(target.view(), &candidate_set(&tiles)).unwrap();

        assert_eq!(winner.candidate.index, 1);
    }

    // Order of the candidate set decides ties, not the tile index
    #[test]
    fn test_best_match_tie_follows_candidate_order() {
        let target = Array2::from_elem((1, 1), [50, 50, 50]);
        let tiles = vec![
            Array2::from_elem((1, 1), [40, 50, 50]),
            Array2::from_elem((1, 1), [60, 50, 50]),
        ];
        let reversed: CandidateSet<'_> = candidate_set(&tiles).iter().rev().copied().collect();

        let winner = best_match(target.view(), &reversed).unwrap();

        assert_eq!(winner.candidate.index, 1);
    }

    #[test]
    fn test_best_match_of_empty_set_is_none() {
        let target = Array2::from_elem((1, 1), [0, 0, 0]);

        assert!(best_match(target.view(), &CandidateSet::default()).is_none());
    }
}
