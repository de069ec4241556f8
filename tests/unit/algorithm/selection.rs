//! Tests for coarse candidate selection by average color

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tilemosaic::MosaicError;
    use tilemosaic::Tile;
    use tilemosaic::algorithm::selection::{
        candidate_scores, check_candidate_count, select_candidates,
    };
    use tilemosaic::color::{TileAverages, precompute_tile_averages};

    fn uniform_tiles(colors: &[[u8; 3]]) -> Vec<Tile> {
        colors
            .iter()
            .map(|&color| Array2::from_elem((2, 2), color))
            .collect()
    }

    // Averages chosen so distances to black are [5, 5, 1, 3]
    fn tied_tiles() -> Vec<Tile> {
        uniform_tiles(&[[5, 0, 0], [0, 5, 0], [1, 0, 0], [3, 0, 0]])
    }

    #[test]
    fn test_scores_follow_tile_order() {
        let tiles = tied_tiles();
        let averages = precompute_tile_averages(&tiles).unwrap();

        assert_eq!(
            candidate_scores([0.0, 0.0, 0.0], &averages),
            vec![5.0, 5.0, 1.0, 3.0]
        );
    }

    #[test]
    fn test_ties_prefer_lowest_index() {
        let tiles = tied_tiles();
        let averages = precompute_tile_averages(&tiles).unwrap();

        let two = select_candidates([0.0, 0.0, 0.0], &tiles, &averages, 2).unwrap();
        assert_eq!(two.indices(), vec![2, 3]);

        let three = select_candidates([0.0, 0.0, 0.0], &tiles, &averages, 3).unwrap();
        assert_eq!(three.indices(), vec![2, 3, 0]);

        let all = select_candidates([0.0, 0.0, 0.0], &tiles, &averages, 4).unwrap();
        assert_eq!(all.indices(), vec![2, 3, 0, 1]);
    }

    // Distances [5, 5, 1, 3] with the closest tile removed from the pool
    #[test]
    fn test_first_seen_minimum_wins_after_removal() {
        let tiles = uniform_tiles(&[[5, 0, 0], [0, 5, 0], [1, 0, 0], [9, 0, 0]]);
        let averages = precompute_tile_averages(&tiles).unwrap();

        let chosen = select_candidates([0.0, 0.0, 0.0], &tiles, &averages, 2).unwrap();

        assert_eq!(chosen.indices(), vec![2, 0]);
        let scores: Vec<f64> = chosen.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![1.0, 5.0]);
    }

    #[test]
    fn test_candidates_reference_their_tiles() {
        let tiles = tied_tiles();
        let averages = precompute_tile_averages(&tiles).unwrap();

        let chosen = select_candidates([0.0, 0.0, 0.0], &tiles, &averages, 4).unwrap();

        for candidate in chosen.iter() {
            assert!(std::ptr::eq(candidate.tile, &tiles[candidate.index]));
        }
    }

    #[test]
    fn test_all_equal_scores_keep_input_order() {
        let tiles = uniform_tiles(&[[7, 7, 7]; 6]);
        let averages = precompute_tile_averages(&tiles).unwrap();

        let chosen = select_candidates([7.0, 7.0, 7.0], &tiles, &averages, 4).unwrap();

        assert_eq!(chosen.indices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_too_many_candidates_is_an_error() {
        let tiles = tied_tiles();
        let averages = precompute_tile_averages(&tiles).unwrap();

        let result = select_candidates([0.0, 0.0, 0.0], &tiles, &averages, 5);

        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "num_candidates",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_candidates_is_an_error() {
        assert!(check_candidate_count(0, 3).is_err());
        assert!(check_candidate_count(3, 3).is_ok());
        assert!(check_candidate_count(4, 3).is_err());
    }

    #[test]
    fn test_misaligned_averages_rejected() {
        let tiles = tied_tiles();
        let averages = TileAverages::from_averages(vec![[0.0; 3]; 3]);

        let result = select_candidates([0.0, 0.0, 0.0], &tiles, &averages, 1);

        assert!(matches!(
            result,
            Err(MosaicError::TileAverageMismatch {
                tiles: 4,
                averages: 3
            })
        ));
    }
}
