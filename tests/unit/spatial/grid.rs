//! Tests for partitioning an image into tile-sized cells

#[cfg(test)]
mod tests {
    use tilemosaic::spatial::{Anchor, CellGrid, RegionSize};

    #[test]
    fn test_exact_multiple_grid() {
        let grid = CellGrid::new((4, 6), RegionSize::new(2, 3)).unwrap();

        let anchors: Vec<Anchor> = grid.anchors().collect();

        assert_eq!(grid.bands(), (2, 2));
        assert_eq!(grid.cell_count(), 4);
        assert_eq!(
            anchors,
            vec![
                Anchor::new(0, 0),
                Anchor::new(0, 3),
                Anchor::new(2, 0),
                Anchor::new(2, 3)
            ]
        );
    }

    // Last band in each direction is shorter than a tile
    #[test]
    fn test_border_cells_are_clipped() {
        let grid = CellGrid::new((3, 3), RegionSize::new(2, 2)).unwrap();

        let anchors: Vec<Anchor> = grid.anchors().collect();
        let sizes: Vec<RegionSize> = anchors.iter().map(|&a| grid.cell_size_at(a)).collect();

        assert_eq!(
            anchors,
            vec![
                Anchor::new(0, 0),
                Anchor::new(0, 2),
                Anchor::new(2, 0),
                Anchor::new(2, 2)
            ]
        );
        assert_eq!(
            sizes,
            vec![
                RegionSize::new(2, 2),
                RegionSize::new(2, 1),
                RegionSize::new(1, 2),
                RegionSize::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_cell_count_matches_anchor_count() {
        for (dims, cell) in [((10, 7), (3, 2)), ((1, 1), (5, 5)), ((9, 9), (1, 1))] {
            let grid = CellGrid::new(dims, RegionSize::new(cell.0, cell.1)).unwrap();
            assert_eq!(grid.anchors().count(), grid.cell_count());
        }
    }

    #[test]
    fn test_cells_cover_image_exactly_once() {
        let grid = CellGrid::new((7, 5), RegionSize::new(3, 2)).unwrap();
        let mut hits = vec![0u8; 7 * 5];

        for anchor in grid.anchors() {
            let size = grid.cell_size_at(anchor);
            for r in anchor.row..anchor.row + size.height {
                for c in anchor.col..anchor.col + size.width {
                    if let Some(hit) = hits.get_mut(r * 5 + c) {
                        *hit += 1;
                    }
                }
            }
        }

        assert!(hits.iter().all(|&h| h == 1));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(CellGrid::new((0, 4), RegionSize::new(2, 2)).is_err());
        assert!(CellGrid::new((4, 4), RegionSize::new(0, 2)).is_err());
        assert!(CellGrid::new((4, 4), RegionSize::new(2, 0)).is_err());
    }
}
