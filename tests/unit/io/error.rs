//! Tests for error display and classification

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilemosaic::MosaicError;
    use tilemosaic::io::error::{file_system_error, invalid_parameter};

    #[test]
    fn test_invalid_parameter_message() {
        let error = invalid_parameter("num_candidates", &9, &"exceeds the tile set size of 4");

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'num_candidates' = '9': exceeds the tile set size of 4"
        );
        assert!(error.is_configuration());
    }

    #[test]
    fn test_non_uniform_tiles_message() {
        let error = MosaicError::NonUniformTiles {
            index: 3,
            expected: (8, 8),
            found: (8, 6),
        };

        assert_eq!(error.to_string(), "Tile 3 is 8x6 but the tile set is 8x8");
        assert!(error.is_configuration());
    }

    #[test]
    fn test_io_errors_keep_their_source() {
        let error = file_system_error(
            "tiles",
            "read tile directory",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );

        assert!(error.source().is_some());
        assert!(!error.is_configuration());
        assert!(error.to_string().contains("read tile directory on 'tiles'"));
    }

    #[test]
    fn test_errors_without_source() {
        let errors = [
            MosaicError::EmptyTileSet,
            MosaicError::EmptyRegion,
            MosaicError::Cancelled {
                completed: 1,
                total: 2,
            },
            MosaicError::NoUsableTiles {
                directory: PathBuf::from("x"),
            },
        ];

        assert!(errors.iter().all(|e| e.source().is_none()));
        assert!(errors.first().is_some_and(MosaicError::is_configuration));
    }
}
