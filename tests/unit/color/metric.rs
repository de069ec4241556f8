//! Tests for the absolute-difference color metric

#[cfg(test)]
mod tests {
    use tilemosaic::color::{average_distance, channel_distance, pixel_distance};

    #[test]
    fn test_pixel_distance_sums_channel_differences() {
        assert_eq!(pixel_distance([10, 20, 30], [13, 15, 30]), 8);
        assert_eq!(pixel_distance([13, 15, 30], [10, 20, 30]), 8);
    }

    // Full-range difference would overflow u8 arithmetic
    #[test]
    fn test_pixel_distance_extremes() {
        assert_eq!(pixel_distance([0, 0, 0], [255, 255, 255]), 765);
        assert_eq!(pixel_distance([7, 7, 7], [7, 7, 7]), 0);
    }

    #[test]
    fn test_average_distance_keeps_fractions() {
        let distance = average_distance([1.5, 0.0, 10.0], [0.25, 2.0, 10.0]);
        assert!((distance - 3.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_channel_distance_is_generic() {
        assert_eq!(channel_distance([5_i64, -3, 0], [-5, 3, 1]), 17);
    }
}
