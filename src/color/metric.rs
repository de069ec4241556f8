//! Sum of per-channel absolute differences
//!
//! The same metric compares single pixels, whole regions (summed cell by
//! cell) and average colors. No weighting or perceptual correction is applied.

use crate::color::{AverageColor, Pixel};
use num_traits::Num;

/// Sum of absolute channel differences between two color triples
pub fn channel_distance<T>(a: [T; 3], b: [T; 3]) -> T
where
    T: Num + PartialOrd + Copy,
{
    a.iter().zip(b.iter()).fold(T::zero(), |total, (&x, &y)| {
        total + if x > y { x - y } else { y - x }
    })
}

/// Distance between two pixels, at most `3 * 255`
pub fn pixel_distance(a: Pixel, b: Pixel) -> u32 {
    channel_distance(a.map(u32::from), b.map(u32::from))
}

/// Distance between two average colors
pub fn average_distance(a: AverageColor, b: AverageColor) -> f64 {
    channel_distance(a, b)
}
