use glam::DVec2;
use proptest::prelude::*;
use toyrover::Board;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn all_scaled_interior_points_are_contained(
        width in 0.0..100.0f64,
        height in 0.0..100.0f64,
        fx in 0.0..=1.0f64,
        fy in 0.0..=1.0f64,
    ) {
        let board = Board::new(width, height);
        let point = DVec2::new(fx * width, fy * height);
        prop_assert!(board.contains(point));
    }

    #[test]
    fn points_beyond_any_edge_are_rejected(
        width in 0.0..100.0f64,
        height in 0.0..100.0f64,
        inside in 0.0..=1.0f64,
        overshoot in 0.001..100.0f64,
    ) {
        let board = Board::new(width, height);
        prop_assert!(!board.contains(DVec2::new(width + overshoot, inside * height)));
        prop_assert!(!board.contains(DVec2::new(-overshoot, inside * height)));
        prop_assert!(!board.contains(DVec2::new(inside * width, height + overshoot)));
        prop_assert!(!board.contains(DVec2::new(inside * width, -overshoot)));
    }
}
