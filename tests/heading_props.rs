use glam::DVec2;
use proptest::prelude::*;
use toyrover::rotate;

fn nonzero_vec() -> impl Strategy<Value = DVec2> {
    (-10.0..10.0f64, -10.0..10.0f64)
        .prop_map(|(x, y)| DVec2::new(x, y))
        .prop_filter("vector must be nonzero", |v| v.length() > 1e-6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn rotation_preserves_length(v in nonzero_vec(), angle in -720.0..720.0f64) {
        let rotated = rotate(v, angle);
        prop_assert!((rotated.length() - v.length()).abs() < 1e-9);
    }

    #[test]
    fn four_quarter_turns_are_identity(v in nonzero_vec()) {
        let mut rotated = v;
        for _ in 0..4 {
            rotated = rotate(rotated, 90.0);
        }
        prop_assert!(rotated.abs_diff_eq(v, 1e-9));
    }

    #[test]
    fn rotating_there_and_back_restores_input(v in nonzero_vec(), angle in -720.0..720.0f64) {
        let restored = rotate(rotate(v, angle), -angle);
        prop_assert!(restored.abs_diff_eq(v, 1e-9));
    }
}
