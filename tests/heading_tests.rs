use glam::DVec2;
use toyrover::{rotate, Direction};

#[test]
fn direction_vectors_are_distinct_unit_vectors() {
    for direction in Direction::ALL {
        assert!((direction.as_vec().length() - 1.0).abs() < 1e-12);
    }
    for a in Direction::ALL {
        for b in Direction::ALL {
            if a != b {
                assert_ne!(a.as_vec(), b.as_vec());
            }
        }
    }
}

#[test]
fn from_token_is_case_insensitive() {
    assert_eq!(Direction::from_token("NORTH"), Some(Direction::North));
    assert_eq!(Direction::from_token("north"), Some(Direction::North));
    assert_eq!(Direction::from_token("wEsT"), Some(Direction::West));
    assert_eq!(Direction::from_token("UP"), None);
    assert_eq!(Direction::from_token(""), None);
}

#[test]
fn display_prints_wire_token() {
    assert_eq!(Direction::North.to_string(), "NORTH");
    assert_eq!(Direction::East.to_string(), "EAST");
    assert_eq!(Direction::South.to_string(), "SOUTH");
    assert_eq!(Direction::West.to_string(), "WEST");
}

#[test]
fn rotate_quarter_turns() {
    let east = Direction::East.as_vec();
    let north = rotate(east, 90.0);
    assert!(north.abs_diff_eq(Direction::North.as_vec(), 1e-12));
    let back = rotate(north, -90.0);
    assert!(back.abs_diff_eq(east, 1e-12));
}

#[test]
fn four_quarter_turns_return_to_start() {
    let mut v = Direction::North.as_vec();
    for _ in 0..4 {
        v = rotate(v, 90.0);
    }
    assert!(v.abs_diff_eq(Direction::North.as_vec(), 1e-9));
}

#[test]
fn nearest_snaps_exact_cardinals() {
    for direction in Direction::ALL {
        assert_eq!(
            Direction::nearest(direction.as_vec(), 1e-6),
            Some(direction)
        );
    }
}

#[test]
fn nearest_snaps_within_tolerance_only() {
    let almost_north = DVec2::new(1e-8, 1.0);
    assert_eq!(Direction::nearest(almost_north, 1e-6), Some(Direction::North));

    let off_north = DVec2::new(1e-3, 1.0);
    assert_eq!(Direction::nearest(off_north, 1e-6), None);
    // A looser tolerance accepts the same vector.
    assert_eq!(Direction::nearest(off_north, 1e-2), Some(Direction::North));
}

#[test]
fn nearest_rejects_diagonals() {
    let diagonal = DVec2::new(1.0, 1.0).normalize();
    assert_eq!(Direction::nearest(diagonal, 1e-6), None);
}
