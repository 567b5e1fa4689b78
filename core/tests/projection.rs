use orrery_core::projection::{project, ScreenPoint};

#[test]
fn corners_and_center_map_to_unit_square() {
    assert_eq!(project(90.0, -180.0), ScreenPoint { x: 0.0, y: 0.0 });
    assert_eq!(project(-90.0, 180.0), ScreenPoint { x: 1.0, y: 1.0 });
    assert_eq!(project(0.0, 0.0), ScreenPoint { x: 0.5, y: 0.5 });
}

#[test]
fn full_turn_of_longitude_returns_to_same_x() {
    for long in [-180.0, -74.006, -0.1278, 0.0, 31.2357, 151.2093] {
        let a = project(10.0, long).x;
        let b = project(10.0, long + 360.0).x;
        assert!(
            (a.rem_euclid(1.0) - b.rem_euclid(1.0)).abs() < 1e-12,
            "x drifted for long={long}: {a} vs {b}"
        );
    }
}

#[test]
fn increasing_latitude_decreases_y() {
    let mut previous = f64::INFINITY;
    for lat in (-90..=90).step_by(15) {
        let y = project(lat as f64, 0.0).y;
        assert!(y < previous, "y did not decrease at lat={lat}");
        previous = y;
    }
}

#[test]
fn percent_scaling_matches_display_units() {
    // London
    let p = project(51.5074, -0.1278).to_percent();
    assert!((p.x - 49.9645).abs() < 1e-3, "x = {}", p.x);
    assert!((p.y - 21.3848).abs() < 1e-3, "y = {}", p.y);
}
