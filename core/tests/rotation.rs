use orrery_core::{
    clock::ObservationInstant,
    config::OrreryConfig,
    rotation::{body_clock, body_rotation_degrees, rotation_degrees},
};

fn at(text: &str) -> ObservationInstant {
    ObservationInstant::parse(text).unwrap()
}

#[test]
fn rotation_stays_in_range_for_every_minute_and_period() {
    let periods = [0.41, 0.45, 0.67, 0.72, 1.0, 1.03, 58.6, 243.0, 0.001, 1e6];
    for minute_of_day in (0..24 * 60).step_by(7) {
        let instant = at(&format!(
            "2024-03-10T{:02}:{:02}:00Z",
            minute_of_day / 60,
            minute_of_day % 60
        ));
        for period in periods {
            let angle = rotation_degrees(instant, period);
            assert!(
                (0.0..360.0).contains(&angle),
                "angle {angle} out of range at minute {minute_of_day}, period {period}"
            );
        }
    }
}

#[test]
fn rotation_scales_by_inverse_period() {
    let instant = at("2024-06-01T12:30:00Z");
    assert!((rotation_degrees(instant, 1.0) - 187.5).abs() < 1e-9);
    assert!((rotation_degrees(instant, 1.03) - 187.5 / 1.03).abs() < 1e-9);
    // Jupiter wraps past a full turn.
    assert!((rotation_degrees(instant, 0.41) - (187.5 / 0.41 - 360.0)).abs() < 1e-9);
}

#[test]
fn reference_body_turns_at_factor_one() {
    let config = OrreryConfig::builtin().unwrap();
    let instant = at("2024-06-01T12:30:00Z");
    let mut earth = config.catalog.body("earth").unwrap().clone();
    earth.rotation_period_days = 0.9973; // sidereal day

    let as_reference = body_rotation_degrees(instant, &earth, "earth");
    let as_ordinary = body_rotation_degrees(instant, &earth, "mars");
    assert!((as_reference - 187.5).abs() < 1e-9, "got {as_reference}");
    assert!((as_ordinary - 187.5 / 0.9973).abs() < 1e-9, "got {as_ordinary}");
}

#[test]
fn body_clock_scales_earth_hours_by_day_length() {
    let instant = at("2024-06-01T12:30:00Z");
    assert_eq!(body_clock(instant, 1.0).to_string(), "12:00");
    assert_eq!(body_clock(instant, 1.03).to_string(), "03:15");
    for period in [0.41, 0.67, 58.6, 243.0] {
        let face = body_clock(instant, period);
        assert!(face.hour <= 23 && face.minute <= 59, "{period}: {face}");
    }
}
