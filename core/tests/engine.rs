//! End-to-end engine behavior on a manual clock.

use orrery_core::{
    catalog::CardBlurb,
    command::ViewCommand,
    engine::Orrery,
    event::OrreryEvent,
    light_time::LightReport,
    snapshot::{MarkerEmphasis, OrrerySnapshot},
};

const START: &str = "2024-06-01T12:30:00Z";

fn engine() -> Orrery {
    let _ = env_logger::builder().is_test(true).try_init();
    Orrery::build_test(START).expect("built-in engine")
}

fn select(id: &str) -> ViewCommand {
    ViewCommand::SelectBody { id: id.into() }
}

#[test]
fn run_ticks_advances_clock_and_releases_timer() {
    let mut engine = engine();
    let events = engine.run_ticks(3);

    assert_eq!(engine.clock.current_tick, 3);
    assert_eq!(engine.instant().to_string(), "2024-06-01T12:30:03Z");
    assert_eq!(engine.clock.timers_released(), 1);
    assert!(!engine.clock.is_running());

    let started = events
        .iter()
        .filter(|e| matches!(e, OrreryEvent::TickStarted { .. }))
        .count();
    assert_eq!(started, 3);
    assert!(matches!(events.last(), Some(OrreryEvent::TickCompleted { tick: 3 })));
}

#[test]
fn selecting_twice_toggles_selection_off() {
    let mut engine = engine();

    let events = engine.apply(select("mars"));
    assert_eq!(events, vec![OrreryEvent::BodySelected { tick: 0, id: "mars".into() }]);
    assert_eq!(engine.selected(), Some("mars"));

    engine.apply(select("venus"));
    assert_eq!(engine.selected(), Some("venus"));

    let events = engine.apply(select("venus"));
    assert_eq!(events, vec![OrreryEvent::SelectionCleared { tick: 0 }]);
    assert_eq!(engine.selected(), None);
}

#[test]
fn unknown_body_and_marker_are_ignored() {
    let mut engine = engine();
    engine.apply(select("earth"));

    let events = engine.apply(select("pluto"));
    assert!(matches!(events[0], OrreryEvent::CommandIgnored { .. }));
    assert_eq!(engine.selected(), Some("earth"));

    let events = engine.apply(ViewCommand::HoverMarker { city: "Atlantis".into() });
    assert!(matches!(events[0], OrreryEvent::CommandIgnored { .. }));
    assert_eq!(engine.hovered(), None);
}

#[test]
fn rejected_age_keeps_previous_results() {
    let mut engine = engine();
    let events = engine.apply(ViewCommand::SubmitAge { input: "37".into() });
    assert_eq!(
        events,
        vec![OrreryEvent::AgesCalculated { tick: 0, earth_age_years: 37.0, result_count: 8 }]
    );
    let before = engine.age_results().to_vec();

    for bad in ["abc", "-5", "0", "1e307"] {
        let events = engine.apply(ViewCommand::SubmitAge { input: bad.into() });
        assert_eq!(
            events,
            vec![OrreryEvent::AgeInputRejected { tick: 0, input: bad.into() }]
        );
        assert_eq!(engine.age_results(), before.as_slice());
    }
}

#[test]
fn light_signal_needs_a_selection() {
    let mut engine = engine();
    let events = engine.apply(ViewCommand::SendSignal);
    assert!(matches!(events[0], OrreryEvent::CommandIgnored { .. }));
    assert!(!engine.is_transmitting());
}

#[test]
fn light_signal_clears_after_five_seconds_of_clock_time() {
    let mut engine = engine();
    engine.apply(select("earth"));

    let events = engine.apply(ViewCommand::SendSignal);
    match &events[0] {
        OrreryEvent::SignalSent { from, until, .. } => {
            assert_eq!(from, "earth");
            assert_eq!(until.to_string(), "2024-06-01T12:30:05Z");
        }
        other => panic!("expected SignalSent, got {other:?}"),
    }

    // A second send while in flight is ignored.
    let events = engine.apply(ViewCommand::SendSignal);
    assert!(matches!(events[0], OrreryEvent::CommandIgnored { .. }));

    let events = engine.run_ticks(4);
    assert!(engine.is_transmitting());
    assert!(!events.iter().any(|e| matches!(e, OrreryEvent::SignalCompleted { .. })));

    let events = engine.run_ticks(1);
    assert!(!engine.is_transmitting());
    assert!(events
        .iter()
        .any(|e| matches!(e, OrreryEvent::SignalCompleted { tick: 5, .. })));
}

#[test]
fn snapshot_without_selection() {
    let engine = engine();
    let snapshot = engine.snapshot().unwrap();

    assert_eq!(snapshot.tick, 0);
    assert_eq!(snapshot.globe.utc_time, "12:30:00");
    assert_eq!(snapshot.globe.markers.len(), 8);
    assert_eq!(snapshot.planets.len(), 8);
    assert!(snapshot.ages.is_empty());
    assert!(matches!(snapshot.light, LightReport::NoSelection { .. }));
    assert!(snapshot.planets.iter().all(|p| !p.selected && p.blurb.is_none()));
    assert!(snapshot
        .globe
        .markers
        .iter()
        .all(|m| m.emphasis == MarkerEmphasis::RESTING));

    let tokyo = snapshot.globe.markers.iter().find(|m| m.city == "Tokyo").unwrap();
    assert_eq!(tokyo.local_time, "21:30");
    assert_eq!(tokyo.label, "Tokyo, Japan");
}

#[test]
fn snapshot_reflects_selection_hover_and_ages() {
    let mut engine = engine();
    engine.apply(select("venus"));
    engine.apply(ViewCommand::HoverMarker { city: "Cairo".into() });
    engine.apply(ViewCommand::SubmitAge { input: "37".into() });

    let snapshot = engine.snapshot().unwrap();

    let venus = snapshot.planets.iter().find(|p| p.id == "venus").unwrap();
    assert!(venus.selected);
    assert_eq!(
        venus.blurb,
        Some(CardBlurb::FunFact("A day on Venus lasts longer than its year.".into()))
    );
    assert_eq!(venus.glow, "255, 198, 73");

    let earth = snapshot.planets.iter().find(|p| p.id == "earth").unwrap();
    assert!(earth.blurb.is_none());
    assert_eq!(earth.local_time, "12:00");
    assert!((earth.rotation_degrees - 187.5).abs() < 1e-9);

    let cairo = snapshot.globe.markers.iter().find(|m| m.city == "Cairo").unwrap();
    assert!(cairo.hovered);
    assert_eq!(cairo.emphasis, MarkerEmphasis::HOVERED);
    assert_eq!(cairo.local_time, "14:30");

    assert_eq!(snapshot.ages.len(), 8);
    assert_eq!(snapshot.light.routes().len(), 7);

    engine.apply(ViewCommand::ClearHover);
    let snapshot = engine.snapshot().unwrap();
    assert!(snapshot.globe.markers.iter().all(|m| !m.hovered));
}

#[test]
fn snapshot_serializes_for_the_display_surface() {
    let mut engine = engine();
    let json = serde_json::to_value(engine.snapshot().unwrap()).unwrap();
    assert_eq!(json["light"]["status"], "no_selection");
    assert_eq!(json["instant"], "2024-06-01T12:30:00Z");

    engine.apply(select("mars"));
    let json = serde_json::to_value(engine.snapshot().unwrap()).unwrap();
    assert_eq!(json["light"]["status"], "from");
    assert_eq!(json["light"]["origin"], "mars");
    let mars_card = &json["planets"][3];
    assert_eq!(mars_card["id"], "mars");
    assert_eq!(mars_card["blurb"]["kind"], "description");
}

#[test]
fn snapshot_after_huge_age_still_reads_back() {
    let mut engine = engine();
    engine.apply(ViewCommand::SubmitAge { input: "37".into() });
    engine.apply(ViewCommand::SubmitAge { input: "1e307".into() });

    let snapshot = engine.snapshot().unwrap();
    assert!(snapshot.ages.iter().all(|r| r.age_in_body_years.is_finite()));
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: OrrerySnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.ages.len(), 8);
    assert_eq!(back.ages[2].body.id, "earth");
    assert!((back.ages[2].age_in_body_years - 37.0).abs() < 1e-9);
}

#[test]
fn commands_round_trip_through_json() {
    let cmd: ViewCommand =
        serde_json::from_str(r#"{"cmd":"submit_age","input":"42"}"#).unwrap();
    assert_eq!(cmd, ViewCommand::SubmitAge { input: "42".into() });

    let cmd: ViewCommand = serde_json::from_str(r#"{"cmd":"send_signal"}"#).unwrap();
    assert_eq!(cmd.kind(), "send_signal");
}
