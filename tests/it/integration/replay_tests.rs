//! Replay scripts driving a fresh engine end to end.

use crate::helpers::{assert_geometry, assert_invariants, box_by_id, ids};
use splitboard::error::ReplayError;
use splitboard::replay::{load_script, parse_script, replay};
use splitboard::{BoxEngine, EngineSettings, IgnoreReason, Transition};
use std::fs;

fn deterministic_engine() -> BoxEngine {
    let settings =
        EngineSettings::from_json(r#"{"id_strategy": "counter", "color_strategy": "round_robin"}"#)
            .unwrap();
    BoxEngine::with_settings(settings)
}

#[test]
fn test_replay_draw_drag_split() {
    let events = parse_script(
        r#"[
            {"type": "pointer_down", "x": 100, "y": 100},
            {"type": "pointer_move", "x": 300, "y": 260},
            {"type": "pointer_up"},
            {"type": "box_pointer_down", "id": "1", "x": 110, "y": 110},
            {"type": "pointer_move", "x": 60, "y": 30},
            {"type": "pointer_up"},
            {"type": "box_click", "id": "1"},
            {"type": "box_click", "id": "1-4"}
        ]"#,
    )
    .unwrap();

    let mut engine = deterministic_engine();
    let transitions = replay(&mut engine, &events);

    assert_eq!(transitions.len(), 8);
    assert_eq!(transitions[2], Transition::BoxCommitted { id: "1".into() });
    assert!(matches!(transitions[6], Transition::BoxSplit { .. }));
    assert_eq!(
        transitions[7].ignored_reason(),
        Some(IgnoreReason::TooSmallToSplit)
    );

    assert_eq!(ids(&engine), ["1-1", "1-2", "1-3", "1-4"]);
    assert_geometry(box_by_id(&engine, "1-1"), 50.0, 20.0, 100.0, 80.0);
    assert_eq!(box_by_id(&engine, "1-3").color, "red-300");
    assert_invariants(&engine);
}

#[test]
fn test_replay_reports_ignored_events() {
    let events = parse_script(
        r#"[
            {"type": "pointer_up"},
            {"type": "box_click", "id": "ghost"},
            {"type": "pointer_down", "x": 0, "y": 0, "target_is_box": true},
            {"type": "hover_leave", "id": "ghost"},
            {"type": "cancel"}
        ]"#,
    )
    .unwrap();

    let mut engine = deterministic_engine();
    let reasons: Vec<_> = replay(&mut engine, &events)
        .iter()
        .map(Transition::ignored_reason)
        .collect();

    assert_eq!(
        reasons,
        [
            Some(IgnoreReason::NoGesture),
            Some(IgnoreReason::UnknownBox),
            Some(IgnoreReason::TargetIsBox),
            Some(IgnoreReason::NotHovered),
            Some(IgnoreReason::NoGesture),
        ]
    );
    assert!(engine.boxes().is_empty());
}

#[test]
fn test_replay_press_at_and_secondary_button() {
    let events = parse_script(
        r#"[
            {"type": "press_at", "x": 0, "y": 0},
            {"type": "pointer_move", "x": 100, "y": 100},
            {"type": "pointer_up"},
            {"type": "box_pointer_down", "id": "1", "x": 50, "y": 50, "button": "secondary"},
            {"type": "pointer_move", "x": 500, "y": 500},
            {"type": "pointer_up"}
        ]"#,
    )
    .unwrap();

    let mut engine = deterministic_engine();
    let transitions = replay(&mut engine, &events);

    assert_eq!(
        transitions[3].ignored_reason(),
        Some(IgnoreReason::NotPrimaryButton)
    );
    assert_geometry(box_by_id(&engine, "1"), 0.0, 0.0, 100.0, 100.0);
}

#[test]
fn test_load_script_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(
        &path,
        r#"[{"type": "pointer_down", "x": 5, "y": 5}, {"type": "pointer_up"}]"#,
    )
    .unwrap();

    let events = load_script(&path).unwrap();
    let mut engine = deterministic_engine();
    replay(&mut engine, &events);

    assert_geometry(box_by_id(&engine, "1"), 5.0, 5.0, 40.0, 40.0);
}

#[test]
fn test_load_script_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(load_script(&missing), Err(ReplayError::Io { .. })));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, r#"[{"type": "pointer_down"}]"#).unwrap();
    assert!(matches!(load_script(&broken), Err(ReplayError::Json(_))));
}
