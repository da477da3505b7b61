//! Split tests: refusal boundary, quadrant geometry, ordering, ids, colour.

use crate::helpers::{
    TestEngineBuilder, assert_box_count, assert_geometry, assert_invariants, box_by_id, drag_box,
    ids, split,
};
use kurbo::Point;
use splitboard::geometry::bounding_rect;
use splitboard::{BoxId, EngineSettings, IgnoreReason, MouseButton, Transition};

#[test]
fn test_split_refused_at_exactly_twice_min() {
    let mut engine = TestEngineBuilder::new().with_box((0.0, 0.0), (80.0, 80.0)).build();

    let t = engine.on_box_click(&BoxId::from("1"));
    assert_eq!(t.ignored_reason(), Some(IgnoreReason::TooSmallToSplit));
    assert_eq!(ids(&engine), ["1"]);
}

#[test]
fn test_split_refused_when_one_side_too_small() {
    let mut engine = TestEngineBuilder::new().with_box((0.0, 0.0), (400.0, 80.0)).build();

    let t = engine.on_box_click(&BoxId::from("1"));
    assert_eq!(t.ignored_reason(), Some(IgnoreReason::TooSmallToSplit));
}

#[test]
fn test_split_succeeds_just_above_boundary() {
    let mut engine = TestEngineBuilder::new().with_box((0.0, 0.0), (81.0, 81.0)).build();

    let children = split(&mut engine, &BoxId::from("1"));
    assert_eq!(children.map(|c| c.to_string()), ["1-1", "1-2", "1-3", "1-4"]);
    for child in engine.boxes() {
        assert_eq!((child.width, child.height), (40.5, 40.5));
    }
}

#[test]
fn test_split_quadrant_geometry_and_conservation() {
    let mut engine = TestEngineBuilder::new().with_box((10.0, 20.0), (120.0, 90.0)).build();
    let parent = box_by_id(&engine, "1").clone();

    split(&mut engine, &BoxId::from("1"));

    assert_geometry(box_by_id(&engine, "1-1"), 10.0, 20.0, 60.0, 45.0);
    assert_geometry(box_by_id(&engine, "1-2"), 70.0, 20.0, 60.0, 45.0);
    assert_geometry(box_by_id(&engine, "1-3"), 10.0, 65.0, 60.0, 45.0);
    assert_geometry(box_by_id(&engine, "1-4"), 70.0, 65.0, 60.0, 45.0);

    let total_area: f64 = engine.boxes().iter().map(|b| b.area()).sum();
    assert_eq!(total_area, parent.area());
    assert_eq!(bounding_rect(engine.boxes()), Some(parent.rect()));
}

#[test]
fn test_children_inherit_parent_color() {
    let mut engine = TestEngineBuilder::new()
        .with_palette(&["violet", "lime"])
        .with_box((0.0, 0.0), (100.0, 100.0))
        .with_box((200.0, 0.0), (200.0, 200.0))
        .build();

    split(&mut engine, &BoxId::from("2"));

    for id in ["2-1", "2-2", "2-3", "2-4"] {
        assert_eq!(box_by_id(&engine, id).color, "lime");
    }
}

#[test]
fn test_children_replace_parent_in_render_order() {
    let mut engine = TestEngineBuilder::new()
        .with_box((0.0, 0.0), (50.0, 50.0))
        .with_box((100.0, 0.0), (200.0, 200.0))
        .with_box((400.0, 0.0), (50.0, 50.0))
        .build();

    split(&mut engine, &BoxId::from("2"));

    assert_eq!(ids(&engine), ["1", "2-1", "2-2", "2-3", "2-4", "3"]);
}

#[test]
fn test_repeated_split_ids_unique() {
    let mut engine = TestEngineBuilder::new().with_box((0.0, 0.0), (400.0, 400.0)).build();

    split(&mut engine, &BoxId::from("1"));
    split(&mut engine, &BoxId::from("1-2"));

    assert_box_count(&engine, 7);
    assert_eq!(
        ids(&engine),
        ["1-1", "1-2-1", "1-2-2", "1-2-3", "1-2-4", "1-3", "1-4"]
    );
    assert_invariants(&engine);
}

#[test]
fn test_split_unknown_or_removed_parent() {
    let mut engine = TestEngineBuilder::new().with_box((0.0, 0.0), (400.0, 400.0)).build();
    split(&mut engine, &BoxId::from("1"));

    let t = engine.on_box_click(&BoxId::from("1"));
    assert_eq!(t.ignored_reason(), Some(IgnoreReason::UnknownBox));
    assert_box_count(&engine, 4);
}

#[test]
fn test_split_until_exhausted_keeps_min_size() {
    let mut engine = TestEngineBuilder::new().with_box((0.0, 0.0), (1000.0, 700.0)).build();

    loop {
        let current: Vec<BoxId> = engine.boxes().iter().map(|b| b.id.clone()).collect();
        let splits = current
            .iter()
            .filter(|id| matches!(engine.on_box_click(id), Transition::BoxSplit { .. }))
            .count();
        assert_invariants(&engine);
        if splits == 0 {
            break;
        }
    }

    assert_box_count(&engine, 256);
    assert_geometry(engine.boxes().first().unwrap(), 0.0, 0.0, 62.5, 43.75);
}

#[test]
fn test_click_after_drag_splits_by_default() {
    let mut engine = TestEngineBuilder::new().with_box((0.0, 0.0), (200.0, 200.0)).build();
    let id = BoxId::from("1");

    drag_box(&mut engine, &id, (10.0, 10.0), (60.0, 60.0));
    let t = engine.on_box_click(&id);

    assert!(matches!(t, Transition::BoxSplit { .. }));
    assert_geometry(box_by_id(&engine, "1-1"), 50.0, 50.0, 100.0, 100.0);
}

#[test]
fn test_click_after_moving_drag_suppressed_when_enabled() {
    let settings = EngineSettings::default().with_click_after_drag_suppressed(true);
    let mut engine = TestEngineBuilder::new()
        .with_settings(settings)
        .with_box((0.0, 0.0), (200.0, 200.0))
        .build();
    let id = BoxId::from("1");

    drag_box(&mut engine, &id, (10.0, 10.0), (60.0, 60.0));

    let t = engine.on_box_click(&id);
    assert_eq!(t.ignored_reason(), Some(IgnoreReason::ClickAfterDrag));

    // Only the first click is swallowed
    assert!(matches!(engine.on_box_click(&id), Transition::BoxSplit { .. }));
}

#[test]
fn test_click_after_stationary_press_splits_when_suppression_enabled() {
    let settings = EngineSettings::default().with_click_after_drag_suppressed(true);
    let mut engine = TestEngineBuilder::new()
        .with_settings(settings)
        .with_box((0.0, 0.0), (200.0, 200.0))
        .build();
    let id = BoxId::from("1");

    engine.on_box_pointer_down(&id, Point::new(10.0, 10.0), MouseButton::Primary);
    engine.on_pointer_up();

    assert!(matches!(engine.on_box_click(&id), Transition::BoxSplit { .. }));
}

#[test]
fn test_click_on_box_being_dragged_refused() {
    let mut engine = TestEngineBuilder::new().with_box((0.0, 0.0), (200.0, 200.0)).build();
    let id = BoxId::from("1");
    engine.on_box_pointer_down(&id, Point::new(10.0, 10.0), MouseButton::Primary);

    let t = engine.on_box_click(&id);
    assert_eq!(t.ignored_reason(), Some(IgnoreReason::BoxInGesture));
    assert!(engine.input_state().is_dragging());
}

#[test]
fn test_click_on_other_box_during_drag_splits() {
    let mut engine = TestEngineBuilder::new()
        .with_box((0.0, 0.0), (100.0, 100.0))
        .with_box((200.0, 0.0), (200.0, 200.0))
        .build();
    engine.on_box_pointer_down(&BoxId::from("1"), Point::new(10.0, 10.0), MouseButton::Primary);

    let t = engine.on_box_click(&BoxId::from("2"));
    assert!(matches!(t, Transition::BoxSplit { .. }));
    assert_eq!(engine.input_state().dragged_box_id(), Some(&BoxId::from("1")));
    assert_invariants(&engine);
}
