//! Snapshot tests using the insta crate.
//!
//! The render snapshot is the engine's whole outward surface, so its JSON
//! form is pinned here.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{TestEngineBuilder, split};
use kurbo::Point;
use splitboard::{BoxId, CursorMode, RenderSnapshot};

#[test]
fn snapshot_after_commit() {
    let engine = TestEngineBuilder::new()
        .with_box((100.0, 100.0), (200.0, 160.0))
        .build();

    insta::assert_snapshot!("snapshot_after_commit", engine.snapshot().to_json().unwrap());
}

#[test]
fn snapshot_split_while_drawing() {
    let mut engine = TestEngineBuilder::new().with_box((0.0, 0.0), (200.0, 200.0)).build();
    split(&mut engine, &BoxId::from("1"));
    engine.on_pointer_down(Point::new(300.0, 300.0), false);
    engine.on_pointer_move(Point::new(320.0, 350.0));

    insta::assert_snapshot!(
        "snapshot_split_while_drawing",
        engine.snapshot().to_json().unwrap()
    );
}

#[test]
fn test_render_list_paints_candidate_last() {
    let mut engine = TestEngineBuilder::new()
        .with_box((0.0, 0.0), (50.0, 50.0))
        .with_box((100.0, 0.0), (50.0, 50.0))
        .build();
    engine.on_pointer_down(Point::new(200.0, 200.0), false);

    let snapshot = engine.snapshot();
    let order: Vec<&str> = snapshot.render_list().map(|b| b.id.as_str()).collect();
    assert_eq!(order, ["1", "2", "3"]);
    assert_eq!(snapshot.cursor_mode, CursorMode::Pointing);
}

#[test]
fn test_snapshot_json_parses_back() {
    let mut engine = TestEngineBuilder::new().with_box((10.0, 20.0), (60.0, 70.0)).build();
    engine.on_box_hover_enter(&BoxId::from("1"));

    let snapshot = engine.snapshot();
    let parsed: RenderSnapshot = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(parsed, snapshot);
    assert_eq!(parsed.cursor_mode, CursorMode::Add);
}
