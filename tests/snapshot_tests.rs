use coordsys_rs::api::{CoordSystemSnapshot, CoordSystemState, StaticDataModel};
use coordsys_rs::core::{DataPoint, Margins, Rect, YAxisId};
use coordsys_rs::{CoordSystem, CoordSystemConfig, CoordSystemKind};

fn coord() -> CoordSystem<StaticDataModel> {
    let model = StaticDataModel::numeric().with_series(
        YAxisId::Primary,
        vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 100.0)],
    );
    CoordSystem::with_estimated_metrics(model, CoordSystemConfig::default())
}

#[test]
fn stale_snapshot_has_no_layout() {
    let snapshot = coord().snapshot();

    assert_eq!(snapshot.state, CoordSystemState::Stale);
    assert_eq!(snapshot.bounds, None);
    assert_eq!(snapshot.inner_bounds, None);
    assert!(snapshot.transform.is_none());
    assert_eq!(snapshot.x_ticks.as_ref().map(|ticks| ticks.len()), Some(11));
}

#[test]
fn fresh_snapshot_captures_layout() {
    let mut coord = coord();
    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");
    let snapshot = coord.snapshot();

    assert_eq!(snapshot.kind, CoordSystemKind::Classic);
    assert_eq!(snapshot.state, CoordSystemState::Fresh);
    assert_eq!(snapshot.margins, Margins::new(34, 20, 19, 28));
    assert_eq!(snapshot.inner_bounds, Some(Rect::new(33, 18, 348, 255)));
    assert_eq!(snapshot.y_range.max, 100.0);
    assert!(snapshot.secondary_y_range.is_none());
    assert!(!snapshot.center_labels_between_ticks);
}

#[test]
fn snapshot_json_round_trips() {
    let mut coord = coord();
    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");

    let json = coord.snapshot_json_pretty().expect("json");
    assert!(json.contains("\"kind\": \"Classic\""));
    assert!(json.contains("\"state\": \"Fresh\""));

    let parsed: CoordSystemSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    let expected = coord.snapshot();
    assert_eq!(parsed.kind, expected.kind);
    assert_eq!(parsed.bounds, expected.bounds);
    assert_eq!(parsed.margins, expected.margins);
    assert_eq!(parsed.tick_limits, expected.tick_limits);
    assert_eq!(parsed.y_ticks, expected.y_ticks);

    let parsed_transform = parsed.transform.expect("parsed transform");
    let transform = expected.transform.expect("transform");
    assert!((parsed_transform.scale_x - transform.scale_x).abs() <= 1e-9);
    assert!((parsed_transform.translate_y - transform.translate_y).abs() <= 1e-9);
}

#[test]
fn snapshot_reports_tick_cache_usage() {
    let mut coord = coord();
    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");
    let _ = coord.build_render_frame().expect("frame");

    let stats = coord.snapshot().tick_cache;
    assert_eq!(stats.size, 2);
    assert!(stats.hits >= 2);
}
