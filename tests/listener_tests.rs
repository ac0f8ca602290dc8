use std::sync::{Arc, Mutex};

use coordsys_rs::api::{RenderChangeEvent, RenderListeners, StaticDataModel};
use coordsys_rs::core::{DataPoint, Rect, YAxisId};
use coordsys_rs::{CoordSystem, CoordSystemConfig};

type EventLog = Arc<Mutex<Vec<RenderChangeEvent>>>;

fn recorder(log: &EventLog) -> impl FnMut(RenderChangeEvent) + Send + 'static {
    let log = Arc::clone(log);
    move |event| log.lock().expect("event log").push(event)
}

fn coord() -> CoordSystem<StaticDataModel> {
    let model = StaticDataModel::numeric().with_series(
        YAxisId::Primary,
        vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 100.0)],
    );
    CoordSystem::with_estimated_metrics(model, CoordSystemConfig::default())
}

#[test]
fn bounds_change_notifies_rebuild_once() {
    let log = EventLog::default();
    let mut coord = coord();
    assert!(coord.add_render_listener("recorder", recorder(&log)));

    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");
    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("same bounds");

    assert_eq!(
        *log.lock().expect("event log"),
        vec![RenderChangeEvent::TransformsRebuilt]
    );
}

#[test]
fn stale_rebuild_stays_silent() {
    let log = EventLog::default();
    let mut coord = coord();
    assert!(coord.add_render_listener("recorder", recorder(&log)));

    coord.set_bounds(Rect::new(0, 0, 30, 30)).expect("valid rect");
    assert!(coord.transform(YAxisId::Primary).is_none());
    assert!(log.lock().expect("event log").is_empty());

    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");
    assert_eq!(
        *log.lock().expect("event log"),
        vec![RenderChangeEvent::TransformsRebuilt]
    );
}

#[test]
fn style_toggles_notify_without_rebuild() {
    let log = EventLog::default();
    let mut coord = coord();
    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");
    coord.add_render_listener("recorder", recorder(&log));

    coord.set_paint_grid(true);
    coord.set_draw_arrows(false);

    assert_eq!(
        *log.lock().expect("event log"),
        vec![RenderChangeEvent::StyleChanged, RenderChangeEvent::StyleChanged]
    );
    assert!(coord.config().style.paint_grid);
    assert!(!coord.config().style.draw_arrows);
}

#[test]
fn tick_limit_changes_notify_then_rebuild() {
    let log = EventLog::default();
    let mut coord = coord();
    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");
    coord.add_render_listener("recorder", recorder(&log));

    coord.set_estimated_y_ticks(6);

    assert_eq!(
        *log.lock().expect("event log"),
        vec![
            RenderChangeEvent::TickLimitsChanged,
            RenderChangeEvent::TransformsRebuilt
        ]
    );
}

#[test]
fn duplicate_ids_are_rejected_and_removal_stops_delivery() {
    let log = EventLog::default();
    let mut coord = coord();
    assert!(coord.add_render_listener("recorder", recorder(&log)));
    assert!(!coord.add_render_listener("recorder", recorder(&log)));
    assert_eq!(coord.render_listener_count(), 1);

    assert!(coord.remove_render_listener("recorder"));
    assert!(!coord.remove_render_listener("recorder"));
    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");

    assert!(log.lock().expect("event log").is_empty());
}

#[test]
fn newest_listener_is_notified_first() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let mut listeners = RenderListeners::default();
    for id in ["first", "second", "third"] {
        let order = Arc::clone(&order);
        listeners.add(id, move |_| order.lock().expect("order").push(id));
    }

    listeners.notify(RenderChangeEvent::StyleChanged);

    assert_eq!(
        *order.lock().expect("order"),
        vec!["third", "second", "first"]
    );
}

#[test]
fn transform_override_notifies_listeners() {
    let log = EventLog::default();
    let mut coord = coord();
    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");
    coord.add_render_listener("recorder", recorder(&log));

    let transform = coord.transform(YAxisId::Primary).expect("transform");
    coord
        .set_transform(transform, YAxisId::Primary)
        .expect("override");

    assert_eq!(
        *log.lock().expect("event log"),
        vec![RenderChangeEvent::TransformsRebuilt]
    );
}
