use coordsys_rs::api::{LabelFormat, StaticDataModel};
use coordsys_rs::core::{DataPoint, Rect, YAxisId};
use coordsys_rs::render::TextHAlign;
use coordsys_rs::{CoordSystem, CoordSystemConfig};

#[test]
fn default_format_trims_float_noise() {
    let format = LabelFormat::Default;
    assert_eq!(format.format(0.1 + 0.2), "0.3");
    assert_eq!(format.format(0.12345), "0.123");
    assert_eq!(format.format(100.0), "100");
    assert_eq!(format.format(0.0), "0");
}

#[test]
fn default_format_groups_thousands() {
    let format = LabelFormat::Default;
    assert_eq!(format.format(1_234_567.0), "1,234,567");
    assert_eq!(format.format(-1500.5), "-1,500.5");
}

#[test]
fn fixed_decimals_pad_and_round() {
    let format = LabelFormat::FixedDecimals { precision: 2 };
    assert_eq!(format.format(3.14159), "3.14");
    assert_eq!(format.format(2.0), "2.00");
    assert_eq!(format.format(1234.5), "1234.50");
}

#[test]
fn custom_formatter_is_used_verbatim() {
    let format = LabelFormat::custom(|value| format!("{value:.0}%"));
    assert_eq!(format.format(42.4), "42%");
}

#[test]
fn y_labels_follow_configured_format() {
    let model = StaticDataModel::numeric().with_series(
        YAxisId::Primary,
        vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 100.0)],
    );
    let config = CoordSystemConfig::default()
        .with_y_label_format(LabelFormat::custom(|value| format!("{value} u")));
    let mut coord = CoordSystem::with_estimated_metrics(model, config);
    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");

    let frame = coord.build_render_frame().expect("frame");
    let y_labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right && text.text != "y")
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(y_labels.first(), Some(&"0 u"));
    assert_eq!(y_labels.last(), Some(&"100 u"));
}

#[test]
fn wider_labels_grow_left_margin() {
    let model = StaticDataModel::numeric().with_series(
        YAxisId::Primary,
        vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 100.0)],
    );
    let mut coord = CoordSystem::with_estimated_metrics(model, CoordSystemConfig::default());
    coord.set_bounds(Rect::new(0, 0, 400, 300)).expect("bounds");
    let before = coord.margins().left;

    coord.set_y_label_format(LabelFormat::FixedDecimals { precision: 4 });
    assert!(coord.margins().left > before);
}
