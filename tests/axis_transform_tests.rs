use approx::assert_relative_eq;
use coordsys_rs::CoordError;
use coordsys_rs::core::{
    Axis, AxisOrientation, AxisRange, AxisTransform, DataPoint, Margins, PixelPoint, Rect,
};

fn fixture_axes() -> (Axis, Axis) {
    let mut x_axis = Axis::new(AxisOrientation::Horizontal, AxisRange::normalized(100.0, 0.0));
    x_axis.set_length_px(170);
    let mut y_axis = Axis::new(AxisOrientation::Vertical, AxisRange::normalized(50.0, -50.0));
    y_axis.set_length_px(80);
    (x_axis, y_axis)
}

fn fixture_transform() -> AxisTransform {
    let (x_axis, y_axis) = fixture_axes();
    AxisTransform::for_axes(
        Rect::new(10, 20, 200, 100),
        Margins::new(20, 10, 5, 15),
        x_axis,
        y_axis,
    )
    .expect("valid axes")
}

#[test]
fn transform_coefficients_follow_axes_and_margins() {
    let transform = fixture_transform();

    assert_relative_eq!(transform.scale_x, 1.7, epsilon = 1e-12);
    assert_relative_eq!(transform.translate_x, 30.0, epsilon = 1e-12);
    assert_relative_eq!(transform.scale_y, -0.8, epsilon = 1e-12);
    assert_relative_eq!(transform.translate_y, 65.0, epsilon = 1e-12);
}

#[test]
fn range_corners_land_on_plot_area_corners() {
    let transform = fixture_transform();

    let top_right = transform.apply(DataPoint::new(100.0, 50.0));
    assert_relative_eq!(top_right.x, 200.0, epsilon = 1e-9);
    assert_relative_eq!(top_right.y, 25.0, epsilon = 1e-9);

    let bottom_left = transform.apply(DataPoint::new(0.0, -50.0));
    assert_relative_eq!(bottom_left.x, 30.0, epsilon = 1e-9);
    assert_relative_eq!(bottom_left.y, 105.0, epsilon = 1e-9);
}

#[test]
fn pixel_round_trip_recovers_data_point() {
    let transform = fixture_transform();
    let original = DataPoint::new(42.5, -17.25);

    let pixel = transform.apply(original);
    let recovered = transform.invert(pixel).expect("invertible");

    assert!((recovered.x - original.x).abs() <= 1e-9);
    assert!((recovered.y - original.y).abs() <= 1e-9);
}

#[test]
fn inverse_composes_to_identity() {
    let transform = fixture_transform();
    let identity = transform.compose(transform.inverse().expect("invertible"));

    assert_relative_eq!(identity.scale_x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(identity.scale_y, 1.0, epsilon = 1e-12);
    assert_relative_eq!(identity.translate_x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(identity.translate_y, 0.0, epsilon = 1e-9);
}

#[test]
fn pairs_transform_in_place_order() {
    let transform = fixture_transform();
    let pixels = transform.apply_pairs(&[0.0, -50.0, 100.0, 50.0, 7.0]);

    assert_eq!(pixels.len(), 4);
    assert_relative_eq!(pixels[0], 30.0, epsilon = 1e-9);
    assert_relative_eq!(pixels[3], 25.0, epsilon = 1e-9);
}

#[test]
fn zero_length_axis_is_rejected() {
    let (mut x_axis, y_axis) = fixture_axes();
    x_axis.set_length_px(0);

    let result = AxisTransform::for_axes(
        Rect::new(0, 0, 100, 100),
        Margins::new(0, 0, 0, 0),
        x_axis,
        y_axis,
    );
    assert!(matches!(result, Err(CoordError::InvalidData(_))));
}

#[test]
fn degenerate_scale_is_not_invertible() {
    let flat = AxisTransform::new(0.0, -1.0, 0.0, 0.0);
    assert!(!flat.is_invertible());
    assert!(matches!(
        flat.invert(PixelPoint::new(1.0, 1.0)),
        Err(CoordError::NonInvertibleTransform)
    ));
}

#[test]
fn axis_maps_values_from_its_start() {
    let (x_axis, _) = fixture_axes();
    assert_relative_eq!(x_axis.pixel_for_value(50.0).expect("pixel"), 85.0, epsilon = 1e-9);
    assert_relative_eq!(x_axis.value_for_pixel(85.0).expect("value"), 50.0, epsilon = 1e-9);
    assert!(x_axis.pixel_for_value(f64::NAN).is_err());
}
