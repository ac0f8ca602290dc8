use coordsys_rs::api::StaticDataModel;
use coordsys_rs::core::{DataPoint, Rect, YAxisId};
use coordsys_rs::{CoordSystem, CoordSystemConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn data_pixel_round_trip_property(
        x_min in -10_000.0f64..10_000.0,
        x_span in 0.1f64..10_000.0,
        y_min in -10_000.0f64..10_000.0,
        y_span in 0.1f64..10_000.0,
        x_factor in 0.0f64..1.0,
        y_factor in 0.0f64..1.0
    ) {
        let model = StaticDataModel::numeric().with_series(
            YAxisId::Primary,
            vec![
                DataPoint::new(x_min, y_min),
                DataPoint::new(x_min + x_span, y_min + y_span),
            ],
        );
        let mut coord = CoordSystem::with_estimated_metrics(model, CoordSystemConfig::default());
        coord.set_bounds(Rect::new(0, 0, 1024, 768)).expect("valid bounds");

        let transform = coord.transform(YAxisId::Primary).expect("transform");
        let original = DataPoint::new(x_min + x_factor * x_span, y_min + y_factor * y_span);
        let recovered = transform
            .invert(transform.apply(original))
            .expect("invertible");

        prop_assert!((recovered.x - original.x).abs() <= 1e-6);
        prop_assert!((recovered.y - original.y).abs() <= 1e-6);
    }

    #[test]
    fn range_maps_inside_outer_bounds(
        y_min in -1_000.0f64..1_000.0,
        y_span in 0.1f64..1_000.0
    ) {
        let model = StaticDataModel::numeric().with_series(
            YAxisId::Primary,
            vec![DataPoint::new(0.0, y_min), DataPoint::new(10.0, y_min + y_span)],
        );
        let mut coord = CoordSystem::with_estimated_metrics(model, CoordSystemConfig::default());
        let bounds = Rect::new(0, 0, 800, 600);
        coord.set_bounds(bounds).expect("valid bounds");

        let transform = coord.transform(YAxisId::Primary).expect("transform");
        let top = transform.apply(DataPoint::new(10.0, y_min + y_span));
        let bottom = transform.apply(DataPoint::new(0.0, y_min));

        prop_assert!(top.y < bottom.y);
        prop_assert!(top.y >= 0.0 && bottom.y <= f64::from(bounds.height));
        prop_assert!(top.x <= f64::from(bounds.width));
    }
}
