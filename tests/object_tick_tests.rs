use coordsys_rs::core::ObjectTickLocator;

#[test]
fn every_index_fits_under_limit() {
    assert_eq!(ObjectTickLocator::new(0, 4, 10).locate(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn stride_doubles_until_indices_fit() {
    assert_eq!(ObjectTickLocator::new(0, 10, 4).locate(), vec![0, 4, 8]);
    assert_eq!(ObjectTickLocator::new(0, 10, 6).locate(), vec![0, 2, 4, 6, 8, 10]);
}

#[test]
fn reversed_bounds_are_ordered() {
    let locator = ObjectTickLocator::new(5, 2, 10);
    assert_eq!(locator.first(), 2);
    assert_eq!(locator.last(), 5);
    assert_eq!(locator.locate(), vec![2, 3, 4, 5]);
}

#[test]
fn force_all_ignores_limit() {
    let ticks = ObjectTickLocator::new(0, 9, 2).with_force_all(true).locate();
    assert_eq!(ticks.len(), 10);
}

#[test]
fn zero_limit_is_treated_as_one() {
    assert_eq!(ObjectTickLocator::new(0, 3, 0).locate(), vec![0]);
}

#[test]
fn pairs_carry_fixed_y() {
    assert_eq!(
        ObjectTickLocator::new(1, 2, 10).x_pairs(0.5),
        vec![1.0, 0.5, 2.0, 0.5]
    );
}
