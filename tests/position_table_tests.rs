use approx::assert_relative_eq;
use graph_range_slider::core::{PositionTable, nearest_index};

#[test]
fn table_for_five_bars_pins_both_extremes() {
    let table = PositionTable::compute(112.0, 5, 8.0);

    assert_eq!(table.len(), 6);
    assert_eq!(table.last_index(), Some(5));
    assert_relative_eq!(table.stride(), 16.0);
    assert_eq!(table.as_slice(), &[0.0, 24.0, 40.0, 56.0, 72.0, 96.0]);
}

#[test]
fn table_with_zero_radius_is_a_plain_linear_stride() {
    let table = PositionTable::compute(100.0, 4, 0.0);
    assert_eq!(table.as_slice(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
}

#[test]
fn empty_series_yields_empty_table() {
    let table = PositionTable::compute(320.0, 0, 8.0);
    assert!(table.is_empty());
    assert_eq!(table.last_index(), None);
    assert_eq!(table.first(), None);
}

#[test]
fn non_finite_inputs_yield_empty_table() {
    assert!(PositionTable::compute(f64::NAN, 3, 8.0).is_empty());
    assert!(PositionTable::compute(f64::INFINITY, 3, 8.0).is_empty());
    assert!(PositionTable::compute(100.0, 3, f64::NAN).is_empty());
}

#[test]
fn container_narrower_than_padding_stays_non_decreasing() {
    let table = PositionTable::compute(10.0, 3, 8.0);
    assert_eq!(table.as_slice(), &[0.0, 8.0, 8.0, 16.0]);
    assert_relative_eq!(table.stride(), 0.0);
}

#[test]
fn single_bar_produces_two_boundaries() {
    let table = PositionTable::compute(48.0, 1, 8.0);
    assert_eq!(table.as_slice(), &[0.0, 32.0]);
}

#[test]
fn nearest_index_prefers_lowest_index_on_ties() {
    let positions = [0.0, 10.0, 20.0];
    assert_eq!(nearest_index(&positions, 5.0), Some(0));
    assert_eq!(nearest_index(&positions, 15.0), Some(1));
}

#[test]
fn nearest_index_clamps_outside_coordinates_to_the_ends() {
    let table = PositionTable::compute(112.0, 5, 8.0);
    assert_eq!(nearest_index(table.as_slice(), -500.0), Some(0));
    assert_eq!(nearest_index(table.as_slice(), 41.0), Some(2));
    assert_eq!(nearest_index(table.as_slice(), 9_000.0), Some(5));
}

#[test]
fn nearest_index_rejects_empty_table_and_non_finite_target() {
    assert_eq!(nearest_index(&[], 3.0), None);
    assert_eq!(nearest_index(&[0.0, 1.0], f64::NAN), None);
}
