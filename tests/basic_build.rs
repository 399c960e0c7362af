mod common;

use sparse_model::model::*;

const INF: f64 = f64::INFINITY;

#[test]
fn test_add_row_elements() {
    common::init();

    let mut model = SparseModel::<f64>::new();
    model.add_row(&[0, 2], &[1.0, 5.0], -INF, INF, "");
    model.add_row(&[1], &[3.0], -INF, INF, "");

    assert_eq!(model.get_element(0, 2), 5.0);
    assert_eq!(model.get_element(1, 1), 3.0);
    assert_eq!(model.get_element(1, 0), 0.0);
    assert_eq!(model.number_rows(), 2);
    assert_eq!(model.number_columns(), 3);
    assert_eq!(model.number_elements(), 3);
}

#[test]
fn test_add_column_attributes() {
    let mut model = SparseModel::<f64>::new();
    let col = model.add_column(&[0, 3], &[1.0, 2.0], -1.0, 5.0, 7.0, "x", true);

    assert_eq!(col, 0);
    assert_eq!(model.number_rows(), 4);
    assert_eq!(model.number_columns(), 1);
    assert_eq!(model.column_lower(0), -1.0);
    assert_eq!(model.column_upper(0), 5.0);
    assert_eq!(model.column_objective(0), 7.0);
    assert!(model.column_is_integer(0));
    assert_eq!(model.column_name(0), "x");
    assert_eq!(model.column("x"), Some(0));

    // rows implied by the column have default bounds
    assert_eq!(model.row_lower(3), -INF);
    assert_eq!(model.row_upper(3), INF);
    assert_eq!(model.get_element(3, 0), 2.0);
}

#[test]
fn test_repeated_column_in_row_keeps_last() {
    let mut model = SparseModel::<f64>::new();
    model.add_row(&[1, 1], &[2.0, 9.0], -INF, INF, "");

    assert_eq!(model.number_elements(), 1);
    assert_eq!(model.get_element(0, 1), 9.0);
}

#[test]
fn test_set_row_bounds_grows() {
    let mut model = SparseModel::<f64>::new();
    model.set_row_bounds(5, -10.0, 10.0);

    assert_eq!(model.number_rows(), 6);
    assert_eq!(model.number_columns(), 0);
    for row in 0..5 {
        assert_eq!(model.row_lower(row), -INF);
        assert_eq!(model.row_upper(row), INF);
        assert_eq!(model.row_name(row), "");
    }
    assert_eq!(model.row_lower(5), -10.0);
    assert_eq!(model.row_upper(5), 10.0);

    // attribute setters do not change the build mode
    assert_eq!(model.mode(), BuildMode::Unset);
}

#[test]
fn test_getter_defaults() {
    let model = SparseModel::<f64>::new();

    assert_eq!(model.row_lower(3), -INF);
    assert_eq!(model.row_upper(3), INF);
    assert_eq!(model.column_lower(7), 0.0);
    assert_eq!(model.column_upper(7), INF);
    assert_eq!(model.column_objective(7), 0.0);
    assert!(!model.column_is_integer(7));
    assert_eq!(model.column_name(7), "");
    assert_eq!(model.get_element(2, 2), 0.0);
    assert_eq!(model.row("missing"), None);
    assert_eq!(model.column("missing"), None);
}

#[test]
fn test_column_setters_grow() {
    let mut model = SparseModel::<f64>::new();
    model.set_column_objective(2, 3.0);
    model.set_column_is_integer(4, true);
    model.set_column_bounds(1, -2.0, 2.0);
    model.set_column_lower(0, 1.0);
    model.set_column_upper(0, 8.0);

    assert_eq!(model.number_columns(), 5);
    assert_eq!(model.column_objective(2), 3.0);
    assert!(model.column_is_integer(4));
    assert!(!model.column_is_integer(3));
    assert_eq!(model.column_lower(1), -2.0);
    assert_eq!(model.column_upper(1), 2.0);
    assert_eq!(model.column_lower(0), 1.0);
    assert_eq!(model.column_upper(0), 8.0);
    assert_eq!(model.column_upper(3), INF);
}

#[test]
fn test_set_element_upsert() {
    let mut model = SparseModel::<f64>::new();
    model.set_element(1, 2, 4.0);
    assert_eq!(model.number_elements(), 1);
    assert_eq!(model.number_rows(), 2);
    assert_eq!(model.number_columns(), 3);

    // same value, then a new value: count unchanged
    model.set_element(1, 2, 4.0);
    assert_eq!(model.number_elements(), 1);
    model.set_element(1, 2, -1.5);
    assert_eq!(model.number_elements(), 1);
    assert_eq!(model.get_element(1, 2), -1.5);
}

#[test]
fn test_element_mut() {
    let mut model = SparseModel::<f64>::new();
    model.set_element(0, 0, 1.0);

    if let Some(v) = model.element_mut(0, 0) {
        *v += 2.0;
    }
    assert_eq!(model.get_element(0, 0), 3.0);
    assert!(model.element_mut(5, 5).is_none());

    model.set_element_string(0, 1, "a");
    assert!(model.element_mut(0, 1).is_none());
}

#[test]
fn test_build_mode_transitions() {
    common::init();

    // rows, then column access
    let mut model = SparseModel::<f64>::new();
    assert_eq!(model.mode(), BuildMode::Unset);
    model.add_row(&[0], &[1.0], -INF, INF, "");
    assert_eq!(model.mode(), BuildMode::Rows);
    model.first_in_row(0);
    assert_eq!(model.mode(), BuildMode::Rows);
    model.first_in_column(0);
    assert_eq!(model.mode(), BuildMode::Linked);

    // columns, then a row
    let mut model = SparseModel::<f64>::new();
    model.add_column(&[0], &[1.0], 0.0, INF, 0.0, "", false);
    assert_eq!(model.mode(), BuildMode::Columns);
    model.add_row(&[0], &[2.0], -INF, INF, "");
    assert_eq!(model.mode(), BuildMode::Linked);

    // columns, then direct access
    let mut model = SparseModel::<f64>::new();
    model.add_column(&[0], &[1.0], 0.0, INF, 0.0, "", false);
    model.get_element(0, 0);
    assert_eq!(model.mode(), BuildMode::Linked);

    // direct access on an empty model changes nothing
    let model = SparseModel::<f64>::new();
    model.get_element(0, 0);
    assert_eq!(model.mode(), BuildMode::Unset);

    // element setters need both orientations
    let mut model = SparseModel::<f64>::new();
    model.set_element(0, 0, 1.0);
    assert_eq!(model.mode(), BuildMode::Linked);
}

#[test]
fn test_row_and_column_names() {
    let mut model = SparseModel::<f64>::new();
    model.add_row(&[0], &[1.0], -INF, INF, "cap");
    assert_eq!(model.row("cap"), Some(0));

    model.set_row_name(0, "limit");
    assert_eq!(model.row("cap"), None);
    assert_eq!(model.row("limit"), Some(0));
    assert_eq!(model.row_name(0), "limit");

    model.set_row_name(0, "");
    assert_eq!(model.row("limit"), None);
    assert_eq!(model.row_name(0), "");

    // the most recently named column is found
    model.set_column_name(0, "x");
    model.set_column_name(3, "x");
    assert_eq!(model.column("x"), Some(3));
    assert_eq!(model.number_columns(), 4);
}

#[test]
fn test_optimization_direction() {
    let mut model = SparseModel::<f64>::new();
    assert_eq!(model.optimization_direction(), ObjectiveSense::Minimize);
    model.set_optimization_direction(ObjectiveSense::Maximize);
    assert_eq!(model.optimization_direction(), ObjectiveSense::Maximize);
}

#[test]
fn test_clone_is_independent() {
    let mut model = SparseModel::<f64>::new();
    model.add_row(&[0, 1], &[1.0, 2.0], 0.0, 4.0, "r");

    let mut copy = model.clone();
    copy.set_element(0, 1, 7.0);
    copy.set_row_name(0, "s");
    copy.add_row(&[2], &[1.0], 0.0, 1.0, "");

    assert_eq!(model.get_element(0, 1), 2.0);
    assert_eq!(model.row("r"), Some(0));
    assert_eq!(model.number_rows(), 1);
    assert_eq!(copy.get_element(0, 1), 7.0);
    assert_eq!(copy.row("s"), Some(0));
    assert_eq!(copy.number_rows(), 2);
}

#[test]
fn test_with_capacity_and_f32() {
    let mut model = SparseModel::<f32>::with_capacity(4, 4, 2);
    for k in 0..6 {
        model.set_element(k, k, k as f32);
    }
    assert_eq!(model.number_elements(), 6);
    assert_eq!(model.get_element(5, 5), 5.0f32);
}
