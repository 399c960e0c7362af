mod common;

use sparse_model::model::*;

const INF: f64 = f64::INFINITY;

fn three_rows() -> SparseModel<f64> {
    let mut model = SparseModel::<f64>::new();
    model.add_row(&[0, 1], &[1.0, 2.0], -INF, 4.0, "r0");
    model.add_row(&[1, 2], &[3.0, 4.0], 1.0, 1.0, "r1");
    model.add_row(&[0, 2], &[5.0, 6.0], 0.0, INF, "r2");
    model
}

fn column_rows(model: &SparseModel<f64>, col: usize) -> Vec<usize> {
    let mut rows = Vec::new();
    let mut link = model.first_in_column(col);
    while !link.is_end() {
        rows.push(link.row);
        link = model.next(&link);
    }
    rows
}

#[test]
fn test_delete_last_row() {
    common::init();
    let mut model = three_rows();

    assert!(model.delete_row(2));
    assert_eq!(model.number_rows(), 2);
    assert_eq!(model.number_elements(), 4);
    assert_eq!(model.get_element(2, 0), 0.0);
    assert_eq!(model.row("r2"), None);
    assert_eq!(column_rows(&model, 0), vec![0]);
    assert_eq!(column_rows(&model, 2), vec![1]);
}

#[test]
fn test_delete_inner_row() {
    let mut model = three_rows();

    assert!(!model.delete_row(0));
    assert_eq!(model.number_rows(), 3);
    assert_eq!(model.number_elements(), 4);
    for col in 0..3 {
        assert_eq!(model.get_element(0, col), 0.0);
    }
    assert!(model.first_in_row(0).is_end());
    assert_eq!(column_rows(&model, 0), vec![2]);
    assert_eq!(column_rows(&model, 1), vec![1]);

    // attributes return to their defaults
    assert_eq!(model.row_lower(0), -INF);
    assert_eq!(model.row_upper(0), INF);
    assert_eq!(model.row("r0"), None);
    assert_eq!(model.row("r1"), Some(1));

    // out of range
    assert!(!model.delete_row(10));
    assert_eq!(model.number_rows(), 3);
}

#[test]
fn test_delete_column() {
    let mut model = three_rows();
    model.set_column_objective(1, 2.0);

    assert!(!model.delete_column(1));
    assert_eq!(model.number_columns(), 3);
    assert_eq!(model.number_elements(), 4);
    assert_eq!(model.column_objective(1), 0.0);
    assert_eq!(model.get_element(1, 1), 0.0);

    let mut link = model.first_in_row(1);
    assert_eq!(link.column, 2);
    link = model.next(&link);
    assert!(link.is_end());

    assert!(model.delete_column(2));
    assert_eq!(model.number_columns(), 2);
    assert_eq!(model.number_elements(), 2);
}

#[test]
fn test_delete_column_removes_quadratic_terms() {
    let mut model = SparseModel::<f64>::new();
    model.set_quadratic_element(0, 0, 1.0);
    model.set_quadratic_element(0, 1, 2.0);
    model.set_quadratic_element(1, 0, 3.0);
    model.set_quadratic_element(1, 1, 4.0);

    assert!(model.delete_column(1));
    assert_eq!(model.number_columns(), 1);
    assert_eq!(model.number_quadratic_elements(), 1);
    assert_eq!(model.get_quadratic_element(0, 0), 1.0);
    assert_eq!(model.get_quadratic_element(1, 0), 0.0);
}

#[test]
fn test_pack_rows_and_columns() {
    common::init();
    let mut model = SparseModel::<f64>::new();
    model.add_row(&[0, 1], &[1.0, 2.0], -INF, 4.0, "r0");
    model.add_row(&[], &[], -INF, INF, "r1");
    model.add_row(&[1, 3], &[3.0, 4.0], 1.0, 1.0, "r2");
    // empty but infeasible, so kept
    model.set_row_bounds(3, 5.0, 1.0);
    model.set_column_objective(4, 1.0);
    model.set_column_bounds(5, 0.0, 1.0);
    assert_eq!(model.number_columns(), 6);

    assert_eq!(model.pack_rows(), 1);
    assert_eq!(model.number_rows(), 3);
    assert_eq!(model.row("r2"), Some(1));
    assert_eq!(model.row("r1"), None);
    assert_eq!(model.row_lower(2), 5.0);
    assert_eq!(model.get_element(1, 3), 4.0);

    // columns 2 and 5 are empty with zero objective
    assert_eq!(model.pack_columns(), 2);
    assert_eq!(model.number_columns(), 4);
    assert_eq!(model.number_elements(), 4);
    assert_eq!(model.get_element(1, 2), 4.0);
    assert_eq!(model.get_element(1, 1), 3.0);
    assert_eq!(model.column_objective(3), 1.0);
    assert_eq!(column_rows(&model, 2), vec![1]);
    assert_eq!(column_rows(&model, 1), vec![0, 1]);

    // nothing left to remove
    assert_eq!(model.pack(), 0);
}

#[test]
fn test_pack_total() {
    let mut model = SparseModel::<f64>::new();
    model.set_element(2, 2, 1.0);
    assert_eq!(model.pack(), 4);
    assert_eq!(model.number_rows(), 1);
    assert_eq!(model.number_columns(), 1);
    assert_eq!(model.get_element(0, 0), 1.0);
}

#[test]
fn test_pack_keeps_symbolic_rows() {
    let mut model = SparseModel::<f64>::new();
    model.set_row_lower_string(0, "lb");
    model.set_row_bounds(1, 0.0, 1.0);

    assert_eq!(model.pack_rows(), 1);
    assert_eq!(model.number_rows(), 1);
    assert_eq!(model.row_lower_as_string(0), Some("lb"));
}

#[test]
fn test_pack_relocates_symbolic_elements() {
    let mut model = SparseModel::<f64>::new();
    model.set_element_string(2, 1, "s");
    model.associate_element("s", 3.0);

    assert_eq!(model.pack_rows(), 2);
    assert_eq!(model.get_element_as_string(0, 1), Some("s"));
    assert_eq!(model.get_element(0, 1), 3.0);
}

#[test]
fn test_pack_renumbers_quadratic_terms() {
    let mut model = SparseModel::<f64>::new();
    model.set_element(0, 1, 1.0);
    model.set_quadratic_element(2, 2, 5.0);
    model.set_quadratic_element(1, 2, 6.0);

    // only column 0 is empty
    assert_eq!(model.pack_columns(), 1);
    assert_eq!(model.number_columns(), 2);
    assert_eq!(model.get_element(0, 0), 1.0);
    assert_eq!(model.get_quadratic_element(1, 1), 5.0);
    assert_eq!(model.get_quadratic_element(0, 1), 6.0);
    assert_eq!(model.number_quadratic_elements(), 2);
}

#[test]
fn test_shared_name_survives_removal() {
    let mut model = SparseModel::<f64>::new();
    model.add_row(&[0], &[1.0], -INF, 1.0, "cap");
    model.add_row(&[0], &[2.0], -INF, 2.0, "cap");
    model.add_row(&[0], &[3.0], -INF, 3.0, "cap");
    assert_eq!(model.row("cap"), Some(2));

    // the last holder goes; the name passes to the next one down
    assert!(model.delete_row(2));
    assert_eq!(model.row("cap"), Some(1));

    model.set_row_name(1, "other");
    assert_eq!(model.row("cap"), Some(0));
    assert_eq!(model.row_name(0), "cap");

    assert!(!model.delete_row(0));
    assert_eq!(model.row("cap"), None);
    assert_eq!(model.row("other"), Some(1));

    // columns 1 and 2 share a name
    assert_eq!(model.number_columns(), 1);
    model.add_column(&[1], &[1.0], 0.0, INF, 0.0, "x", false);
    model.add_column(&[1], &[1.0], 0.0, INF, 0.0, "x", false);
    assert_eq!(model.column("x"), Some(2));
    assert!(model.delete_column(2));
    assert_eq!(model.column("x"), Some(1));
    assert!(model.delete_column(1));
    assert_eq!(model.column("x"), None);
}
