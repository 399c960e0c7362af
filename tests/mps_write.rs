mod common;

use sparse_model::{model::*, mps::*};
use std::fs;

const INF: f64 = f64::INFINITY;

// minimize    x - 2y + x^2 + 0.5 xy
// subject to  x + 2y <= 10
//             1 <= 3x <= 5
//             -y = 2
//             0 <= x <= 4, -1 <= y <= 1, y integer
fn small_model() -> SparseModel<f64> {
    let mut model = SparseModel::<f64>::new();
    model.add_column(&[], &[], 0.0, 4.0, 1.0, "x", false);
    model.add_column(&[], &[], -1.0, 1.0, -2.0, "y", true);
    model.add_row(&[0, 1], &[1.0, 2.0], -INF, 10.0, "lim");
    model.add_row(&[0], &[3.0], 1.0, 5.0, "rng");
    model.add_row(&[1], &[-1.0], 2.0, 2.0, "");
    model.set_quadratic_element(0, 0, 2.0);
    model.set_quadratic_element(1, 0, 0.5);
    model
}

const SMALL_MODEL_MPS: &str = concat!(
    "NAME          BLANK\n",
    "ROWS\n",
    " N  OBJROW\n",
    " L  lim\n",
    " L  rng\n",
    " E  R0000002\n",
    "COLUMNS\n",
    "    x         OBJROW    1              lim       1\n",
    "    x         rng       3\n",
    "    MARKER    'MARKER'                 'INTORG'\n",
    "    y         OBJROW    -2             lim       2\n",
    "    y         R0000002  -1\n",
    "    MARKER    'MARKER'                 'INTEND'\n",
    "RHS\n",
    "    RHS       lim       10             rng       5\n",
    "    RHS       R0000002  2\n",
    "RANGES\n",
    "    RANGE     rng       4\n",
    "BOUNDS\n",
    " UP BOUND     x         4\n",
    " LO BOUND     y         -1\n",
    " UP BOUND     y         1\n",
    "QUADOBJ\n",
    "    x         x         2\n",
    "    x         y         0.5\n",
    "ENDATA\n",
);

fn write_to_string(model: &mut SparseModel<f64>, settings: &MpsSettings) -> String {
    let mut buf: Vec<u8> = Vec::new();
    model.write_mps_to(&mut buf, settings).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_write_small_model() {
    common::init();
    let mut model = small_model();
    let text = write_to_string(&mut model, &MpsSettings::default());
    assert_eq!(text, SMALL_MODEL_MPS);
}

#[test]
fn test_write_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.mps");

    let mut model = small_model();
    model.write_mps(&path, &MpsSettings::default()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), SMALL_MODEL_MPS);
}

#[test]
fn test_compression_falls_back_to_plain() {
    common::init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.mps.gz");

    let settings = MpsSettingsBuilder::default()
        .compression(Compression::Gzip)
        .build()
        .unwrap();
    let mut model = small_model();
    model.write_mps(&path, &settings).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), SMALL_MODEL_MPS);
}

#[test]
fn test_write_errors() {
    let mut model = small_model();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("small.mps");
    let result = model.write_mps(&path, &MpsSettings::default());
    assert!(matches!(result, Err(MpsError::Io(_))));

    let settings = MpsSettings {
        number_across: 3,
        ..MpsSettings::default()
    };
    let mut buf: Vec<u8> = Vec::new();
    let result = model.write_mps_to(&mut buf, &settings);
    assert!(matches!(result, Err(MpsError::Settings(_))));
    assert!(buf.is_empty());
}

#[test]
fn test_one_pair_per_line() {
    let mut model = small_model();
    let settings = MpsSettingsBuilder::default()
        .number_across(1)
        .problem_name("SMALL".to_string())
        .objective_name("COST".to_string())
        .build()
        .unwrap();
    let text = write_to_string(&mut model, &settings);

    assert!(text.starts_with("NAME          SMALL\n"));
    assert!(text.contains(" N  COST\n"));
    assert!(text.contains("    x         COST      1\n"));
    assert!(text.contains("    x         lim       1\n"));
    assert!(text.contains("    RHS       lim       10\n"));
    assert!(text.contains("    RHS       rng       5\n"));
}

#[test]
fn test_maximize_writes_objsense() {
    let mut model = small_model();
    model.set_optimization_direction(ObjectiveSense::Maximize);
    let text = write_to_string(&mut model, &MpsSettings::default());

    assert!(text.starts_with("NAME          BLANK\nOBJSENSE\n    MAX\nROWS\n"));
}

#[test]
fn test_bound_types() {
    let mut model = SparseModel::<f64>::new();
    model.set_column_bounds(0, -INF, INF);
    model.set_column_bounds(1, -INF, 3.0);
    model.set_column_bounds(2, 2.5, 2.5);
    model.set_column_bounds(3, 0.0, 1.0);
    model.set_column_is_integer(3, true);
    model.set_column_bounds(4, 1.0, INF);
    // beyond the infinity threshold
    model.set_column_bounds(5, -1e31, 1e30);
    model.set_row_bounds(0, -INF, INF);

    let text = write_to_string(&mut model, &MpsSettings::default());

    assert!(text.contains(" N  R0000000\n"));
    assert!(text.contains(" FR BOUND     C0000000\n"));
    assert!(text.contains(" MI BOUND     C0000001\n"));
    assert!(text.contains(" UP BOUND     C0000001  3\n"));
    assert!(text.contains(" FX BOUND     C0000002  2.5\n"));
    assert!(text.contains(" BV BOUND     C0000003\n"));
    assert!(text.contains(" LO BOUND     C0000004  1\n"));
    assert!(text.contains(" FR BOUND     C0000005\n"));
    assert!(!text.contains("RANGES"));
    assert!(!text.contains("QUADOBJ"));

    // empty columns are still declared
    assert!(text.contains("    C0000000  OBJROW    0\n"));
}

#[test]
fn test_number_formats() {
    let mut model = SparseModel::<f64>::new();
    model.add_row(&[0], &[0.1], -INF, 1.0, "r");
    model.set_column_name(0, "x");

    let settings = MpsSettingsBuilder::default()
        .format(MpsFormat::ExtraPrecision)
        .build()
        .unwrap();
    let text = write_to_string(&mut model, &settings);
    assert!(text.contains("    x         r         0.10000000000000001\n"));

    let settings = MpsSettingsBuilder::default()
        .format(MpsFormat::IeeeHex)
        .build()
        .unwrap();
    let text = write_to_string(&mut model, &settings);
    assert!(text.contains("    RHS       r         3FF0000000000000\n"));
}

#[test]
fn test_symbolic_values_are_resolved() {
    let mut model = SparseModel::<f64>::new();
    model.add_row(&[0], &[1.0], -INF, 1.0, "r");
    model.set_column_name(0, "x");
    model.set_element_string(0, 0, "coef");
    model.set_column_objective_string(0, "cost");
    model.associate_element("coef", 4.0);
    model.associate_element("cost", 0.25);

    let text = write_to_string(&mut model, &MpsSettings::default());
    assert!(text.contains("    x         OBJROW    0.25           r         4\n"));
}

#[test]
fn test_gap_rows_and_columns_are_written() {
    let mut model = SparseModel::<f64>::new();
    model.set_element(2, 1, 1.0);
    let text = write_to_string(&mut model, &MpsSettings::default());

    assert!(text.contains(" N  R0000000\n"));
    assert!(text.contains(" N  R0000001\n"));
    assert!(text.contains(" N  R0000002\n"));
    assert!(text.contains("    C0000000  OBJROW    0\n"));
    assert!(text.contains("    C0000001  R0000002  1\n"));
}

#[test]
fn test_quadratic_pair_written_once() {
    let mut model = SparseModel::<f64>::new();
    model.set_column_name(0, "x");
    model.set_column_name(1, "y");
    model.set_quadratic_element(0, 1, 2.0);
    model.set_quadratic_element(1, 0, 2.0);
    model.set_quadratic_element(1, 1, 1.0);
    assert_eq!(model.number_quadratic_elements(), 3);

    let text = write_to_string(&mut model, &MpsSettings::default());
    let quadobj: Vec<&str> = text
        .lines()
        .skip_while(|line| *line != "QUADOBJ")
        .collect();
    assert_eq!(
        quadobj,
        vec![
            "QUADOBJ",
            "    x         y         2",
            "    y         y         1",
            "ENDATA",
        ]
    );

    // the upper triangle entry is written when the two differ
    model.set_quadratic_element(1, 0, 5.0);
    let text = write_to_string(&mut model, &MpsSettings::default());
    assert!(text.contains("    x         y         2\n"));
    assert!(!text.contains("    x         y         5\n"));
}

#[test]
fn test_crossed_row_bounds_keep_upper() {
    common::init();
    let mut model = SparseModel::<f64>::new();
    model.add_row(&[0], &[1.0], 5.0, 3.0, "bad");
    model.set_column_name(0, "x");

    let text = write_to_string(&mut model, &MpsSettings::default());
    assert!(text.contains(" L  bad\n"));
    assert!(text.contains("    RHS       bad       3\n"));
    assert!(!text.contains("RANGES"));
}
