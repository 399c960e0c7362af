// runs in its own process, since the infinity bound is process-wide

use sparse_model::{model::*, mps::*};

#[test]
fn test_infinity_threshold() {
    assert_eq!(get_infinity(), 1e30);

    let mut model = SparseModel::<f64>::new();
    model.set_column_name(0, "x");
    model.set_column_upper(0, 1e25);

    let write = |model: &mut SparseModel<f64>| {
        let mut buf: Vec<u8> = Vec::new();
        model.write_mps_to(&mut buf, &MpsSettings::default()).unwrap();
        String::from_utf8(buf).unwrap()
    };

    assert!(write(&mut model).contains(" UP BOUND     x         1e+25\n"));

    set_infinity(1e20);
    assert_eq!(get_infinity(), 1e20);
    assert!(!write(&mut model).contains("BOUNDS"));

    default_infinity();
    assert_eq!(get_infinity(), 1e30);
    assert!(write(&mut model).contains(" UP BOUND     x         1e+25\n"));
}
