use crate::mps::_INFINITY_DEFAULT;
use crate::utils::atomic::{AtomicF64, Ordering};
use lazy_static::lazy_static;
lazy_static! {
    static ref INFINITY: AtomicF64 = AtomicF64::new(_INFINITY_DEFAULT);
}

/// Revert the MPS infinity bound to its default value.
pub fn default_infinity() {
    INFINITY.store(_INFINITY_DEFAULT, Ordering::Relaxed);
}
/// Set the MPS infinity bound to a new value.
///
/// Values at or beyond this magnitude are written as infinite bounds.
pub fn set_infinity(v: f64) {
    INFINITY.store(v, Ordering::Relaxed);
}
/// Current MPS infinity bound.
pub fn get_infinity() -> f64 {
    INFINITY.load(Ordering::Relaxed)
}
