// std has no atomic float, so store the bit pattern in an AtomicU64

pub(crate) use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicU64;

#[derive(Debug)]
pub(crate) struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    pub(crate) fn new(v: f64) -> Self {
        Self {
            bits: AtomicU64::new(v.to_bits()),
        }
    }

    pub(crate) fn load(&self, order: Ordering) -> f64 {
        f64::from_bits(self.bits.load(order))
    }

    pub(crate) fn store(&self, v: f64, order: Ordering) {
        self.bits.store(v.to_bits(), order)
    }
}

#[test]
fn test_atomic_f64() {
    let x = AtomicF64::new(1.5);
    assert_eq!(x.load(Ordering::Relaxed), 1.5);
    x.store(-2.25e30, Ordering::Relaxed);
    assert_eq!(x.load(Ordering::Relaxed), -2.25e30);
}
