use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display, LowerExp};

/// Core traits for floating point values held in a model.
///
/// This trait defines the bounds for `FloatT`, which is used throughout
/// for element values, bounds and objective coefficients.
pub trait CoreFloatT:
    'static + Send + Float + NumAssign + Default + FromPrimitive + Display + LowerExp + Debug + Sized
{
}

impl<T> CoreFloatT for T where
    T: 'static
        + Send
        + Float
        + NumAssign
        + Default
        + FromPrimitive
        + Display
        + LowerExp
        + Debug
        + Sized
{
}

cfg_if::cfg_if! {
    if #[cfg(feature="serde")] {
        /// Main trait for floating point types stored in a model.
        ///
        /// Implementations are provided for any type satisfying the bounds of
        /// `CoreFloatT`, which in practice means f32 and f64.  When compiled with
        /// the "serde" feature the type must also be serializable so that model
        /// snapshots can be written to and read from JSON.
        ///
        /// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
        pub trait FloatT: CoreFloatT + serde::Serialize + serde::de::DeserializeOwned {}
        impl<T> FloatT for T where T: CoreFloatT + serde::Serialize + serde::de::DeserializeOwned {}
    } else {
        /// Main trait for floating point types stored in a model.
        ///
        /// `FloatT` relies on [`num_traits`](num_traits) for most of its constituent trait bounds.
        pub trait FloatT: CoreFloatT {}
        impl<T> FloatT for T where T: CoreFloatT {}
    }
}
