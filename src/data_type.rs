use num::Float;
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// Gathers [`Float`](num::Float), `FromStr`, `Debug`, and `Display` in one trait.
/// Every type that is used as number in an expression tree needs to implement at least this,
/// which is the case for `f32` and `f64`.
pub trait FloatData: Float + FromStr + Debug + Display {}
impl<T: Float + FromStr + Debug + Display> FloatData for T {}
