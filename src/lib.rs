//! A ternary operator substitute and a few close relatives.
//!
//! - [`if_`] / [`TernaryOperator::q`] pick one of two values.
//! - [`if_func`] picks a value and feeds it through a transform.
//! - [`iff`] runs one of two producers, leaving the other untouched.
//! - [`third`] and [`third_ext`] pick one of three values from a string discriminant.

pub mod constants;
pub mod error;
pub mod operator;
pub mod options;
pub mod third;

pub use error::{InvalidConfiguration, TernaryError};
pub use operator::{if_, if_func, iff, TernaryOperator};
pub use options::{Choice, ResolvedOptions, ThirdOptions};
pub use third::{third, third_ext};
