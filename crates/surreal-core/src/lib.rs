//! Signed integers encoded as degenerate Conway surreal numbers.
//!
//! Every value is a one-sided chain of `{left, right}` pairs. Sign, order and
//! arithmetic are all derived from the shape of that chain; no machine integer
//! takes part in the math.

pub mod error;
pub mod validate;

pub mod number;
pub mod value;

pub use crate::error::{Result, SurrealError};
pub use crate::number::{sign::Sign, surreal::Surreal};
pub use crate::value::node::Value;
