// crates/surreal-core/src/number/mod.rs

pub mod sign;
pub mod surreal;

pub mod arith;
pub mod compare;
pub mod convert;
