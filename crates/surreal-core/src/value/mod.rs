// crates/surreal-core/src/value/mod.rs

pub mod node;
pub mod render;
