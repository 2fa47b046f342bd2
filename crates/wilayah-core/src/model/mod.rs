// crates/wilayah-core/src/model/mod.rs
pub mod dataset;
pub mod entity;

pub use dataset::Dataset;
pub use entity::{District, Province, Regency, Village};
