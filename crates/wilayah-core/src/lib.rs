// crates/wilayah-core/src/lib.rs

//! # wilayah-core
//!
//! Turns the four flat region tables (`provinces`, `regencies`, `districts`,
//! `villages`) into pre-rendered JSON listings that can be served as a static
//! API, e.g. `regencies/11.json` lists every regency of province `11`.
//!
//! The pipeline is deliberately linear:
//! parse ([`loader`]) → group by parent ([`index`]) → write ([`emit`]),
//! sequenced by [`pipeline::run`].

pub mod common;
pub mod emit;
pub mod error;
pub mod index;
pub mod layout;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod traits;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::error::{Result, WilayahError};
pub use crate::index::{GroupIndex, Hierarchy};
pub use crate::layout::Layout;
pub use crate::model::{Dataset, District, Province, Regency, Village};
pub use crate::pipeline::BuildReport;
pub use crate::traits::{ChildRecord, Record};
