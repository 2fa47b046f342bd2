//! wilayah-gen
//! ===========
//!
//! Generator for the static regions API built on [`wilayah-core`].
//!
//! This crate primarily provides a binary (`wilayah-gen`). The library target
//! only carries this overview and the logging setup shared with the binary.
//!
//! Usage
//! -----
//!
//! Run it from the directory that holds `data/`:
//!
//! ```text
//! wilayah-gen
//! RUST_LOG=debug wilayah-gen
//! ```
//!
//! It reads `data/{provinces,regencies,districts,villages}.csv` and writes
//! `static/api/provinces.json` plus one listing per parent under
//! `static/api/{regencies,districts,villages}/`.
//!
//! [`wilayah-core`]: https://docs.rs/wilayah-core

pub mod logging;
