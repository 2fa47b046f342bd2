// crates/wilayah-core/src/loader/common_io.rs
use crate::error::{Result, WilayahError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens a source table for buffered reading.
pub fn open_source(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| WilayahError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(BufReader::new(file))
}
