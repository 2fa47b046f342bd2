// crates/wilayah-core/src/emit.rs
use crate::error::{Result, WilayahError};
use crate::layout::create_dir;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Writes `value` as pretty-printed JSON (two-space indent) to `path`.
///
/// Missing parent directories are created and an existing file is
/// overwritten. An empty slice is written as `[]`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| WilayahError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }

    fs::write(path, bytes).map_err(|source| WilayahError::Write {
        path: path.to_path_buf(),
        source,
    })
}
