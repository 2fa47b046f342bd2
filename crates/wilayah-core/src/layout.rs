// crates/wilayah-core/src/layout.rs
use crate::error::{Result, WilayahError};
use crate::model::{District, Province, Regency, Village};
use crate::traits::{ChildRecord, Record};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT_DIR: &str = "static/api";

/// Where the source tables are read from and where listings are written.
///
/// The default layout is relative to the working directory:
///
/// ```text
/// data/provinces.csv            -> static/api/provinces.json
/// data/regencies.csv            -> static/api/regencies/<province_id>.json
/// data/districts.csv            -> static/api/districts/<regency_id>.json
/// data/villages.csv             -> static/api/villages/<district_id>.json
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, DEFAULT_OUTPUT_DIR)
    }
}

impl Layout {
    pub fn new(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// `<data_dir>/<KIND>.csv`
    pub fn source_path<R: Record>(&self) -> PathBuf {
        self.data_dir.join(format!("{}.csv", R::KIND))
    }

    /// The single top-level listing of every province.
    pub fn root_listing_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", Province::KIND))
    }

    /// `<output_dir>/<KIND>`, the directory of per-parent listings.
    pub fn listing_dir<C: ChildRecord>(&self) -> PathBuf {
        self.output_dir.join(C::KIND)
    }

    /// `<output_dir>/<KIND>/<parent_id>.json`
    pub fn listing_path<C: ChildRecord>(&self, parent_id: &str) -> PathBuf {
        self.listing_dir::<C>().join(format!("{parent_id}.json"))
    }

    /// Creates the output root and the three per-parent listing directories.
    pub fn create_output_dirs(&self) -> Result<()> {
        create_dir(&self.output_dir)?;
        create_dir(&self.listing_dir::<Regency>())?;
        create_dir(&self.listing_dir::<District>())?;
        create_dir(&self.listing_dir::<Village>())?;
        Ok(())
    }
}

pub(crate) fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| WilayahError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
