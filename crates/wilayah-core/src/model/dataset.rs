// crates/wilayah-core/src/model/dataset.rs
use super::entity::{District, Province, Regency, Village};
use crate::common::DatasetStats;
use crate::error::Result;
use crate::layout::Layout;
use crate::loader::load_records;

/// The four source tables, fully parsed and kept in file order.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub provinces: Vec<Province>,
    pub regencies: Vec<Regency>,
    pub districts: Vec<District>,
    pub villages: Vec<Village>,
}

impl Dataset {
    /// Parses all four tables from the layout's data directory.
    ///
    /// Each file is read to completion and closed before the next one is
    /// opened. The first failing file aborts the load.
    pub fn load(layout: &Layout) -> Result<Self> {
        Ok(Self {
            provinces: load_records(layout.source_path::<Province>())?,
            regencies: load_records(layout.source_path::<Regency>())?,
            districts: load_records(layout.source_path::<District>())?,
            villages: load_records(layout.source_path::<Village>())?,
        })
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            provinces: self.provinces.len(),
            regencies: self.regencies.len(),
            districts: self.districts.len(),
            villages: self.villages.len(),
        }
    }
}

