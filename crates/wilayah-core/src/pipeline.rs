// crates/wilayah-core/src/pipeline.rs

//! # Build Pipeline
//!
//! Sequences one complete generation run:
//!
//! 1. parse the four source tables,
//! 2. group children by parent,
//! 3. create the output tree,
//! 4. write the province listing,
//! 5. write one listing per province, regency and district.
//!
//! Each step only starts once the previous one succeeded. The first error is
//! returned as is; documents not yet written at that point are never written.

use crate::common::DatasetStats;
use crate::emit::write_json;
use crate::error::Result;
use crate::index::{GroupIndex, Hierarchy};
use crate::layout::Layout;
use crate::model::Dataset;
use crate::traits::{ChildRecord, Record};
use serde::Serialize;
use tracing::{info, trace};

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub stats: DatasetStats,
    /// Number of JSON documents written, the province listing included.
    pub documents: usize,
}

pub fn run(layout: &Layout) -> Result<BuildReport> {
    info!(data_dir = %layout.data_dir.display(), "parsing source tables");
    let dataset = Dataset::load(layout)?;
    let stats = dataset.stats();
    info!(
        provinces = stats.provinces,
        regencies = stats.regencies,
        districts = stats.districts,
        villages = stats.villages,
        "source tables parsed"
    );

    let hierarchy = Hierarchy::build(&dataset);
    info!(
        provinces_with_regencies = hierarchy.regencies_by_province.len(),
        regencies_with_districts = hierarchy.districts_by_regency.len(),
        districts_with_villages = hierarchy.villages_by_district.len(),
        "grouping indices built"
    );

    layout.create_output_dirs()?;

    let documents = emit_all(layout, &dataset, &hierarchy)?;
    info!(
        output_dir = %layout.output_dir.display(),
        documents,
        "listings written"
    );

    Ok(BuildReport { stats, documents })
}

/// Writes the province listing and every per-parent listing.
///
/// Parents are walked in source order, so that order only decides the
/// sequence of writes, never the content of a document.
fn emit_all(layout: &Layout, dataset: &Dataset, hierarchy: &Hierarchy<'_>) -> Result<usize> {
    let root = layout.root_listing_path();
    write_json(&root, &dataset.provinces)?;
    trace!(path = %root.display(), "wrote listing");

    let mut documents = 1;
    documents += emit_level(layout, &dataset.provinces, &hierarchy.regencies_by_province)?;
    documents += emit_level(layout, &dataset.regencies, &hierarchy.districts_by_regency)?;
    documents += emit_level(layout, &dataset.districts, &hierarchy.villages_by_district)?;
    Ok(documents)
}

fn emit_level<P: Record, C: ChildRecord>(
    layout: &Layout,
    parents: &[P],
    index: &GroupIndex<'_, C>,
) -> Result<usize> {
    for parent in parents {
        let path = layout.listing_path::<C>(parent.id());
        write_json(&path, index.children(parent.id()))?;
        trace!(path = %path.display(), "wrote listing");
    }
    Ok(parents.len())
}
