// crates/wilayah-core/src/index.rs
use crate::model::{Dataset, District, Regency, Village};
use crate::traits::ChildRecord;
use std::collections::HashMap;

/// Children of one level grouped by their parent identifier.
///
/// Built in a single pass over the parsed records, so each group keeps the
/// relative order the children had in the source table. Parents without
/// children have no entry at all; [`GroupIndex::children`] resolves them to
/// an empty slice.
///
/// Key iteration order is unspecified and never relied upon: listings are
/// emitted by walking the parent table.
#[derive(Debug)]
pub struct GroupIndex<'a, C: ChildRecord> {
    groups: HashMap<&'a str, Vec<&'a C>>,
}

impl<'a, C: ChildRecord> GroupIndex<'a, C> {
    pub fn build(children: &'a [C]) -> Self {
        let mut groups: HashMap<&'a str, Vec<&'a C>> = HashMap::new();
        for child in children {
            groups.entry(child.parent_id()).or_default().push(child);
        }
        Self { groups }
    }

    /// The children of `parent_id`, in source order. Empty if there are none.
    pub fn children(&self, parent_id: &str) -> &[&'a C] {
        self.groups
            .get(parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct parent identifiers seen.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The three grouping indices, built once per run and only read afterwards.
#[derive(Debug)]
pub struct Hierarchy<'a> {
    pub regencies_by_province: GroupIndex<'a, Regency>,
    pub districts_by_regency: GroupIndex<'a, District>,
    pub villages_by_district: GroupIndex<'a, Village>,
}

impl<'a> Hierarchy<'a> {
    pub fn build(dataset: &'a Dataset) -> Self {
        Self {
            regencies_by_province: GroupIndex::build(&dataset.regencies),
            districts_by_regency: GroupIndex::build(&dataset.districts),
            villages_by_district: GroupIndex::build(&dataset.villages),
        }
    }
}
