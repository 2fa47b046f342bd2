use serde::Serialize;

/// Simple aggregate statistics for a parsed dataset.
///
/// Returned by [`Dataset::stats`](crate::Dataset::stats); the counts are the
/// raw row counts of each source table, before any grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub provinces: usize,
    pub regencies: usize,
    pub districts: usize,
    pub villages: usize,
}
