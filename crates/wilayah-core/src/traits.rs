// crates/wilayah-core/src/traits.rs
use serde::Serialize;

/// A flat region record that can be read from one row of a source table.
///
/// Each entity kind lives in its own table whose columns are positional:
/// the loader hands [`Record::from_fields`] exactly [`Record::COLUMNS`]
/// already-trimmed fields, in file order. The header row is never consulted.
///
/// [`Record::KIND`] is the plural table name. It names both the source file
/// (`<KIND>.csv`) and, for child kinds, the directory holding the per-parent
/// listings (`<KIND>/<parent_id>.json`).
///
/// # Examples
/// ```rust
/// use wilayah_core::{Province, Record};
///
/// let p = Province::from_fields(&["11", "Aceh"]);
/// assert_eq!(p.id(), "11");
/// assert_eq!(Province::KIND, "provinces");
/// ```
pub trait Record: Serialize + Sized {
    /// Plural lowercase table name, e.g. `"regencies"`.
    const KIND: &'static str;

    /// Number of leading columns consumed per row.
    const COLUMNS: usize;

    /// Builds a record from `fields`, which holds exactly `COLUMNS` entries.
    fn from_fields(fields: &[&str]) -> Self;

    fn id(&self) -> &str;
}

/// A record that points at a parent record of another kind.
///
/// The parent reference is not validated: a child whose parent does not
/// exist is simply never listed.
pub trait ChildRecord: Record {
    fn parent_id(&self) -> &str;
}
