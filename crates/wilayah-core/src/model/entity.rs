// crates/wilayah-core/src/model/entity.rs
use crate::traits::{ChildRecord, Record};
use serde::Serialize;

/// A province, the root of the hierarchy.
///
/// Source columns: `id, name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Province {
    pub id: String,
    pub name: String,
}

/// A regency or city (kabupaten/kota) within a province.
///
/// Source columns: `id, province_id, name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Regency {
    pub id: String,
    pub province_id: String,
    pub name: String,
}

/// A district (kecamatan) within a regency.
///
/// Source columns: `id, regency_id, name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct District {
    pub id: String,
    pub regency_id: String,
    pub name: String,
}

/// A village (desa/kelurahan) within a district.
///
/// Source columns: `id, district_id, name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Village {
    pub id: String,
    pub district_id: String,
    pub name: String,
}

impl Record for Province {
    const KIND: &'static str = "provinces";
    const COLUMNS: usize = 2;

    fn from_fields(fields: &[&str]) -> Self {
        Self {
            id: fields[0].to_string(),
            name: fields[1].to_string(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Regency {
    const KIND: &'static str = "regencies";
    const COLUMNS: usize = 3;

    fn from_fields(fields: &[&str]) -> Self {
        Self {
            id: fields[0].to_string(),
            province_id: fields[1].to_string(),
            name: fields[2].to_string(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl ChildRecord for Regency {
    fn parent_id(&self) -> &str {
        &self.province_id
    }
}

impl Record for District {
    const KIND: &'static str = "districts";
    const COLUMNS: usize = 3;

    fn from_fields(fields: &[&str]) -> Self {
        Self {
            id: fields[0].to_string(),
            regency_id: fields[1].to_string(),
            name: fields[2].to_string(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl ChildRecord for District {
    fn parent_id(&self) -> &str {
        &self.regency_id
    }
}

impl Record for Village {
    const KIND: &'static str = "villages";
    const COLUMNS: usize = 3;

    fn from_fields(fields: &[&str]) -> Self {
        Self {
            id: fields[0].to_string(),
            district_id: fields[1].to_string(),
            name: fields[2].to_string(),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl ChildRecord for Village {
    fn parent_id(&self) -> &str {
        &self.district_id
    }
}
