// crates/wilayah-core/src/loader/mod.rs

//! # Record Loader
//!
//! Reads one comma-delimited source table into typed records.
//!
//! The first row is a header and is discarded without looking at it. Every
//! following row must carry at least [`Record::COLUMNS`] fields; the leading
//! ones are taken by position, trimmed, and turned into a record. Extra
//! trailing columns are ignored.
//!
//! Loading is all-or-nothing: the first unreadable, badly quoted, malformed
//! or short row fails the whole file.

use crate::error::{Result, WilayahError};
use crate::traits::Record;
use csv::{Position, ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::debug;

mod common_io;
mod quoting;

use quoting::check_quoting;

const DELIMITER: u8 = b',';

/// Opens `path` and parses every data row into `R`, in file order.
pub fn load_records<R: Record>(path: impl AsRef<Path>) -> Result<Vec<R>> {
    let path = path.as_ref();
    let reader = common_io::open_source(path)?;
    let records = read_records::<R, _>(reader, path)?;

    debug!(
        kind = R::KIND,
        path = %path.display(),
        count = records.len(),
        "parsed source table"
    );

    Ok(records)
}

/// Parses records from an already-open reader.
///
/// The whole source is read into memory first so that every record's raw
/// bytes can have their quoting checked before the record is used.
/// `path` only labels errors; nothing is opened here.
pub fn read_records<R: Record, Rd: Read>(mut reader: Rd, path: &Path) -> Result<Vec<R>> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| WilayahError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    // Column counts are checked per row below instead of against the header.
    let mut csv = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut row = StringRecord::new();

    let has_header = csv
        .read_record(&mut row)
        .map_err(|source| csv_error(path, source))?;
    if !has_header {
        return Err(WilayahError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    check_raw(path, &bytes, &row, csv.position())?;

    let mut records = Vec::new();
    while csv
        .read_record(&mut row)
        .map_err(|source| csv_error(path, source))?
    {
        check_raw(path, &bytes, &row, csv.position())?;

        if row.len() < R::COLUMNS {
            return Err(WilayahError::ShortRow {
                path: path.to_path_buf(),
                line: row.position().map_or(0, |p| p.line()),
                expected: R::COLUMNS,
                found: row.len(),
            });
        }

        let fields: Vec<&str> = row.iter().take(R::COLUMNS).map(str::trim).collect();
        records.push(R::from_fields(&fields));
    }

    Ok(records)
}

/// Validates the quoting of the bytes `row` was parsed from, which run from
/// the row's own position up to the reader position `end`.
fn check_raw(path: &Path, bytes: &[u8], row: &StringRecord, end: &Position) -> Result<()> {
    let (start, line) = row.position().map_or((0, 1), |p| (p.byte(), p.line()));
    let raw = &bytes[start as usize..end.byte() as usize];

    check_quoting(raw, DELIMITER).map_err(|v| WilayahError::Quote {
        path: path.to_path_buf(),
        line: line + v.line_offset,
        reason: v.reason,
    })
}

fn csv_error(path: &Path, source: csv::Error) -> WilayahError {
    WilayahError::Csv {
        path: path.to_path_buf(),
        line: source.position().map_or(0, |p| p.line()),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{District, Province, Regency, Village};

    fn parse<R: Record>(input: &str) -> Result<Vec<R>> {
        read_records::<R, _>(input.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn header_only_yields_no_records() {
        assert!(parse::<Province>("id,name\n").unwrap().is_empty());
        assert!(parse::<Regency>("id,province_id,name\n").unwrap().is_empty());
        assert!(parse::<District>("id,regency_id,name\n").unwrap().is_empty());
        assert!(parse::<Village>("id,district_id,name").unwrap().is_empty());
    }

    #[test]
    fn header_is_not_validated() {
        let provinces = parse::<Province>("whatever,columns,here\n11,Aceh\n").unwrap();
        assert_eq!(provinces.len(), 1);
        assert_eq!(provinces[0].name, "Aceh");
    }

    #[test]
    fn empty_source_is_missing_header() {
        let err = parse::<Province>("").unwrap_err();
        assert!(matches!(err, WilayahError::MissingHeader { .. }));
    }

    #[test]
    fn rows_keep_file_order() {
        let input = "id,name\n13,Sumatera Barat\n11,Aceh\n12,Sumatera Utara\n";
        let ids: Vec<String> = parse::<Province>(input)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["13", "11", "12"]);
    }

    #[test]
    fn fields_are_trimmed() {
        let input = "id,name\n 31 ,  Jakarta \n";
        let provinces = parse::<Province>(input).unwrap();
        assert_eq!(
            provinces,
            vec![Province {
                id: "31".into(),
                name: "Jakarta".into()
            }]
        );
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let input = "id,regency_id,name\n110101,1101,\"Teupah, Selatan\"\n";
        let districts = parse::<District>(input).unwrap();
        assert_eq!(districts[0].name, "Teupah, Selatan");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let input = "id,province_id,name\n1101,11,Simeulue,extra\n";
        let regencies = parse::<Regency>(input).unwrap();
        assert_eq!(regencies[0].name, "Simeulue");
    }

    #[test]
    fn short_row_is_fatal() {
        let input = "id,regency_id,name\n110101,1101,Teupah Selatan\n110102,1101\n";
        match parse::<District>(input).unwrap_err() {
            WilayahError::ShortRow {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    fn quote_error(input: &str) -> (u64, &'static str) {
        match parse::<Province>(input).unwrap_err() {
            WilayahError::Quote { line, reason, .. } => (line, reason),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unterminated_quote_does_not_swallow_later_rows() {
        let (line, reason) = quote_error("id,name\n11,\"Aceh\n12,Sumatera Utara\n");
        assert_eq!(line, 2);
        assert_eq!(reason, "quoted field is never closed");
    }

    #[test]
    fn bare_quote_in_unquoted_field_is_fatal() {
        let (line, _) = quote_error("id,name\n11,Aceh\n12,Sumatera \"Utara\"\n");
        assert_eq!(line, 3);
    }

    #[test]
    fn text_after_closing_quote_is_fatal() {
        let (line, reason) = quote_error("id,name\n11,\"Aceh\"x\n");
        assert_eq!(line, 2);
        assert_eq!(reason, "extraneous \" after closing quote");
    }

    #[test]
    fn malformed_header_is_fatal() {
        let (line, _) = quote_error("id,na\"me\n11,Aceh\n");
        assert_eq!(line, 1);
    }

    #[test]
    fn well_formed_quoting_still_parses() {
        let input = "id,name\r\n\"11\",\"Kota \"\"Lama\"\"\"\r\n12,\"Sumatera\nUtara\"\r\n13,Sumatera Barat\r\n";
        let provinces = parse::<Province>(input).unwrap();
        let names: Vec<&str> = provinces.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Kota \"Lama\"", "Sumatera\nUtara", "Sumatera Barat"]);
    }

    #[test]
    fn invalid_utf8_is_fatal() {
        let input: &[u8] = b"id,name\n11,\xff\xfe\n";
        let err = read_records::<Province, _>(input, Path::new("test.csv")).unwrap_err();
        assert!(matches!(err, WilayahError::Csv { .. }));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records::<Village>(dir.path().join("villages.csv")).unwrap_err();
        assert!(matches!(err, WilayahError::Open { .. }));
    }
}
