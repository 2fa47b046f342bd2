// crates/wilayah-core/src/loader/quoting.rs

//! Strict quote validation for raw CSV records.
//!
//! The `csv` reader accepts stray quotes and reads an unterminated quoted
//! field up to the end of input. Source tables must be well formed, so each
//! record's raw bytes are checked here before the record is used:
//!
//! - a quote may only open a field,
//! - a closing quote must be followed by a delimiter or a line end,
//! - input must not end inside a quoted field.
//!
//! `""` inside a quoted field is an escaped quote.

/// A quoting rule broken inside one raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteViolation {
    /// Lines between the start of the raw record and the violation.
    pub line_offset: u64,
    pub reason: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

pub fn check_quoting(raw: &[u8], delimiter: u8) -> Result<(), QuoteViolation> {
    let mut state = State::FieldStart;
    let mut line = 0;
    let mut opened_at = 0;

    for &b in raw {
        state = match (state, b) {
            (State::FieldStart, b'"') => {
                opened_at = line;
                State::Quoted
            }
            (State::Unquoted, b'"') => {
                return Err(QuoteViolation {
                    line_offset: line,
                    reason: "bare \" in non-quoted field",
                });
            }
            (State::Quoted, b'"') => State::QuoteInQuoted,
            (State::QuoteInQuoted, b'"') => State::Quoted,
            (State::Quoted, b'\n') => {
                line += 1;
                State::Quoted
            }
            (State::Quoted, _) => State::Quoted,
            (_, b'\n') => {
                line += 1;
                State::FieldStart
            }
            (_, b'\r') => State::FieldStart,
            (_, d) if d == delimiter => State::FieldStart,
            (State::QuoteInQuoted, _) => {
                return Err(QuoteViolation {
                    line_offset: line,
                    reason: "extraneous \" after closing quote",
                });
            }
            _ => State::Unquoted,
        };
    }

    if state == State::Quoted {
        return Err(QuoteViolation {
            line_offset: opened_at,
            reason: "quoted field is never closed",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &str) -> Result<(), QuoteViolation> {
        check_quoting(raw.as_bytes(), b',')
    }

    #[test]
    fn plain_and_quoted_fields_pass() {
        assert!(check("11,Aceh\n").is_ok());
        assert!(check("110101,1101,\"Teupah, Selatan\"\r\n").is_ok());
        assert!(check("11,\"Kota \"\"Lama\"\"\"\n").is_ok());
        assert!(check("\"11\",\"\"").is_ok());
        assert!(check("11,\"two\nlines\"\n").is_ok());
    }

    #[test]
    fn quote_inside_unquoted_field_fails() {
        let v = check("11,Ac\"eh\"x\n").unwrap_err();
        assert_eq!(v.reason, "bare \" in non-quoted field");
        assert_eq!(v.line_offset, 0);
    }

    #[test]
    fn text_after_closing_quote_fails() {
        let v = check("11,\"Aceh\"x\n").unwrap_err();
        assert_eq!(v.reason, "extraneous \" after closing quote");
    }

    #[test]
    fn unterminated_quote_fails_at_its_opening_line() {
        let v = check("11,\"Aceh\n12,Sumatera Utara\n").unwrap_err();
        assert_eq!(v.reason, "quoted field is never closed");
        assert_eq!(v.line_offset, 0);
    }

    #[test]
    fn violation_line_counts_embedded_newlines() {
        let v = check("11,\"two\nlines\",x\"y\n").unwrap_err();
        assert_eq!(v.line_offset, 1);
    }
}
