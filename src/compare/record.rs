#![forbid(unsafe_code)]

//! Delimited record splitting
//!
//! Splits one physical line into comma-delimited fields. A field may be
//! wrapped in double quotes, in which case commas are literal and a doubled
//! quote (`""`) is an escaped quote. A record never spans lines.

use thiserror::Error;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Why a line could not be split into fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unterminated quoted field")]
    UnterminatedQuote,
    #[error("unexpected data after closing quote")]
    DataAfterQuote,
}

/// Split one line into its fields.
///
/// With `trim_whitespace`, unquoted fields are trimmed; quoted content is
/// preserved verbatim either way. Whitespace between a delimiter and an
/// opening quote is always consumed.
pub fn split_record(line: &str, trim_whitespace: bool) -> Result<Vec<String>, RecordError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();

    loop {
        // Look for an opening quote before any field content arrives.
        let mut leading = String::new();
        let quoted = loop {
            match chars.peek() {
                Some(&cc) if cc.is_whitespace() => {
                    leading.push(cc);
                    chars.next();
                }
                Some(&QUOTE) => {
                    chars.next();
                    break true;
                }
                _ => break false,
            }
        };

        if quoted {
            loop {
                match chars.next() {
                    Some(QUOTE) => {
                        if chars.peek() == Some(&QUOTE) {
                            chars.next();
                            field.push(QUOTE);
                        } else {
                            break;
                        }
                    }
                    Some(cc) => field.push(cc),
                    None => return Err(RecordError::UnterminatedQuote),
                }
            }
            // Only whitespace may sit between the closing quote and the
            // next delimiter or end of line.
            loop {
                match chars.next() {
                    None => {
                        fields.push(std::mem::take(&mut field));
                        return Ok(fields);
                    }
                    Some(DELIMITER) => break,
                    Some(cc) if cc.is_whitespace() => {}
                    Some(_) => return Err(RecordError::DataAfterQuote),
                }
            }
            fields.push(std::mem::take(&mut field));
        } else {
            if !trim_whitespace {
                field.push_str(&leading);
            }
            let ended = loop {
                match chars.next() {
                    None => break true,
                    Some(DELIMITER) => break false,
                    Some(cc) => field.push(cc),
                }
            };
            let done = if trim_whitespace {
                field.trim().to_string()
            } else {
                std::mem::take(&mut field)
            };
            field.clear();
            fields.push(done);
            if ended {
                return Ok(fields);
            }
        }
    }
}
