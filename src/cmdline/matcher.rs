#![forbid(unsafe_code)]

//! Flag and parameter extraction primitives
//!
//! Stateless operations over a shared mutable token list. Each primitive
//! matches one designated flag token by exact string equality, removes what
//! it consumes in place, and reports whether it found anything. Order of the
//! surviving tokens is always preserved.

/// Whether a token looks like a flag: it starts with the marker character and
/// is not itself parseable as a signed number, so negative numeric parameter
/// values such as `-5` or `-3.5` are never misclassified as flags.
pub fn is_flag(token: &str) -> bool {
    token.starts_with('-') && token.parse::<f64>().is_err()
}

/// Remove every exact occurrence of `flag` from the token list.
///
/// Returns true if at least one occurrence was found.
pub fn find_flag(flag: &str, tokens: &mut Vec<String>) -> bool {
    let before = tokens.len();
    tokens.retain(|token| token != flag);
    tokens.len() != before
}

/// Like [`find_flag`], invoking `action` exactly once if the flag was found,
/// regardless of how many occurrences were removed.
pub fn find_flag_with(flag: &str, tokens: &mut Vec<String>, action: impl FnOnce()) -> bool {
    let found = find_flag(flag, tokens);
    if found {
        action();
    }
    found
}

/// Extract the value following the first usable occurrence of `flag`.
///
/// An occurrence is usable when the immediately following token exists and is
/// not flag-looking; the flag and its value are then removed as a pair.
/// Occurrences whose successor is absent or flag-looking are skipped in place
/// and scanning continues after them.
pub fn find_parameter(flag: &str, tokens: &mut Vec<String>) -> Option<String> {
    let mut start = 0;
    while let Some(offset) = tokens[start..].iter().position(|token| token == flag) {
        let found_at = start + offset;
        if let Some(value) = tokens.get(found_at + 1) {
            if !is_flag(value) {
                let value = value.clone();
                tokens.drain(found_at..found_at + 2);
                return Some(value);
            }
        }
        start = found_at + 1;
    }
    None
}

/// Repeatedly extract `flag`'s parameter, invoking `action` per extraction.
///
/// Returns true if at least one extraction occurred.
pub fn find_parameter_each(
    flag: &str,
    tokens: &mut Vec<String>,
    mut action: impl FnMut(&str),
) -> bool {
    let mut found = false;
    while let Some(value) = find_parameter(flag, tokens) {
        found = true;
        action(&value);
    }
    found
}

/// Extract exactly `required` values following `flag`.
///
/// The flag token and every following token inspected are removed even when
/// the attempt fails partway (a missing or flag-looking slot), so the list
/// never retains a half-processed span. Multiple occurrences of the flag are
/// ambiguous and rejected: every occurrence's span is consumed, but the
/// return value is `None`.
pub fn find_parameters(
    flag: &str,
    required: usize,
    tokens: &mut Vec<String>,
) -> Option<Vec<String>> {
    let mut outcome: Option<Vec<String>> = None;
    let mut occurrences = 0;

    while let Some(found_at) = tokens.iter().position(|token| token == flag) {
        occurrences += 1;
        let mut values = Vec::with_capacity(required);
        let mut inspected = 0;
        while inspected < required {
            match tokens.get(found_at + 1 + inspected) {
                Some(token) if !is_flag(token) => {
                    values.push(token.clone());
                    inspected += 1;
                }
                _ => break,
            }
        }
        let failed = values.len() != required;
        // Consume the flag and the inspected span, full or partial.
        let end = (found_at + 1 + inspected).min(tokens.len());
        tokens.drain(found_at..end);
        outcome = if failed { None } else { Some(values) };
    }

    if occurrences > 1 { None } else { outcome }
}
