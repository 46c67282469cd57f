#![forbid(unsafe_code)]

//! Shell-style command line tokenization
//!
//! Splits a raw command line string into tokens in a single character pass.
//! Whitespace separates tokens outside quotes; a double quote toggles quoted
//! mode without breaking the token under construction, so adjacent quoted and
//! unquoted spans merge (`x"y z"w` tokenizes as `xy zw`). A backslash escapes
//! a following backslash or quote; before anything else it is literal.

/// Split a raw command line into its tokens.
///
/// Unterminated quotes and trailing escapes are not errors: quoting simply
/// stops affecting whitespace handling once the input ends, and a dangling
/// backslash is emitted literally. An explicit empty quoted span (`""`)
/// produces one empty token; whitespace runs never do.
pub fn split_command_line(raw: &str) -> Vec<String> {
    const BACKSLASH: char = '\\';
    const QUOTE: char = '"';

    let mut tokens = Vec::new();
    let mut accumulator = String::new();
    let mut in_quotes = false;
    // True once the current token has begun, even if no character has been
    // appended yet (an opening quote alone starts a token).
    let mut token_started = false;
    let mut pending_escape = false;

    for cc in raw.chars() {
        if pending_escape {
            pending_escape = false;
            if cc == BACKSLASH || cc == QUOTE {
                accumulator.push(cc);
                token_started = true;
                continue;
            }
            // Not an escape target: the backslash was literal, and the
            // current character gets its normal handling below.
            accumulator.push(BACKSLASH);
            token_started = true;
        }

        if in_quotes {
            match cc {
                BACKSLASH => pending_escape = true,
                QUOTE => in_quotes = false,
                _ => accumulator.push(cc),
            }
        } else if cc.is_whitespace() {
            if token_started {
                tokens.push(std::mem::take(&mut accumulator));
                token_started = false;
            }
        } else {
            match cc {
                BACKSLASH => pending_escape = true,
                QUOTE => {
                    in_quotes = true;
                    token_started = true;
                }
                _ => {
                    accumulator.push(cc);
                    token_started = true;
                }
            }
        }
    }

    if pending_escape {
        accumulator.push(BACKSLASH);
        token_started = true;
    }
    if token_started {
        tokens.push(accumulator);
    }

    tokens
}

/// Rebuild a raw command line from pre-split arguments.
///
/// The inverse of [`split_command_line`] for the common case: arguments
/// containing whitespace or quote characters are wrapped in quotes with
/// embedded backslashes and quotes escaped, so splitting the result yields
/// the original arguments. Used to reconstruct a raw line from
/// `std::env::args()`, which the OS hands over already split.
pub fn join_command_line<I>(args: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut line = String::new();
    for arg in args {
        let arg = arg.as_ref();
        if !line.is_empty() {
            line.push(' ');
        }
        let needs_quoting =
            arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\');
        if needs_quoting {
            line.push('"');
            for cc in arg.chars() {
                if cc == '"' || cc == '\\' {
                    line.push('\\');
                }
                line.push(cc);
            }
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}
