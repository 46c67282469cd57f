#![forbid(unsafe_code)]

//! Matcher pipeline over a tokenized command line
//!
//! A parser tokenizes the raw line, strips the program-name token, then
//! applies caller-supplied matcher functions in registration order. Every
//! matcher receives exclusive mutable access to the same token list and
//! removes whatever it recognizes; what survives the last matcher is the
//! remainder. A matcher may short-circuit the rest of the pipeline by
//! returning an [`EarlyExit`], which is a valid outcome, not an error.

use crate::cmdline::tokenizer::split_command_line;

/// Non-error short-circuit raised by a matcher: stop processing immediately
/// and present the message (if any) plus usage, then end successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarlyExit {
    pub message: Option<String>,
}

impl EarlyExit {
    /// An early exit that presents the given message before the usage text.
    pub fn with_message(message: impl Into<String>) -> Self {
        EarlyExit {
            message: Some(message.into()),
        }
    }

    /// An early exit that presents only the usage text.
    pub fn silent() -> Self {
        EarlyExit { message: None }
    }
}

/// What a matcher returns: keep going, or unwind to the orchestrator.
pub type MatchResult = Result<(), EarlyExit>;

/// A matcher: recognizes and removes its tokens from the shared list,
/// capturing values and recording errors into caller-owned state `S`.
pub type MatcherFn<S> = fn(&mut S, &mut Vec<String>) -> MatchResult;

/// Applies a matcher sequence to one tokenized command line.
pub struct CommandLineParser {
    raw: String,
    program_name: Option<String>,
}

impl CommandLineParser {
    /// Create a parser over a raw command line string.
    pub fn new(raw: impl Into<String>) -> Self {
        CommandLineParser {
            raw: raw.into(),
            program_name: None,
        }
    }

    /// The first token of the line, captured by [`parse`](Self::parse).
    pub fn program_name(&self) -> Option<&str> {
        self.program_name.as_deref()
    }

    /// Tokenize the line, strip the program name, and run each matcher in
    /// order over the shared token list, returning whatever remains.
    ///
    /// An [`EarlyExit`] from a matcher aborts the remaining matchers and
    /// propagates to the caller.
    pub fn parse<S>(
        &mut self,
        state: &mut S,
        matchers: &[MatcherFn<S>],
    ) -> Result<Vec<String>, EarlyExit> {
        let mut tokens = split_command_line(&self.raw);
        if !tokens.is_empty() {
            self.program_name = Some(tokens.remove(0));
        }

        for matcher in matchers {
            matcher(state, &mut tokens)?;
        }

        Ok(tokens)
    }
}
