// src/point_spitter/error.rs

use thiserror::Error;

/// Errors surfaced by the splitter and the session-log parser.
///
/// All of these are caller precondition violations rather than recoverable
/// runtime conditions; they are reported immediately and never retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitterError {
    #[error("roll sequence is empty")]
    EmptySequence,

    #[error("roll value {value} is outside the valid range 2..=12")]
    RollOutOfRange { value: u8 },

    #[error("line {line}: unrecognized roll token '{token}'")]
    MalformedLine { line: usize, token: String },
}
