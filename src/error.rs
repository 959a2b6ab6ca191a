use alloc::string::String;
use thiserror::Error;

/// The error produced when parsing an [`OutputMode`][om] from a string which doesn't name one.
///
/// [om]: enum.OutputMode.html "OutputMode — the representation produced by a generator"
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown output mode `{0}`, expected `text`, `code` or `raw`")]
pub struct ParseOutputModeError(pub String);
