//! Generation options and their defaults.

use core::str::FromStr;
use alloc::{
    borrow::ToOwned,
    string::String,
};
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use crate::ParseOutputModeError;

/// The representation a generator produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum OutputMode {
    /// Rows of symbols joined by newlines, ready to be pasted into a chat message.
    ///
    /// Returned by the `Default` trait implementation.
    Text,
    /// The same text wrapped in a triple-backtick code fence, which displays the markup instead of rendering it.
    #[cfg_attr(feature = "serialization", serde(alias = "code", alias = "codeblock"))]
    CodeBlock,
    /// The two-dimensional grid of rendered symbols, not joined into text.
    #[cfg_attr(feature = "serialization", serde(alias = "raw"))]
    Grid,
}
impl Default for OutputMode {
    /// Returns the `Text` variant.
    #[inline(always)]
    fn default() -> Self {
        Self::Text
    }
}
impl FromStr for OutputMode {
    type Err = ParseOutputModeError;
    /// Parses `text`, `code`/`codeblock` or `raw`/`grid`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = s.trim();
        if mode.eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else if mode.eq_ignore_ascii_case("code") || mode.eq_ignore_ascii_case("codeblock") {
            Ok(Self::CodeBlock)
        } else if mode.eq_ignore_ascii_case("raw") || mode.eq_ignore_ascii_case("grid") {
            Ok(Self::Grid)
        } else {
            Err(ParseOutputModeError(s.to_owned()))
        }
    }
}

/// The default amount of rows and columns.
pub const DEFAULT_SIZE: usize = 9;
/// The default amount of mines.
pub const DEFAULT_MINES: usize = 10;
/// The default name of the emoji used for mines.
pub const DEFAULT_MINE_SYMBOL: &str = "boom";

/// The complete set of options for generating a field.
///
/// With the `serialization` feature, missing fields take their default values when deserializing, so any partial document is a valid set of options.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct FieldOptions {
    /// The height of the field.
    pub rows: usize,
    /// The width of the field.
    pub columns: usize,
    /// The amount of mines. Generation is refused unless the field has more than twice as many cells.
    pub mines: usize,
    /// The emoji name rendered for mines, without colons.
    pub mine_symbol: String,
    /// Whether to reveal a starting cell.
    pub reveal_first_cell: bool,
    /// Whether the starting cell should be a zero, opening the surrounding clearing, whenever the field has one.
    pub zero_start: bool,
    /// Whether to pad symbols with spaces, both inside the mask and between cells.
    pub spacing: bool,
    /// The representation to produce.
    pub output: OutputMode,
}
impl FieldOptions {
    /// Returns the amount of cells on the field, or `None` if that overflows.
    #[inline]
    pub fn total_cells(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }
    /// Returns `true` if the field has strictly more than twice as many cells as mines, which is the condition for generating it. A field whose amount of cells overflows `usize` is never generatable.
    ///
    /// # Usage
    /// ```
    /// # use spoiler_sweeper::FieldOptions;
    /// let options = FieldOptions { rows: 2, columns: 2, mines: 1, ..FieldOptions::default() };
    /// assert!(options.is_generatable());
    /// let options = FieldOptions { rows: 3, columns: 3, mines: 5, ..FieldOptions::default() };
    /// assert!(!options.is_generatable());
    /// ```
    pub fn is_generatable(&self) -> bool {
        match (self.total_cells(), self.mines.checked_mul(2)) {
            (Some(cells), Some(doubled)) => cells > doubled,
            _ => false,
        }
    }
}
impl Default for FieldOptions {
    /// Returns a 9x9 field with 10 mines, using the `boom` symbol, spacing and text output, with the first-cell reveal off and the zero guarantee on.
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            columns: DEFAULT_SIZE,
            mines: DEFAULT_MINES,
            mine_symbol: DEFAULT_MINE_SYMBOL.to_owned(),
            reveal_first_cell: false,
            zero_start: true,
            spacing: true,
            output: OutputMode::default(),
        }
    }
}

/// A partial set of options, where every missing value falls back to the default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct PartialFieldOptions {
    /// The height of the field, 9 by default.
    pub rows: Option<usize>,
    /// The width of the field, 9 by default.
    pub columns: Option<usize>,
    /// The amount of mines, 10 by default.
    pub mines: Option<usize>,
    /// The emoji name rendered for mines, `boom` by default.
    pub mine_symbol: Option<String>,
    /// Whether to reveal a starting cell, off by default.
    pub reveal_first_cell: Option<bool>,
    /// Whether the starting cell should be a zero, on by default.
    pub zero_start: Option<bool>,
    /// Whether to pad symbols with spaces, on by default.
    pub spacing: Option<bool>,
    /// The representation to produce, text by default.
    pub output: Option<OutputMode>,
}
impl PartialFieldOptions {
    /// Fills in every missing value with its default.
    ///
    /// No validation happens here: a field too dense to generate is reported by the generator.
    ///
    /// # Usage
    /// ```
    /// # use spoiler_sweeper::{PartialFieldOptions, OutputMode};
    /// let options = PartialFieldOptions { mines: Some(3), ..PartialFieldOptions::default() }.normalize();
    /// assert_eq!((options.rows, options.columns, options.mines), (9, 9, 3));
    /// assert_eq!(options.output, OutputMode::Text);
    /// ```
    #[must_use]
    pub fn normalize(self) -> FieldOptions {
        let defaults = FieldOptions::default();
        FieldOptions {
            rows: self.rows.unwrap_or(defaults.rows),
            columns: self.columns.unwrap_or(defaults.columns),
            mines: self.mines.unwrap_or(defaults.mines),
            mine_symbol: self.mine_symbol.unwrap_or(defaults.mine_symbol),
            reveal_first_cell: self.reveal_first_cell.unwrap_or(defaults.reveal_first_cell),
            zero_start: self.zero_start.unwrap_or(defaults.zero_start),
            spacing: self.spacing.unwrap_or(defaults.spacing),
            output: self.output.unwrap_or(defaults.output),
        }
    }
}
impl From<PartialFieldOptions> for FieldOptions {
    #[inline(always)]
    fn from(op: PartialFieldOptions) -> Self {
        op.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_partial_options_normalize_to_defaults() {
        assert_eq!(PartialFieldOptions::default().normalize(), FieldOptions::default());
        let defaults = FieldOptions::default();
        assert_eq!(defaults.mine_symbol, "boom");
        assert!(!defaults.reveal_first_cell);
        assert!(defaults.zero_start);
        assert!(defaults.spacing);
    }

    #[test]
    fn partial_values_override_defaults() {
        let partial = PartialFieldOptions {
            rows: Some(4),
            mine_symbol: Some("bomb".to_owned()),
            spacing: Some(false),
            output: Some(OutputMode::Grid),
            ..PartialFieldOptions::default()
        };
        let options = FieldOptions::from(partial);
        assert_eq!(options.rows, 4);
        assert_eq!(options.columns, 9);
        assert_eq!(options.mine_symbol, "bomb");
        assert!(!options.spacing);
        assert_eq!(options.output, OutputMode::Grid);
    }

    #[test]
    fn generatable_needs_more_than_twice_the_mines() {
        let sized = |rows, columns, mines| FieldOptions { rows, columns, mines, ..FieldOptions::default() };
        assert!(sized(2, 2, 1).is_generatable());
        assert!(!sized(2, 2, 2).is_generatable());
        assert!(!sized(3, 3, 5).is_generatable());
        assert!(sized(3, 3, 4).is_generatable());
        assert!(!sized(0, 9, 0).is_generatable());
        assert!(sized(1, 1, 0).is_generatable());
        assert!(!sized(usize::MAX, 2, 10).is_generatable());
        assert!(!sized(usize::MAX, usize::MAX, 0).is_generatable());
        assert!(!sized(usize::MAX, 2, usize::MAX).is_generatable());
    }

    #[test]
    fn output_modes_parse_case_insensitively() {
        assert_eq!("text".parse::<OutputMode>(), Ok(OutputMode::Text));
        assert_eq!("Code".parse::<OutputMode>(), Ok(OutputMode::CodeBlock));
        assert_eq!("codeblock".parse::<OutputMode>(), Ok(OutputMode::CodeBlock));
        assert_eq!(" RAW ".parse::<OutputMode>(), Ok(OutputMode::Grid));
        assert_eq!("grid".parse::<OutputMode>(), Ok(OutputMode::Grid));
        let error = "html".parse::<OutputMode>().unwrap_err();
        assert_eq!(error, ParseOutputModeError("html".to_owned()));
        assert_eq!(
            alloc::string::ToString::to_string(&error),
            "unknown output mode `html`, expected `text`, `code` or `raw`"
        );
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn partial_documents_deserialize_with_defaults() {
        let options: FieldOptions = serde_json::from_str(r#"{"rows": 5, "output": "code_block"}"#).unwrap();
        assert_eq!(options.rows, 5);
        assert_eq!(options.columns, 9);
        assert_eq!(options.output, OutputMode::CodeBlock);

        let partial: PartialFieldOptions = serde_json::from_str(r#"{"mines": 2, "zero_start": false}"#).unwrap();
        let options = partial.normalize();
        assert_eq!(options.mines, 2);
        assert!(!options.zero_start);
        assert_eq!(options.mine_symbol, "boom");
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn documents_accept_the_parsed_mode_names() {
        use alloc::format;
        for (name, mode) in [("code", OutputMode::CodeBlock), ("codeblock", OutputMode::CodeBlock), ("raw", OutputMode::Grid)].iter() {
            let document = format!(r#"{{"output": "{}"}}"#, name);
            let options: FieldOptions = serde_json::from_str(&document).unwrap();
            assert_eq!(options.output, *mode);
            assert_eq!(name.parse::<OutputMode>(), Ok(*mode));
        }
        assert_eq!(serde_json::to_string(&OutputMode::CodeBlock).unwrap(), r#""code_block""#);
    }
}
