//! Rendering a field into text or a grid of symbols.

use alloc::{
    string::String,
    vec::Vec,
};
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};
use crate::{
    Field, FieldOptions, OutputMode,
};

/// The fence placed around the text by [`OutputMode::CodeBlock`][cb].
///
/// [cb]: enum.OutputMode.html#variant.CodeBlock "CodeBlock — text wrapped in a code fence"
pub const CODE_FENCE: &str = "```";

/// A rendered field, in the representation picked by the [`OutputMode`][om].
///
/// [om]: enum.OutputMode.html "OutputMode — the representation produced by a generator"
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum FieldOutput {
    /// Rows of symbols joined by newlines.
    Text(String),
    /// The text wrapped in a code fence.
    CodeBlock(String),
    /// One rendered symbol per cell, row by row.
    Grid(Vec<Vec<String>>),
}
impl FieldOutput {
    /// Returns the rendered text, or `None` for a grid.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text)
          | Self::CodeBlock(text) => Some(text.as_str()),
            Self::Grid(_) => None,
        }
    }
    /// Returns the grid of symbols, or `None` for text.
    #[inline]
    pub fn as_grid(&self) -> Option<&[Vec<String>]> {
        match self {
            Self::Grid(grid) => Some(grid.as_slice()),
            _ => None,
        }
    }
    /// Returns the mode which produces this kind of output.
    #[inline]
    pub fn mode(&self) -> OutputMode {
        match self {
            Self::Text(_) => OutputMode::Text,
            Self::CodeBlock(_) => OutputMode::CodeBlock,
            Self::Grid(_) => OutputMode::Grid,
        }
    }
}

/// Renders every cell of the field, row by row.
pub fn render_grid(field: &Field, mine_symbol: &str, spacing: bool) -> Vec<Vec<String>> {
    field.rows()
        .map(|row| row.map(|cell| cell.render(mine_symbol, spacing)).collect())
        .collect()
}
/// Renders the field as text: cells joined by a single space with `spacing` or directly otherwise, rows joined by newlines.
///
/// # Usage
/// ```
/// # use spoiler_sweeper::{Field, CellValue, render_text};
/// # use core::num::NonZeroUsize;
/// #
/// let mut field = Field::empty([NonZeroUsize::new(2).unwrap(), NonZeroUsize::new(2).unwrap()]);
/// field[[0, 0]].value = CellValue::Mine;
/// field.populate();
/// field.unmask([1, 1]);
/// assert_eq!(render_text(&field, "boom", false), "||:boom:||||:one:||\n||:one:||:one:");
/// ```
pub fn render_text(field: &Field, mine_symbol: &str, spacing: bool) -> String {
    let separator = if spacing {" "} else {""};
    let mut text = String::new();
    for (index, row) in field.rows().enumerate() {
        if index > 0 {text.push('\n')};
        for (column, cell) in row.enumerate() {
            if column > 0 {text.push_str(separator)};
            text.push_str(&cell.render(mine_symbol, spacing));
        }
    }
    text
}
/// Renders the field in the output mode, mine symbol and spacing picked by the options. The field is left untouched.
pub fn render(field: &Field, options: &FieldOptions) -> FieldOutput {
    let (symbol, spacing) = (options.mine_symbol.as_str(), options.spacing);
    match options.output {
        OutputMode::Text => FieldOutput::Text(render_text(field, symbol, spacing)),
        OutputMode::CodeBlock => {
            let text = render_text(field, symbol, spacing);
            let mut fenced = String::with_capacity(text.len() + 2 * CODE_FENCE.len() + 2);
            fenced.push_str(CODE_FENCE);
            fenced.push('\n');
            fenced.push_str(&text);
            fenced.push('\n');
            fenced.push_str(CODE_FENCE);
            FieldOutput::CodeBlock(fenced)
        },
        OutputMode::Grid => FieldOutput::Grid(render_grid(field, symbol, spacing)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{borrow::ToOwned, vec};
    use core::num::NonZeroUsize;
    use crate::CellValue;

    fn sample_field() -> Field {
        let dims = [NonZeroUsize::new(2).unwrap(), NonZeroUsize::new(3).unwrap()];
        let mut field = Field::empty(dims);
        field[[0, 2]].value = CellValue::Mine;
        field.populate();
        field.unmask([1, 0]);
        field
    }

    fn options(output: OutputMode, spacing: bool) -> FieldOptions {
        FieldOptions { output, spacing, mine_symbol: "bomb".to_owned(), ..FieldOptions::default() }
    }

    #[test]
    fn text_joins_cells_with_spaces() {
        let output = render(&sample_field(), &options(OutputMode::Text, true));
        assert_eq!(
            output.as_text(),
            Some("|| :zero: || || :one: || || :bomb: ||\n :zero:  || :one: || || :one: ||")
        );
        assert_eq!(output.mode(), OutputMode::Text);
    }

    #[test]
    fn text_without_spacing_is_packed() {
        let output = render(&sample_field(), &options(OutputMode::Text, false));
        assert_eq!(output.as_text(), Some("||:zero:||||:one:||||:bomb:||\n:zero:||:one:||||:one:||"));
    }

    #[test]
    fn code_block_fences_the_text() {
        let field = sample_field();
        let fenced = render(&field, &options(OutputMode::CodeBlock, true));
        let text = render_text(&field, "bomb", true);
        assert_eq!(fenced, FieldOutput::CodeBlock(["```\n", text.as_str(), "\n```"].concat()));
        assert!(fenced.as_grid().is_none());
    }

    #[test]
    fn grid_keeps_cells_apart() {
        let output = render(&sample_field(), &options(OutputMode::Grid, false));
        let expected = vec![
            vec!["||:zero:||".to_owned(), "||:one:||".to_owned(), "||:bomb:||".to_owned()],
            vec![":zero:".to_owned(), "||:one:||".to_owned(), "||:one:||".to_owned()],
        ];
        assert_eq!(output.as_grid(), Some(expected.as_slice()));
        assert!(output.as_text().is_none());
    }

    #[test]
    fn rendering_leaves_the_field_untouched() {
        let field = sample_field();
        let before = field.clone();
        let _ = render(&field, &options(OutputMode::Grid, true));
        assert_eq!(field, before);
    }
}
