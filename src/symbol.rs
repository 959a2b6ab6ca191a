//! Cell values and the spoiler-tag masking applied to them.

use alloc::{
    format,
    string::String,
};
#[cfg(feature = "serialization")]
use serde::{Serialize, Deserialize};

/// The delimiter placed on both sides of a masked symbol. Chat clients render the text between a pair of these as a click-to-reveal spoiler.
pub const MASK_DELIMITER: &str = "||";
/// The names used for mine counts, indexed by the count itself.
pub const COUNT_NAMES: [&str; 9] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
];

/// The underlying value of a cell, independent of whether it has been revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CellValue {
    /// The cell holds a mine.
    Mine,
    /// The cell is safe and has this many mines among its neighbors, from `0` to `8`.
    Count(u8),
}
impl CellValue {
    /// Returns `true` if the cell holds a mine, `false` otherwise.
    #[inline]
    pub fn is_mine(self) -> bool {
        match self {
            Self::Mine => true,
            Self::Count(_) => false,
        }
    }
    /// Returns `true` if the cell is safe and has no neighboring mines.
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Self::Count(0)
    }
    /// Returns the neighboring mine count, or `None` for a mine.
    #[inline]
    pub fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(count) => Some(count),
        }
    }
    /// Returns the name placed between the colons of the rendered symbol.
    ///
    /// Mines use the configured mine symbol; counts use the entries of [`COUNT_NAMES`][cn]. Counts above eight cannot come out of the adjacency scan, and are named after eight.
    ///
    /// [cn]: constant.COUNT_NAMES.html "COUNT_NAMES — the names used for mine counts"
    pub fn name<'a>(self, mine_symbol: &'a str) -> &'a str {
        match self {
            Self::Mine => mine_symbol,
            Self::Count(count) => COUNT_NAMES[usize::from(count).min(COUNT_NAMES.len() - 1)],
        }
    }
}
impl Default for CellValue {
    /// Returns `Count(0)`.
    #[inline(always)]
    fn default() -> Self {
        Self::Count(0)
    }
}

/// A cell on the field: its value, and whether it is still hidden behind a spoiler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CellSymbol {
    /// The value hidden by the mask.
    pub value: CellValue,
    /// Whether the value is still wrapped in a spoiler.
    pub masked: bool,
}
impl CellSymbol {
    /// Returns a masked symbol wrapping the given value.
    #[inline(always)]
    pub const fn masked(value: CellValue) -> Self {
        Self { value, masked: true }
    }
    /// Returns `true` if the cell is still hidden.
    #[inline(always)]
    pub const fn is_masked(self) -> bool {
        self.masked
    }
    /// Reveals the cell. Returns `true` if the cell was masked before the call, `false` if it had already been revealed.
    ///
    /// The value is never touched, and there is no way back: a revealed cell stays revealed.
    #[inline]
    pub fn unmask(&mut self) -> bool {
        let was_masked = self.masked;
        self.masked = false;
        was_masked
    }
    /// Renders the symbol: wrapped in the mask while hidden, and with the two delimiters stripped once revealed.
    ///
    /// # Usage
    /// ```
    /// # use spoiler_sweeper::{CellSymbol, CellValue};
    /// let mut symbol = CellSymbol::masked(CellValue::Count(3));
    /// assert_eq!(symbol.render("boom", false), "||:three:||");
    /// symbol.unmask();
    /// assert_eq!(symbol.render("boom", false), ":three:");
    /// assert_eq!(symbol.render("boom", true), " :three: ");
    /// ```
    pub fn render(self, mine_symbol: &str, spacing: bool) -> String {
        let wrapped = wrap(self.value.name(mine_symbol), spacing);
        if self.masked {
            return wrapped;
        }
        let bare = strip_mask(&wrapped).map(String::from);
        bare.unwrap_or(wrapped)
    }
}
impl Default for CellSymbol {
    /// Returns a masked `Count(0)`.
    #[inline(always)]
    fn default() -> Self {
        Self::masked(CellValue::default())
    }
}

/// Wraps an emoji name in the spoiler mask.
///
/// With `spacing` the result is `"|| :<name>: ||"`, otherwise `"||:<name>:||"`. Either way the mask delimiters are exactly two characters wide on each side, which is what [`strip_mask`][sm] removes.
///
/// [sm]: fn.strip_mask.html "strip_mask — removes the spoiler mask from a wrapped symbol"
#[must_use]
pub fn wrap(name: &str, spacing: bool) -> String {
    if spacing {
        format!("{0} :{1}: {0}", MASK_DELIMITER, name)
    } else {
        format!("{0}:{1}:{0}", MASK_DELIMITER, name)
    }
}
/// Removes the spoiler mask from a wrapped symbol by stripping the two delimiter characters from each end, or returns `None` if the string isn't wrapped.
///
/// Any padding added by [`wrap`][w] with `spacing` survives the strip; trim the result to get the bare `:<name>:` token.
///
/// [w]: fn.wrap.html "wrap — wraps an emoji name in the spoiler mask"
pub fn strip_mask(wrapped: &str) -> Option<&str> {
    wrapped.strip_prefix(MASK_DELIMITER)?.strip_suffix(MASK_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_matches_spoiler_forms() {
        assert_eq!(wrap("zero", true), "|| :zero: ||");
        assert_eq!(wrap("zero", false), "||:zero:||");
        assert_eq!(wrap("boom", true), "|| :boom: ||");
    }

    #[test]
    fn strip_mask_removes_exactly_two_characters_per_side() {
        let spaced = wrap("zero", true);
        assert_eq!(strip_mask(&spaced), Some(" :zero: "));
        assert_eq!(strip_mask(&spaced).map(str::trim), Some(":zero:"));
        let tight = wrap("zero", false);
        assert_eq!(strip_mask(&tight), Some(":zero:"));
    }

    #[test]
    fn strip_mask_rejects_unwrapped_text() {
        assert_eq!(strip_mask(":zero:"), None);
        assert_eq!(strip_mask("||:zero:"), None);
        assert_eq!(strip_mask("|||"), None);
        assert_eq!(strip_mask("||||"), Some(""));
    }

    #[test]
    fn values_are_named_after_counts_and_mine_symbol() {
        for (count, name) in COUNT_NAMES.iter().enumerate() {
            assert_eq!(CellValue::Count(count as u8).name("boom"), *name);
        }
        assert_eq!(CellValue::Mine.name("bomb"), "bomb");
        assert_eq!(CellValue::Count(200).name("boom"), "eight");
    }

    #[test]
    fn unmasking_is_one_way_and_keeps_the_value() {
        let mut symbol = CellSymbol::masked(CellValue::Mine);
        assert!(symbol.unmask());
        assert!(!symbol.unmask());
        assert!(!symbol.is_masked());
        assert_eq!(symbol.value, CellValue::Mine);
        assert_eq!(symbol.render("boom", true), " :boom: ");
    }

    #[test]
    fn default_symbol_is_masked_zero() {
        let symbol = CellSymbol::default();
        assert!(symbol.is_masked());
        assert!(symbol.value.is_zero());
        assert_eq!(symbol.render("boom", true), "|| :zero: ||");
    }
}
