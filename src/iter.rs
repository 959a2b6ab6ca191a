//! Iterators useful for traversing a field.
//!
//! Currently available:
//! - [`RowIter`][rowiter] — iterates over a single field row
//! - [`FieldRowsIter`][fri] — iterates over the rows of a field (each item is a [`RowIter`][rowiter])
//! - [`NeighborIter`][ni] — iterates over the in-bounds neighbors of a cell
//!
//! [rowiter]: struct.RowIter.html "RowIter — iterates over a single field row"
//! [fri]: struct.FieldRowsIter.html "FieldRowsIter — an iterator over the rows of a field"
//! [ni]: struct.NeighborIter.html "NeighborIter — an iterator over the neighbors of a cell"

use core::{
    ops::{Range, Index},
    iter::FusedIterator
};
use crate::{
    CellSymbol,
    Field, FieldCoordinates, FieldDimensions,
};

/// Iterates over a single field row.
///
/// Can also be indexed to pull arbitrary cells from the row, regardless of the iterator state.
///
/// # Usage
/// ```
/// # use spoiler_sweeper::{Field, CellValue, RowIter};
/// # use core::num::NonZeroUsize;
/// #
/// let mut field = Field::empty([ // Create a field to work with
///     NonZeroUsize::new(4).unwrap(),
///     NonZeroUsize::new(9).unwrap()
/// ]);
/// field[[3, 8]].value = CellValue::Mine; // Place a mine (remember that indicies start from 0)
/// let mut rowiter = field.row(3); // Create an iterator over the fourth row
/// let mine_cell = rowiter.nth(8) // Find the nineth element in the row
///     .unwrap(); // Get rid of the Option wrap
/// assert!(mine_cell.value.is_mine()); // It's a mine
/// ```
#[derive(Clone)]
pub struct RowIter<'f> {
    field: &'f Field,
    row: usize,
    index: Range<usize>
}
impl<'f> RowIter<'f> {
    /// Creates an iterator over the specified row of the specified field.
    #[inline(always)]
    pub fn new(field: &'f Field, row: usize) -> Self {
        Self {field, row, index: 0..field.dimensions()[1].get()}
    }
    /// Returns the cell at the specified column, or `None` if such a column doesn't exist. The row for which the iterator was created is used.
    #[inline(always)]
    pub fn get(&self, column: usize) -> Option<CellSymbol> {
        self.field.get([self.row, column]).copied()
    }
    /// Returns the field which the iterator iterates over.
    #[inline(always)]
    pub fn field(&self) -> &'f Field {
        self.field
    }
}
impl<'f> Iterator for RowIter<'f> {
    type Item = CellSymbol;
    fn next(&mut self) -> Option<Self::Item> {
        if self.len() == 0 {
            return None;
        }
        let el = self.field.get([self.row, self.index.start]);
        self.index.start += 1;
        el.copied()
    }
    /// Returns the remaining amount of cells to iterate upon.
    ///
    /// See `len` from the `ExactSizedIterator` trait.
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl<'f> DoubleEndedIterator for RowIter<'f> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len() == 0 {
            return None;
        }
        self.index.end -= 1;
        self.field.get([self.row, self.index.end]).copied()
    }
}
impl<'f> ExactSizeIterator for RowIter<'f> {
    /// Returns the remaining amount of cells to iterate upon.
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.end - self.index.start
    }
}
impl FusedIterator for RowIter<'_> {}
impl Index<usize> for RowIter<'_> {
    type Output = CellSymbol;
    /// Returns the cell at the specified column.
    ///
    /// # Panics
    /// Panics if the column is out of bounds.
    #[inline(always)]
    #[cfg_attr(feature = "track_caller", track_caller)]
    fn index(&self, column: usize) -> &CellSymbol {
        &self.field[[self.row, column]]
    }
}

/// An iterator over the rows of a field.
///
/// # Usage
/// ```
/// # use spoiler_sweeper::{Field, CellValue, FieldRowsIter};
/// # use core::num::NonZeroUsize;
/// #
/// let mut field = Field::empty([
///     NonZeroUsize::new(4).unwrap(),
///     NonZeroUsize::new(9).unwrap()
/// ]);
/// field[[3, 8]].value = CellValue::Mine;
/// let mut row_with_mine: Option<usize> = None;
/// for (y, mut row) in field.rows().enumerate() {
///     if row.any(|cell| cell.value.is_mine()) {
///         row_with_mine = Some(y);
///     }
/// }
/// assert_eq!(row_with_mine, Some(3));
/// ```
#[derive(Clone)]
pub struct FieldRowsIter<'f> {
    field: &'f Field,
    index: Range<usize>
}
impl<'f> FieldRowsIter<'f> {
    /// Returns an iterator over the specified field's rows.
    #[inline(always)]
    pub fn new(field: &'f Field) -> Self {
        Self {
            field, index: 0..field.dimensions()[0].get()
        }
    }
}
impl<'f> Iterator for FieldRowsIter<'f> {
    type Item = RowIter<'f>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.len() == 0 {
            return None;
        }
        let el = Some(self.field.row(self.index.start));
        self.index.start += 1;
        el
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}
impl<'f> DoubleEndedIterator for FieldRowsIter<'f> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len() == 0 {
            return None;
        }
        self.index.end -= 1;
        Some(self.field.row(self.index.end))
    }
}
impl<'f> ExactSizeIterator for FieldRowsIter<'f> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.index.end - self.index.start
    }
}
impl FusedIterator for FieldRowsIter<'_> {}

/// The offsets of the eight neighbors, in clockwise order starting from the top left: ↖, ↑, ↗, →, ↘, ↓, ↙, ←.
const DISPLACEMENTS: [[isize; 2]; 8] = [
    [-1, -1], [-1, 0], [-1, 1],
    [0, 1],
    [1, 1], [1, 0], [1, -1],
    [0, -1],
];

/// An iterator over the directly and diagonally adjacent cells of a location, skipping the ones which fall outside of the field. Fields do not wrap around.
///
/// The iterator only holds the dimensions, not a reference to the field, so it can be used while mutating the field.
///
/// # Usage
/// ```
/// # use spoiler_sweeper::NeighborIter;
/// # use core::num::NonZeroUsize;
/// #
/// let dimensions = [NonZeroUsize::new(3).unwrap(), NonZeroUsize::new(3).unwrap()];
/// assert_eq!(NeighborIter::new([0, 0], dimensions).count(), 3); // Corner
/// assert_eq!(NeighborIter::new([0, 1], dimensions).count(), 5); // Edge
/// assert_eq!(NeighborIter::new([1, 1], dimensions).count(), 8); // Center
/// ```
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: FieldCoordinates,
    bounds: FieldDimensions,
    index: usize,
}
impl NeighborIter {
    /// Creates an iterator over the neighbors of `center` on a field with the given dimensions.
    #[inline(always)]
    pub fn new(center: FieldCoordinates, bounds: FieldDimensions) -> Self {
        Self { center, bounds, index: 0 }
    }
    /// Applies a displacement, returning a location only when it stays in bounds.
    fn displace(&self, delta: [isize; 2]) -> Option<FieldCoordinates> {
        let row = self.center[0].checked_add_signed(delta[0])?;
        let column = self.center[1].checked_add_signed(delta[1])?;
        if row < self.bounds[0].get() && column < self.bounds[1].get() {
            Some([row, column])
        } else {None}
    }
}
impl Iterator for NeighborIter {
    type Item = FieldCoordinates;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(self.index) {
            self.index += 1;
            if let Some(location) = self.displace(delta) {
                return Some(location);
            }
        }
        None
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DISPLACEMENTS.len() - self.index.min(DISPLACEMENTS.len())))
    }
}
impl FusedIterator for NeighborIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    fn dims(rows: usize, columns: usize) -> FieldDimensions {
        [NonZeroUsize::new(rows).unwrap(), NonZeroUsize::new(columns).unwrap()]
    }

    #[test]
    fn neighbors_are_clipped_at_every_edge() {
        let neighbors: Vec<_> = NeighborIter::new([2, 3], dims(3, 4)).collect();
        assert_eq!(neighbors, [[1, 2], [1, 3], [2, 2]]);
        let neighbors: Vec<_> = NeighborIter::new([0, 0], dims(1, 2)).collect();
        assert_eq!(neighbors, [[0, 1]]);
        assert_eq!(NeighborIter::new([0, 0], dims(1, 1)).count(), 0);
    }

    #[test]
    fn neighbors_exclude_the_center() {
        assert!(NeighborIter::new([1, 1], dims(3, 3)).all(|location| location != [1, 1]));
    }

    #[test]
    fn rows_iterate_in_order_from_both_ends() {
        let field = Field::empty(dims(3, 2));
        assert_eq!(field.rows().len(), 3);
        assert_eq!(field.rows().next_back().map(|row| row.len()), Some(2));
        let mut row = field.row(1);
        assert!(row.get(1).is_some());
        assert!(row.get(2).is_none());
        assert!(row.next().is_some());
        assert!(row.next_back().is_some());
        assert!(row.next().is_none());
    }
}
