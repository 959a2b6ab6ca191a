//! Clearings: connected regions of zero cells, traversed through all eight directions.

use core::num::NonZeroUsize;
use alloc::{
    collections::BTreeSet,
    vec::Vec,
};
use crate::{
    Field, FieldCoordinates,
};

/// A clearing on the specified field.
///
/// This is merely a reference to the area on a field which is known to be a clearing: the zero cell used as the anchor, every zero cell connected to it through directly or diagonally adjacent zero cells, and optionally the "shore" of number cells bordering them. Nothing is owned by this structure.
///
/// Generation itself only needs [`ClearingMut`][cm]. This read-only view is for inspecting a generated field, such as measuring the opening which the first reveal would produce, without modifying the field.
///
/// # Usage
/// ```
/// # use spoiler_sweeper::{Field, CellValue};
/// # use core::num::NonZeroUsize;
/// let mut field = Field::empty([NonZeroUsize::new(3).unwrap(), NonZeroUsize::new(4).unwrap()]);
/// field[[0, 3]].value = CellValue::Mine;
/// field.populate();
/// let clearing = field.clearing([2, 0]).unwrap();
/// assert_eq!(clearing.size(false).get(), 8); // Zero cells only
/// assert_eq!(clearing.size(true).get(), 11); // With the three numbers around the mine
/// assert!(!clearing.includes([0, 3], true));
/// ```
///
/// [cm]: struct.ClearingMut.html "ClearingMut — reveals a clearing together with its shore"
#[derive(Copy, Clone)]
pub struct Clearing<'f> {
    field: &'f Field,
    anchor_location: FieldCoordinates
}
impl<'f> Clearing<'f> {
    /// Returns a `Clearing` on the specified `Field`, or `None` if the location holds a mine, has 1 or more neighboring mines or is out of bounds.
    pub fn new(field: &'f Field, anchor_location: FieldCoordinates) -> Option<Self> {
        if field.get(anchor_location)?.value.is_zero() {
            Some(Self { field, anchor_location })
        } else {None}
    }
    /// Returns the field on which this clearing is located.
    #[inline(always)]
    pub fn field(self) -> &'f Field { self.field }
    /// Returns the location around which this clearing is formed.
    #[inline(always)]
    pub fn anchor_location(self) -> FieldCoordinates { self.anchor_location }

    /// Executes the specified closure on every cell inside the clearing, exactly once per cell. Optionally can include the "shore" (cells with numbers) as a part of the clearing.
    ///
    /// The closure takes a reference to the field as the first argument and the location of the cell as the second one. No return value is expected.
    pub fn for_every_cell<F>(self, include_shore: bool, mut f: F)
    where F: FnMut(&'f Field, FieldCoordinates) {
        let field = self.field;
        let mut visited = BTreeSet::new();
        // Heap-allocated stack, so that large clearings cannot overflow the thread stack.
        let mut stack = Vec::<FieldCoordinates>::with_capacity(10);
        visited.insert(self.anchor_location);
        stack.push(self.anchor_location);
        f(field, self.anchor_location);
        while let Some(here) = stack.pop() {
            for neighbor in field.neighbors(here) {
                if !visited.insert(neighbor) {continue};
                let value = field[neighbor].value;
                if value.is_zero() {
                    stack.push(neighbor);
                    f(field, neighbor);
                } else if include_shore && !value.is_mine() {
                    f(field, neighbor);
                }
            }
        }
    }
    /// Returns the size of the clearing, in cells. Optionally can include the "shore" (cells with numbers) as a part of the clearing.
    #[must_use = "fully traversing a clearing is an expensive operation involving memory allocation"]
    pub fn size(self, include_shore: bool) -> NonZeroUsize {
        let mut counter = 0_usize;
        self.for_every_cell(include_shore, |_, _| counter += 1);
        // The anchor itself is always visited.
        NonZeroUsize::new(counter).unwrap_or(NonZeroUsize::MIN)
    }
    /// Returns `true` if the given cell is inside the clearing, `false` otherwise. Optionally can include the "shore" (cells with numbers) as a part of the clearing.
    #[must_use = "fully traversing a clearing is an expensive operation involving memory allocation"]
    pub fn includes(self, coordinates: FieldCoordinates, include_shore: bool) -> bool {
        let mut includes = false;
        self.for_every_cell(include_shore, |_, here| if here == coordinates {includes = true});
        includes
    }
}

/// A **mutable** reference to a clearing on the specified field.
///
/// This is what reveals an opening: see [`open`][opn].
///
/// [opn]: #method.open "open — reveals the clearing together with its shore"
pub struct ClearingMut<'f> {
    field: &'f mut Field,
    anchor_location: FieldCoordinates
}
impl<'f> ClearingMut<'f> {
    /// Returns a `ClearingMut` on the specified `Field`, or `None` if the location holds a mine, has 1 or more neighboring mines or is out of bounds.
    pub fn new(field: &'f mut Field, anchor_location: FieldCoordinates) -> Option<Self> {
        if field.get(anchor_location)?.value.is_zero() {
            Some(Self { field, anchor_location })
        } else {None}
    }
    /// Returns the field on which this clearing is located.
    #[inline(always)]
    pub fn field(self) -> &'f Field { self.field }
    /// Returns the location around which this clearing is formed.
    #[inline(always)]
    pub fn anchor_location(&self) -> FieldCoordinates { self.anchor_location }

    /// Reveals the clearing together with its shore and returns the amount of cells which were masked before the call.
    ///
    /// The anchor is unmasked first. Then, starting from the anchor, every masked neighbor of a zero cell is unmasked regardless of its value, and the neighbors which are zero cells themselves are expanded in turn. Cells which were already revealed are not expanded again, which is what bounds the traversal.
    pub fn open(self) -> usize {
        let field = self.field;
        let mut opened = 0_usize;
        if field.unmask(self.anchor_location) {opened += 1};

        let mut stack = Vec::<FieldCoordinates>::with_capacity(10);
        stack.push(self.anchor_location);
        while let Some(here) = stack.pop() {
            for neighbor in field.neighbors(here) {
                if !field.unmask(neighbor) {continue};
                opened += 1;
                if field[neighbor].value.is_zero() {
                    stack.push(neighbor);
                }
            }
        }
        opened
    }
}
impl<'f> From<ClearingMut<'f>> for Clearing<'f> {
    fn from(op: ClearingMut<'f>) -> Self {
        Self {field: op.field, anchor_location: op.anchor_location}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellValue, FieldDimensions};

    fn dims(rows: usize, columns: usize) -> FieldDimensions {
        [NonZeroUsize::new(rows).unwrap(), NonZeroUsize::new(columns).unwrap()]
    }

    fn populated(rows: usize, columns: usize, mines: &[FieldCoordinates]) -> Field {
        let mut field = Field::empty(dims(rows, columns));
        for &location in mines {
            field[location].value = CellValue::Mine;
        }
        field.populate();
        field
    }

    #[test]
    fn clearing_requires_a_zero_anchor() {
        let mut field = populated(3, 3, &[[0, 0]]);
        assert!(field.clearing([0, 0]).is_none()); // Mine
        assert!(field.clearing([1, 1]).is_none()); // Number
        assert!(field.clearing([3, 0]).is_none()); // Out of bounds
        assert!(field.clearing([2, 2]).is_some());
        assert!(field.clearing_mut([2, 2]).is_some());
    }

    #[test]
    fn open_reveals_region_and_shore_only() {
        // Mine in the right column splits the field: the left columns are zeros, the middle column is shore.
        let mut field = populated(3, 5, &[[0, 4], [1, 4], [2, 4]]);
        let opened = field.clearing_mut([1, 0]).unwrap().open();
        assert_eq!(opened, 12);
        for row in 0..3 {
            for column in 0..4 {
                assert!(!field[[row, column]].is_masked());
            }
            assert!(field[[row, 4]].is_masked());
        }
    }

    #[test]
    fn open_expands_diagonally() {
        // The two zero regions only touch through a diagonal.
        let mut field = populated(4, 4, &[[0, 3], [3, 0]]);
        assert!(field[[1, 1]].value.is_zero());
        assert!(field[[2, 2]].value.is_zero());
        field.clearing_mut([0, 0]).unwrap().open();
        assert!(!field[[3, 3]].is_masked());
        assert!(field[[0, 3]].is_masked());
        assert!(field[[3, 0]].is_masked());
        assert_eq!(field.count_unmasked(), 14);
    }

    #[test]
    fn isolated_zero_reveals_only_its_neighbors() {
        let mines = [[0, 0], [0, 4], [4, 0], [4, 4], [0, 2], [2, 0], [2, 4], [4, 2]];
        let mut field = populated(5, 5, &mines);
        assert!(field[[2, 2]].value.is_zero());
        let opened = field.clearing_mut([2, 2]).unwrap().open();
        assert_eq!(opened, 9);
        assert_eq!(field.count_unmasked(), 9);
    }

    #[test]
    fn open_matches_clearing_with_shore() {
        let mut field = populated(6, 7, &[[0, 3], [2, 5], [4, 1], [5, 6]]);
        let size = field.clearing([0, 0]).unwrap().size(true).get();
        let opened = field.clearing_mut([0, 0]).unwrap().open();
        assert_eq!(opened, size);
        let reference = populated(6, 7, &[[0, 3], [2, 5], [4, 1], [5, 6]]);
        let clearing = reference.clearing([0, 0]).unwrap();
        for row in 0..6 {
            for column in 0..7 {
                let location = [row, column];
                assert_eq!(!field[location].is_masked(), clearing.includes(location, true));
            }
        }
    }

    #[test]
    fn size_without_shore_counts_zeros_only() {
        let field = populated(3, 5, &[[0, 4], [1, 4], [2, 4]]);
        let clearing = field.clearing([0, 0]).unwrap();
        assert_eq!(clearing.size(false).get(), 9);
        assert_eq!(clearing.size(true).get(), 12);
        assert!(!clearing.includes([0, 3], false));
        assert!(clearing.includes([0, 3], true));
    }

    #[test]
    fn converting_keeps_the_anchor() {
        let mut field = populated(2, 2, &[]);
        let clearing: Clearing<'_> = field.clearing_mut([1, 1]).unwrap().into();
        assert_eq!(clearing.anchor_location(), [1, 1]);
        assert_eq!(clearing.size(true).get(), 4);
    }
}
