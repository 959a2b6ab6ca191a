//! The playfield being generated.
//!
//! A `Field` goes through three phases, in this exact order: mines are [placed][m_place] on an empty field, the field is [populated][m_populate] with neighboring mine counts, and finally an opening may be revealed through a [clearing][m_clearing]. The [`FieldGenerator`][fg] drives these phases; they are exposed here for implementations which want to run them by hand.
//!
//! [m_place]: struct.Field.html#method.place_mines "place_mines — installs mines by rejection sampling"
//! [m_populate]: struct.Field.html#method.populate "populate — computes the neighboring mine counts"
//! [m_clearing]: struct.Field.html#method.clearing_mut "clearing_mut — returns a mutable clearing around a zero cell"
//! [fg]: struct.FieldGenerator.html "FieldGenerator — runs the generation pipeline"

use core::{
    ops::{Index, IndexMut},
    num::NonZeroUsize,
};
use alloc::{
    vec::Vec
};
#[cfg(feature = "serialization")]
use serde::Serialize;
use crate::{
    CellSymbol, CellValue,
    Clearing, ClearingMut,
    RowIter, FieldRowsIter, NeighborIter,
    RandomSource,
};

/// Represents a playfield: a matrix of [cell symbols][cs], stored in row-major order.
///
/// [cs]: struct.CellSymbol.html "CellSymbol — a cell on the field"
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct Field {
    dimensions: FieldDimensions,
    storage: Vec<CellSymbol>,
}
/// The dimensions of a field.
///
/// The first element specifies the height (the number of rows), while the second one specifies the width (number of columns). As required by `NonZeroUsize`, a field cannot be smaller than 1x1.
pub type FieldDimensions = [NonZeroUsize; 2];
/// The coordinates of a cell on a field.
///
/// The first element specifies the row index, while the second one specifies the column index. The coordinate system starts from zero, i.e. the coordinates `[0, 0]` correspond to the top left corner.
pub type FieldCoordinates = [usize; 2];
impl Field {
    /// Creates a field with the given dimensions, filled with masked cells without mines.
    ///
    /// # Panics
    /// Panics if the area of the field overflows `usize` or its storage cannot be allocated. See [`try_empty`][te] for the fallible version.
    ///
    /// [te]: #method.try_empty "try_empty — creates an empty field or returns None"
    #[inline]
    #[must_use = "this performs a memory allocation as big as the area of the field"]
    #[cfg_attr(feature = "track_caller", track_caller)]
    pub fn empty(dimensions: FieldDimensions) -> Self {
        Self::try_empty(dimensions).expect("field area overflows or cannot be allocated")
    }
    /// Creates a field with the given dimensions, filled with masked cells without mines, or `None` if the area of the field overflows `usize` or its storage cannot be allocated.
    #[must_use = "this performs a memory allocation as big as the area of the field"]
    pub fn try_empty(dimensions: FieldDimensions) -> Option<Self> {
        let area = dimensions[0].get().checked_mul(dimensions[1].get())?;
        let mut storage = Vec::new();
        storage.try_reserve_exact(area).ok()?;
        storage.resize(area, CellSymbol::default());
        Some(Self { dimensions, storage })
    }
    /// Creates a field with the specified dimensions from the specified `Vec` of cells, given in row-major order, or `None` if the amount of cells doesn't match the dimensions.
    #[must_use]
    pub fn from_dimensions_and_storage(dimensions: FieldDimensions, storage: Vec<CellSymbol>) -> Option<Self> {
        let area = dimensions[0].get().checked_mul(dimensions[1].get())?;
        if storage.len() == area {
            Some(Self {dimensions, storage})
        } else {
            None
        }
    }
    /// Installs exactly `mines` mines on distinct cells, chosen uniformly with the given random source.
    ///
    /// Each attempt draws the row as `floor(r * height)` and then the column as `floor(r * width)`. An attempt landing on a cell which already holds a mine is retried without being counted, so the loop finishes once `mines` distinct cells are mined.
    ///
    /// # Panics
    /// Panics if `mines` is not smaller than the area of the field, since such a placement could never finish. Only mines placed by this call are guaranteed to be distinct from each other, so run this on an empty field.
    #[cfg_attr(feature = "track_caller", track_caller)]
    pub fn place_mines<R: RandomSource + ?Sized>(&mut self, mines: usize, source: &mut R) {
        let [height, width] = [self.dimensions[0].get(), self.dimensions[1].get()];
        assert!(mines < height * width, "cannot place {} mines on a field of {} cells", mines, height * width);

        let mut mines_left = mines;
        let mut collisions = 0_usize;
        while mines_left > 0 {
            let row = source.next_index(height);
            let column = source.next_index(width);
            let cell = &mut self[[row, column]];
            if cell.value.is_mine() {
                collisions += 1;
                continue; // Jumps over the decrement.
            }
            cell.value = CellValue::Mine;
            mines_left -= 1;
        }
        log::trace!("placed {} mines with {} collisions", mines, collisions);
    }
    /// Replaces the value of every safe cell with its neighboring mine count, masking every cell, and returns the coordinates of all safe cells in row-major order.
    ///
    /// Must run after all mines have been placed, since the counts are computed once.
    pub fn populate(&mut self) -> Vec<FieldCoordinates> {
        let [height, width] = [self.dimensions[0].get(), self.dimensions[1].get()];
        let mut safe_cells = Vec::with_capacity(self.storage.len());
        for row in 0..height {
            for column in 0..width {
                let location = [row, column];
                let value = if self[location].value.is_mine() {
                    CellValue::Mine
                } else {
                    safe_cells.push(location);
                    CellValue::Count(self.count_neighboring_mines(location))
                };
                self[location] = CellSymbol::masked(value);
            }
        }
        safe_cells
    }
    /// Returns the height and width of the field.
    #[inline(always)]
    pub const fn dimensions(&self) -> FieldDimensions {
        self.dimensions
    }
    /// Returns the amount of cells holding a mine.
    #[must_use = "traversing the entire field is obscenely expensive"]
    pub fn count_mines(&self) -> usize {
        self.storage.iter().filter(|cell| cell.value.is_mine()).count()
    }
    /// Returns the amount of cells which have been revealed.
    #[must_use = "traversing the entire field is obscenely expensive"]
    pub fn count_unmasked(&self) -> usize {
        self.storage.iter().filter(|cell| !cell.is_masked()).count()
    }
    /// Counts all neighboring mines around a spot.
    ///
    /// All directly and diagonally adjacent mines are considered neighboring, and the field does not wrap around its edges. If the cell is a mine, the cell itself isn't counted.
    pub fn count_neighboring_mines(&self, location: FieldCoordinates) -> u8 {
        let mut count = 0_u8;
        for neighbor in self.neighbors(location) {
            if self[neighbor].value.is_mine() {count += 1;}
        }
        count
    }
    /// Detects whether a location is a mine, or `None` if it's out of bounds.
    #[inline]
    pub fn is_mine(&self, location: FieldCoordinates) -> Option<bool> {
        self.get(location).map(|cell| cell.value.is_mine())
    }
    /// Reveals the cell at the given location. Returns `true` if it was masked before, `false` if it was already revealed or is out of bounds.
    #[inline]
    pub fn unmask(&mut self, location: FieldCoordinates) -> bool {
        self.get_mut(location).map_or(false, CellSymbol::unmask)
    }
    /// Returns an iterator over the in-bounds neighbors of a location.
    #[inline(always)]
    pub fn neighbors(&self, location: FieldCoordinates) -> NeighborIter {
        NeighborIter::new(location, self.dimensions)
    }

    /// Returns the cell at the row `coordinates[0]` and column `coordinates[1]`, both starting at zero, or `None` if the index is out of bounds.
    ///
    /// This is the immutable version of `get_mut`.
    #[inline]
    pub fn get(&self, coordinates: FieldCoordinates) -> Option<&CellSymbol> {
        let index = self.storage_index(coordinates)?;
        self.storage.get(index)
    }
    /// Returns a mutable reference to the cell at the row `coordinates[0]` and column `coordinates[1]`, both starting at zero, or `None` if the index is out of bounds.
    ///
    /// This is the mutable version of `get`.
    #[inline]
    pub fn get_mut(&mut self, coordinates: FieldCoordinates) -> Option<&mut CellSymbol> {
        let index = self.storage_index(coordinates)?;
        self.storage.get_mut(index)
    }
    fn storage_index(&self, [row, column]: FieldCoordinates) -> Option<usize> {
        let (height, width) = (self.dimensions[0].get(), self.dimensions[1].get());
        if row >= height || column >= width {return None};
        Some(column + row * width)
    }

    /// Returns an iterator over a single row.
    ///
    /// Said iterator can then also be indexed, thus serving as a versatile reference to a specific row.
    #[inline(always)]
    pub fn row(&self, row: usize) -> RowIter<'_> {
        RowIter::new(self, row)
    }
    /// Returns an iterator over the field's rows.
    #[inline(always)]
    pub fn rows(&self) -> FieldRowsIter<'_> {
        FieldRowsIter::new(self)
    }
    /// Returns a `Clearing` on the specified `Field`, or `None` if the location holds a mine, has 1 or more neighboring mines or is out of bounds.
    #[inline(always)]
    pub fn clearing(&self, anchor_location: FieldCoordinates) -> Option<Clearing<'_>> {
        Clearing::new(self, anchor_location)
    }
    /// Returns a `ClearingMut` on the specified `Field`, or `None` if the location holds a mine, has 1 or more neighboring mines or is out of bounds.
    #[inline(always)]
    pub fn clearing_mut(&mut self, anchor_location: FieldCoordinates) -> Option<ClearingMut<'_>> {
        ClearingMut::new(self, anchor_location)
    }
}
impl Index<FieldCoordinates> for Field {
    type Output = CellSymbol;
    /// Returns the cell at the row `coordinates[0]` and column `coordinates[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method. For a version which returns an `Option` instead of panicking if the index is out of bounds, see `get`.
    #[inline(always)]
    #[cfg_attr(feature = "track_caller", track_caller)]
    fn index(&self, coordinates: FieldCoordinates) -> &Self::Output {
        self.get(coordinates).expect("index out of bounds")
    }
}
impl IndexMut<FieldCoordinates> for Field {
    /// Returns the cell at the row `coordinates[0]` and column `coordinates[1]`, both starting at zero.
    ///
    /// # Panics
    /// Index checking is enabled for this method. For a version which returns an `Option` instead of panicking if the index is out of bounds, see `get_mut`.
    #[inline(always)]
    #[cfg_attr(feature = "track_caller", track_caller)]
    fn index_mut(&mut self, coordinates: FieldCoordinates) -> &mut Self::Output {
        self.get_mut(coordinates).expect("index out of bounds")
    }
}
