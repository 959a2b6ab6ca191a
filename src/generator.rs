//! The generation pipeline.

use core::num::NonZeroUsize;
use alloc::vec::Vec;
use crate::{
    Field, FieldCoordinates, FieldOptions, FieldOutput,
    RandomSource,
    render,
};

/// A generated field before rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedField {
    /// The populated field, possibly with an opening revealed.
    pub field: Field,
    /// The coordinates of every cell without a mine, in row-major order.
    pub safe_cells: Vec<FieldCoordinates>,
    /// The cell the opening was revealed from, or `None` if nothing was revealed.
    pub reveal_origin: Option<FieldCoordinates>,
}

/// Runs the generation pipeline: mine placement, mine counting, the optional first reveal and rendering, in this exact order.
///
/// Each call generates a new field; nothing is kept between calls except the state of the random source.
///
/// # Usage
/// ```
/// # use spoiler_sweeper::{FieldGenerator, FieldOptions, FieldOutput, OutputMode};
/// let options = FieldOptions { rows: 2, columns: 2, mines: 1, spacing: false, ..FieldOptions::default() };
/// let mut draws = [0.0_f64, 0.0].iter().copied();
/// let mut generator = FieldGenerator::new(options, move || draws.next().unwrap_or(0.0));
/// let output = generator.start();
/// assert_eq!(output, Some(FieldOutput::Text("||:boom:||||:one:||\n||:one:||||:one:||".into())));
///
/// let too_dense = FieldOptions { rows: 3, columns: 3, mines: 5, ..FieldOptions::default() };
/// assert_eq!(FieldGenerator::new(too_dense, || 0.5_f64).start(), None);
/// ```
#[derive(Clone, Debug)]
pub struct FieldGenerator<R> {
    options: FieldOptions,
    source: R,
}
impl<R: RandomSource> FieldGenerator<R> {
    /// Creates a generator drawing all of its randomness from `source`.
    #[inline]
    pub fn new(options: FieldOptions, source: R) -> Self {
        Self { options, source }
    }
    /// Returns the options used for generation.
    #[inline(always)]
    pub fn options(&self) -> &FieldOptions {
        &self.options
    }
    /// Consumes the generator, returning the random source in its current state.
    #[inline(always)]
    pub fn into_source(self) -> R {
        self.source
    }

    /// Generates a field and renders it according to the options, or returns `None` if the field has no more than twice as many cells as mines or is too large to allocate.
    pub fn start(&mut self) -> Option<FieldOutput> {
        let generated = self.generate_field()?;
        Some(render(&generated.field, &self.options))
    }
    /// Generates a field without rendering it, or returns `None` if the field has no more than twice as many cells as mines or is too large to allocate.
    pub fn generate_field(&mut self) -> Option<GeneratedField> {
        let options = &self.options;
        if !options.is_generatable() {
            log::warn!(
                "refusing to generate a {}x{} field with {} mines: too dense to generate safely",
                options.rows, options.columns, options.mines
            );
            return None;
        }
        // Both dimensions are nonzero, otherwise the field would have no cells and could not be generatable.
        let dimensions = [NonZeroUsize::new(options.rows)?, NonZeroUsize::new(options.columns)?];

        let mut field = match Field::try_empty(dimensions) {
            Some(field) => field,
            None => {
                log::warn!(
                    "refusing to generate a {}x{} field: its storage cannot be allocated",
                    options.rows, options.columns
                );
                return None;
            },
        };
        field.place_mines(options.mines, &mut self.source);
        let safe_cells = field.populate();
        log::debug!(
            "generated a {}x{} field with {} mines and {} safe cells",
            options.rows, options.columns, options.mines, safe_cells.len()
        );
        let reveal_origin = self.reveal_first_cell(&mut field, &safe_cells);
        Some(GeneratedField { field, safe_cells, reveal_origin })
    }

    /// Reveals the starting cell, if enabled, and returns its location.
    ///
    /// With the zero guarantee, a zero cell is chosen among the safe cells and its whole clearing is opened. Otherwise, or when the field has no zero cells at all, a single safe cell is revealed.
    fn reveal_first_cell(&mut self, field: &mut Field, safe_cells: &[FieldCoordinates]) -> Option<FieldCoordinates> {
        if !self.options.reveal_first_cell {
            return None;
        }
        if safe_cells.is_empty() {
            log::warn!("no safe cells to reveal");
            return None;
        }
        if self.options.zero_start {
            let zero_cells: Vec<FieldCoordinates> = safe_cells.iter()
                .copied()
                .filter(|&location| field[location].value.is_zero())
                .collect();
            if !zero_cells.is_empty() {
                let origin = zero_cells[self.source.next_index(zero_cells.len())];
                let opened = field.clearing_mut(origin).map_or(0, |clearing| clearing.open());
                log::debug!("opened {} cells from the zero cell at {:?}", opened, origin);
                return Some(origin);
            }
            log::debug!("no zero cells on the field, revealing a single safe cell instead");
        }
        let origin = safe_cells[self.source.next_index(safe_cells.len())];
        field.unmask(origin);
        log::debug!("revealed the safe cell at {:?}", origin);
        Some(origin)
    }
}

/// Generates a field with the default random source, backed by the thread-local generator of `rand`, and renders it according to the options.
///
/// Returns `None` if the field has no more than twice as many cells as mines.
///
/// # Usage
/// ```
/// # use spoiler_sweeper::{generate, FieldOptions};
/// let output = generate(FieldOptions::default()).unwrap();
/// let text = output.as_text().unwrap();
/// assert_eq!(text.lines().count(), 9);
/// assert_eq!(text.matches(":boom:").count(), 10);
/// ```
#[cfg(all(feature = "generation", feature = "std"))]
pub fn generate(options: FieldOptions) -> Option<FieldOutput> {
    FieldGenerator::new(options, crate::thread_source()).start()
}
