//! Pre-solved Minesweeper fields for chat, hidden behind click-to-reveal spoiler tags.
//!
//! The crate places mines, counts the neighboring mines of every safe cell, optionally reveals an opening for the first move and renders the result as text where each cell is an emoji name wrapped in a spoiler (`|| :one: ||`). Pasted into a chat client which supports spoilers, the text plays as a Minesweeper game: clicking a spoiler reveals the cell beneath it. No game state is tracked after generation.
//!
//! The entry point is [`FieldGenerator`][fg], or [`generate`][gen] when the default random source will do.
//!
//! # Feature gates
//! - `std` — enable a dependency on the hosted standard library (**enabled by default**)
//!
//!   Without this feature, the crate only depends on `core` and `alloc`, and the default random source is unavailable: pass your own [`RandomSource`][rs] to a [`FieldGenerator`][fg].
//!
//! - `generation` — enable the dependency on `rand` (**enabled by default**)
//!
//!   Provides [`RngSource`][rngs], which turns any `rand` generator into a random source, and the default thread-local random source used by [`generate`][gen]. Disable to remove said dependency if you're supplying randomness yourself.
//!
//! - `serialization` — enable support for serialization (**enabled by default**, disable to speed up compilation)
//!
//!   Enables the dependency on `serde` and its derive macros, which allows options to be loaded from any format supported by `serde` (missing values take their defaults) and fields and rendered output to be stored or sent elsewhere.
//!
//! - `track_caller` — use `track_caller` attributes
//!
//!   Places the `track_caller` attribute on indexing operators and other panicking methods, improving panic messages.
//!
//! # Logging
//! Generation reports through the `log` facade: refused fields at the `warn` level, the phases of the pipeline at `debug` and mine placement statistics at `trace`. No logger is installed by the crate.
//!
//! [fg]: struct.FieldGenerator.html "FieldGenerator — runs the generation pipeline"
//! [gen]: fn.generate.html "generate — generates a field with the default random source"
//! [rs]: trait.RandomSource.html "RandomSource — a source of uniformly distributed floats in [0, 1)"
//! [rngs]: struct.RngSource.html "RngSource — adapts a rand generator"

#![warn(clippy::pedantic, clippy::cargo, clippy::nursery)]
// Copypaste the following to enable this on specific methods:
//  #[cfg_attr(feature = "track_caller", track_caller)]

// Copypaste to derive Serde traits on specific items:
// #[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod clearing;
pub use clearing::*;
mod error;
pub use error::*;
mod field;
pub use field::*;
mod generator;
pub use generator::*;
pub mod iter;
pub use iter::*;
mod options;
pub use options::*;
mod random;
pub use random::*;
mod render;
pub use render::*;
mod symbol;
pub use symbol::*;
