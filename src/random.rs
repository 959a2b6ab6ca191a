//! Sources of uniform randomness.
//!
//! Generation never reaches for a global generator: every random draw goes through a [`RandomSource`][rs] handed to the [`FieldGenerator`][fg]. Any `FnMut() -> f64` closure qualifies, and with the `generation` feature [`RngSource`][rngs] adapts anything implementing `rand::RngCore`.
//!
//! [rs]: trait.RandomSource.html "RandomSource — a source of uniformly distributed floats in [0, 1)"
//! [fg]: struct.FieldGenerator.html "FieldGenerator — runs the generation pipeline"
//! [rngs]: struct.RngSource.html "RngSource — adapts a rand generator"

/// A source of uniformly distributed `f64` values in the half-open range `[0, 1)`.
///
/// # Usage
/// ```
/// # use spoiler_sweeper::RandomSource;
/// let mut values = [0.25_f64, 0.75].iter().copied().cycle();
/// let mut source = move || values.next().unwrap_or(0.0);
/// assert_eq!(source.next_f64(), 0.25);
/// assert_eq!(source.next_index(4), 3); // floor(0.75 * 4)
/// ```
pub trait RandomSource {
    /// Returns the next float. Values outside `[0, 1)` break the caller contract, but are tolerated by [`next_index`][ni].
    ///
    /// [ni]: #method.next_index "next_index — draws an index below the given bound"
    fn next_f64(&mut self) -> f64;
    /// Draws an index in `0..bound` as `floor(next_f64() * bound)`.
    ///
    /// The result is clamped into range, so a misbehaving source can skew the distribution but never produce an out-of-bounds index. Returns `0` for a zero bound.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn next_index(&mut self, bound: usize) -> usize {
        // Float to integer casts saturate, and map NaN to zero.
        let scaled = (self.next_f64() * bound as f64) as usize;
        scaled.min(bound.saturating_sub(1))
    }
}
impl<F: FnMut() -> f64> RandomSource for F {
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Adapts a `rand` generator into a [`RandomSource`][rs], sampling the standard `[0, 1)` float distribution.
///
/// Pass `RngSource(&mut rng)` to keep ownership of the generator.
///
/// [rs]: trait.RandomSource.html "RandomSource — a source of uniformly distributed floats in [0, 1)"
#[cfg(feature = "generation")]
#[derive(Copy, Clone, Debug, Default)]
pub struct RngSource<R>(pub R);
#[cfg(feature = "generation")]
impl<R: rand::RngCore> RandomSource for RngSource<R> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        use rand::Rng;
        self.0.gen::<f64>()
    }
}
#[cfg(all(feature = "generation", feature = "std"))]
impl RngSource<rand::rngs::StdRng> {
    /// Creates a deterministic source from a seed. Two sources created from the same seed yield identical sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Returns the default random source, backed by the thread-local generator of `rand`.
#[cfg(all(feature = "generation", feature = "std"))]
#[inline]
#[must_use]
pub fn thread_source() -> RngSource<rand::rngs::ThreadRng> {
    RngSource(rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_index_floors_scaled_value() {
        let mut source = || 0.5_f64;
        assert_eq!(source.next_index(9), 4);
        let mut source = || 0.999_f64;
        assert_eq!(source.next_index(9), 8);
    }

    #[test]
    fn next_index_clamps_out_of_contract_values() {
        let mut source = || 1.0_f64;
        assert_eq!(source.next_index(5), 4);
        let mut source = || -3.0_f64;
        assert_eq!(source.next_index(5), 0);
        let mut source = || f64::NAN;
        assert_eq!(source.next_index(5), 0);
        assert_eq!(source.next_index(0), 0);
    }

    #[cfg(all(feature = "generation", feature = "std"))]
    #[test]
    fn seeded_sources_agree_and_stay_in_range() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..1000 {
            let value = a.next_f64();
            assert_eq!(value.to_bits(), b.next_f64().to_bits());
            assert!((0.0..1.0).contains(&value));
        }
    }
}
