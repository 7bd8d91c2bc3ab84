//! Core data types: the size parameter, the splittable seed and sampling config.

use std::fmt;

/// Size parameter for controlling the magnitude of generated data.
///
/// Collection lengths and size-derived numeric bounds never exceed the
/// size a generator is run with. Size is unsigned, so it can never be
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Size(pub usize);

impl Size {
    /// Create a new size value.
    pub fn new(value: usize) -> Self {
        Size(value)
    }

    /// Get the inner size value.
    pub fn get(self) -> usize {
        self.0
    }

    /// Scale size by a factor.
    pub fn scale(self, factor: f64) -> Self {
        Size((self.0 as f64 * factor) as usize)
    }

    /// Clamp size to a maximum value.
    pub fn clamp(self, max: usize) -> Self {
        Size(self.0.min(max))
    }

    /// Size grown by `step`, saturating at `usize::MAX`.
    pub fn grow(self, step: usize) -> Self {
        Size(self.0.saturating_add(step))
    }
}

impl From<usize> for Size {
    fn from(value: usize) -> Self {
        Size(value)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size({})", self.0)
    }
}

/// Splittable random seed.
///
/// A seed is an immutable value: every operation returns the new seed
/// instead of advancing shared state. Splitting yields two substreams that
/// are independent of each other, which is what keeps composed generators
/// from correlating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(pub u64, pub u64);

impl Seed {
    /// Create a new seed from a single value.
    pub fn from_u64(value: u64) -> Self {
        let state = splitmix64_mix(value);
        let gamma = mix_gamma(state);
        Seed(state, gamma)
    }

    /// Split a seed into two independent seeds.
    /// Uses SplitMix64 splitting strategy for independence.
    pub fn split(self) -> (Self, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        let new_gamma = mix_gamma(output);

        (Seed(new_state, gamma), Seed(output, new_gamma))
    }

    /// An endless supply of independent substreams.
    ///
    /// Each item is the right half of a split; the left half is kept for the
    /// next item, so no two items share state.
    pub fn splits(self) -> Splits {
        Splits { seed: self }
    }

    /// Generate the next random value and advance the seed.
    pub fn next_u64(self) -> (u64, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        (output, Seed(new_state, gamma))
    }

    /// Generate a bounded random value in `[0, bound)`.
    ///
    /// A bound of zero yields zero.
    pub fn next_bounded(self, bound: u64) -> (u64, Self) {
        let (value, new_seed) = self.next_u64();
        (((value as u128 * bound as u128) >> 64) as u64, new_seed)
    }

    /// Generate a bounded random value in `[0, bound)` for bounds past `u64`.
    ///
    /// Bounds that fit in a `u64` take the same path as [`Seed::next_bounded`].
    /// Wider bounds draw two words at a time and reject the biased tail.
    pub fn next_bounded_wide(self, bound: u128) -> (u128, Self) {
        if let Ok(narrow) = u64::try_from(bound) {
            let (value, new_seed) = self.next_bounded(narrow);
            return (value as u128, new_seed);
        }
        let zone = u128::MAX - u128::MAX % bound;
        let mut seed = self;
        loop {
            let (high, next) = seed.next_u64();
            let (low, next) = next.next_u64();
            seed = next;
            let value = (high as u128) << 64 | low as u128;
            if value < zone {
                return (value % bound, seed);
            }
        }
    }

    /// Generate a value in the inclusive range `[lo, hi]`.
    ///
    /// The bounds may be given in either order.
    pub fn next_in_range(self, lo: i64, hi: i64) -> (i64, Self) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let span = (hi as i128 - lo as i128 + 1) as u128;
        let (offset, new_seed) = if span > u64::MAX as u128 {
            self.next_u64()
        } else {
            self.next_bounded(span as u64)
        };
        ((lo as i128 + offset as i128) as i64, new_seed)
    }

    /// Generate a random bool.
    pub fn next_bool(self) -> (bool, Self) {
        let (value, new_seed) = self.next_u64();
        (value & 1 == 1, new_seed)
    }

    /// Generate a random seed from system entropy.
    pub fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        Seed::from_u64(rng.gen())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({}, {})", self.0, self.1)
    }
}

/// Iterator returned by [`Seed::splits`].
#[derive(Debug, Clone)]
pub struct Splits {
    seed: Seed,
}

impl Iterator for Splits {
    type Item = Seed;

    fn next(&mut self) -> Option<Seed> {
        let (rest, here) = self.seed.split();
        self.seed = rest;
        Some(here)
    }
}

/// Configuration for sampling generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest size handed to the generator.
    pub size_limit: usize,

    /// Number of values to draw.
    pub sample_count: usize,

    /// Fixed seed for reproducible samples; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size_limit: 100,
            sample_count: 10,
            seed: None,
        }
    }
}

impl Config {
    /// Set the largest size to sample at.
    pub fn with_size_limit(mut self, size: usize) -> Self {
        self.size_limit = size;
        self
    }

    /// Set the number of samples.
    pub fn with_samples(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Fix the seed so samples are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The seed samples are drawn from.
    pub fn resolve_seed(&self) -> Seed {
        match self.seed {
            Some(value) => Seed::from_u64(value),
            None => Seed::random(),
        }
    }
}

/// SplitMix64 mixing function for high-quality output.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Generate a good gamma value for SplitMix64 splitting.
fn mix_gamma(mut z: u64) -> u64 {
    z = splitmix64_mix(z);
    // gamma must be odd for a full period
    (z | 1).wrapping_mul(0x9e3779b97f4a7c15)
}
