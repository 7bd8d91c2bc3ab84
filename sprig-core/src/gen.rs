//! The generator type and its core operations.

use crate::data::*;
use std::sync::Arc;

type GenFn<T> = dyn Fn(Size, Seed) -> T + Send + Sync;

/// A generator for test data of type `T`.
///
/// Generators are explicit, first-class values that can be composed
/// using combinator functions. A generator is a pure function of the size
/// and seed it is run with: it holds no mutable state, so it can be cloned
/// cheaply and shared between threads.
pub struct Gen<T> {
    generator: Arc<GenFn<T>>,
}

impl<T> Clone for Gen<T> {
    fn clone(&self) -> Self {
        Gen {
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<T> std::fmt::Debug for Gen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Gen { .. }")
    }
}

impl<T> Gen<T> {
    /// Create a new generator from a function.
    ///
    /// The function must only read randomness from the seed it is handed,
    /// splitting it when it needs more than one draw.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Size, Seed) -> T + Send + Sync + 'static,
    {
        Gen {
            generator: Arc::new(f),
        }
    }

    /// Generate a value using the given size and seed.
    ///
    /// The same size and seed always produce the same value.
    pub fn generate(&self, size: Size, seed: Seed) -> T {
        (self.generator)(size, seed)
    }

    /// Create a generator that always produces the same value.
    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        Gen::new(move |_size, _seed| value.clone())
    }

    /// Build a generator from the ambient size.
    pub fn sized<F>(f: F) -> Self
    where
        F: Fn(Size) -> Gen<T> + Send + Sync + 'static,
        T: 'static,
    {
        Gen::new(move |size, seed| f(size).generate(size, seed))
    }

    /// Draw `count` values at sizes spread evenly over `[0, size]`.
    ///
    /// The seed comes from system entropy; use [`Gen::sample_with_seed`] for
    /// reproducible output.
    pub fn sample(&self, size: Size, count: usize) -> Vec<T> {
        self.sample_with_seed(size, count, Seed::random())
    }

    /// Draw `count` values from a fixed seed.
    ///
    /// Every value gets its own substream of `seed`. Sizes start at zero
    /// and reach `size` on the last value.
    pub fn sample_with_seed(&self, size: Size, count: usize, seed: Seed) -> Vec<T> {
        log::debug!("sampling {count} values up to {size} from {seed}");
        seed.splits()
            .zip(sample_sizes(size, count))
            .map(|(seed, size)| self.generate(size, seed))
            .collect()
    }

    /// Draw values as described by `config`.
    pub fn sample_with(&self, config: &Config) -> Vec<T> {
        self.sample_with_seed(
            Size::new(config.size_limit),
            config.sample_count,
            config.resolve_seed(),
        )
    }
}

impl<T> Gen<T>
where
    T: 'static,
{
    /// Map a function over the generated values.
    pub fn map<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        Gen::new(move |size, seed| f(self.generate(size, seed)))
    }

    /// Bind/flatmap for dependent generation.
    ///
    /// The value is drawn from one half of the seed and the generator built
    /// from it runs on the other half.
    pub fn bind<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> Gen<U> + Send + Sync + 'static,
        U: 'static,
    {
        Gen::new(move |size, seed| {
            let (seed1, seed2) = seed.split();
            let value = self.generate(size, seed1);
            f(value).generate(size, seed2)
        })
    }

    /// Dependent generation followed by a projection of both values.
    pub fn bind_map<U, V, F, P>(self, f: F, project: P) -> Gen<V>
    where
        F: Fn(&T) -> Gen<U> + Send + Sync + 'static,
        P: Fn(T, U) -> V + Send + Sync + 'static,
        U: 'static,
        V: 'static,
    {
        Gen::new(move |size, seed| {
            let (seed1, seed2) = seed.split();
            let value = self.generate(size, seed1);
            let dependent = f(&value).generate(size, seed2);
            project(value, dependent)
        })
    }

    /// Run this generator at a fixed size, ignoring the ambient one.
    pub fn resize(self, size: Size) -> Gen<T> {
        Gen::new(move |_size, seed| self.generate(size, seed))
    }

    /// Run this generator at a size derived from the ambient one.
    pub fn scale<F>(self, f: F) -> Gen<T>
    where
        F: Fn(Size) -> Size + Send + Sync + 'static,
    {
        Gen::new(move |size, seed| self.generate(f(size), seed))
    }
}

/// Sizes for `count` samples, spread evenly over `[0, size]`.
fn sample_sizes(size: Size, count: usize) -> impl Iterator<Item = Size> {
    (0..count).map(move |i| {
        if count <= 1 {
            size
        } else {
            Size((size.0 as u128 * i as u128 / (count - 1) as u128) as usize)
        }
    })
}

/// Primitive generators.
impl Gen<bool> {
    /// Generate a random boolean.
    pub fn bool() -> Self {
        Gen::new(|_size, seed| seed.next_bool().0)
    }
}

impl Gen<i32> {
    /// Generate an integer in the inclusive range `[min, max]`.
    pub fn int_range(min: i32, max: i32) -> Self {
        Gen::new(move |_size, seed| seed.next_in_range(min as i64, max as i64).0 as i32)
    }

    /// Generate a positive integer.
    pub fn positive() -> Self {
        Self::int_range(1, i32::MAX)
    }

    /// Generate a natural number (including zero).
    pub fn natural() -> Self {
        Self::int_range(0, i32::MAX)
    }

    /// Generate an integer in `[-size, size]`.
    pub fn sized_int() -> Self {
        Gen::new(|size, seed| {
            let bound = size.0.min(i32::MAX as usize) as i64;
            seed.next_in_range(-bound, bound).0 as i32
        })
    }
}

impl Gen<i64> {
    /// Generate an integer in the inclusive range `[min, max]`.
    pub fn range(min: i64, max: i64) -> Self {
        Gen::new(move |_size, seed| seed.next_in_range(min, max).0)
    }
}

impl Gen<usize> {
    /// Generate an index or count in the inclusive range `[min, max]`.
    pub fn range(min: usize, max: usize) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        Gen::new(move |_size, seed| {
            let span = (hi - lo) as u64;
            let offset = match span.checked_add(1) {
                Some(bound) => seed.next_bounded(bound).0,
                None => seed.next_u64().0,
            };
            lo + offset as usize
        })
    }
}
