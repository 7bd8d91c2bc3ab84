//! Generators paired with shrinkers.

use crate::{data::*, gen::*, shrink::*};
use std::sync::Arc;

/// A generator for `T` together with a shrinker for its values.
///
/// The shrinker is only stored here; a counterexample search outside this
/// crate decides when to call it.
pub struct Arbitrary<T> {
    gen: Gen<T>,
    shrinker: Shrinker<T>,
}

impl<T> Clone for Arbitrary<T> {
    fn clone(&self) -> Self {
        Arbitrary {
            gen: self.gen.clone(),
            shrinker: Arc::clone(&self.shrinker),
        }
    }
}

impl<T> std::fmt::Debug for Arbitrary<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arbitrary").finish_non_exhaustive()
    }
}

impl<T> Arbitrary<T>
where
    T: 'static,
{
    /// An arbitrary without shrinking: the shrinker yields nothing.
    pub fn from_gen(gen: Gen<T>) -> Self {
        Arbitrary {
            gen,
            shrinker: none(),
        }
    }

    /// An arbitrary using `shrinker` verbatim.
    pub fn from_gen_shrink<S>(gen: Gen<T>, shrinker: S) -> Self
    where
        S: Fn(&T) -> ShrinkIter<T> + Send + Sync + 'static,
    {
        Arbitrary {
            gen,
            shrinker: Arc::new(shrinker),
        }
    }

    /// An arbitrary from an already shared shrinker.
    pub fn with_shrinker(gen: Gen<T>, shrinker: Shrinker<T>) -> Self {
        Arbitrary { gen, shrinker }
    }

    /// The generator half.
    pub fn gen(&self) -> &Gen<T> {
        &self.gen
    }

    /// A shared handle to the shrinker.
    pub fn shrinker(&self) -> Shrinker<T> {
        Arc::clone(&self.shrinker)
    }

    /// Shrink candidates for `value`.
    pub fn shrink(&self, value: &T) -> ShrinkIter<T> {
        (self.shrinker)(value)
    }

    /// Generate a value using the given size and seed.
    pub fn generate(&self, size: Size, seed: Seed) -> T {
        self.gen.generate(size, seed)
    }

    /// Take the generator and shrinker apart.
    pub fn into_parts(self) -> (Gen<T>, Shrinker<T>) {
        (self.gen, self.shrinker)
    }
}

impl Arbitrary<i32> {
    /// Integers in `[min, max]`, shrinking toward the in-range value closest
    /// to zero.
    pub fn int_range(min: i32, max: i32) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        Arbitrary::with_shrinker(Gen::int_range(lo, hi), int_towards(0i32.clamp(lo, hi)))
    }
}

impl<T> Arbitrary<Vec<T>>
where
    T: Clone + 'static,
{
    /// Vectors with length in `[0, size]`, shrinking by dropping elements and
    /// by shrinking them with `element`'s shrinker.
    pub fn vec_of(element: Arbitrary<T>) -> Self {
        let (gen, shrinker) = element.into_parts();
        Arbitrary::with_shrinker(Gen::<Vec<T>>::vec_of(gen), vec(shrinker))
    }
}
