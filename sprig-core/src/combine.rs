//! Combining independent draws: tuples, zips and applicative application.

use crate::gen::*;

impl<T> Gen<T>
where
    T: 'static,
{
    /// Pair this generator with `other`, drawing each on its own substream.
    pub fn zip<U>(self, other: Gen<U>) -> Gen<(T, U)>
    where
        U: 'static,
    {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Draw from both generators and combine the results.
    ///
    /// Uses the same substreams as [`Gen::zip`], so
    /// `a.zip_with(b, f)` yields exactly `a.zip(b).map(|(x, y)| f(x, y))`.
    pub fn zip_with<U, V, F>(self, other: Gen<U>, f: F) -> Gen<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(T, U) -> V + Send + Sync + 'static,
    {
        Gen::new(move |size, seed| {
            let (seed1, seed2) = seed.split();
            f(self.generate(size, seed1), other.generate(size, seed2))
        })
    }

    /// Triple this generator with two others.
    pub fn zip3<U, V>(self, second: Gen<U>, third: Gen<V>) -> Gen<(T, U, V)>
    where
        U: 'static,
        V: 'static,
    {
        self.zip3_with(second, third, |a, b, c| (a, b, c))
    }

    /// Draw from three generators and combine the results.
    pub fn zip3_with<U, V, W, F>(self, second: Gen<U>, third: Gen<V>, f: F) -> Gen<W>
    where
        U: 'static,
        V: 'static,
        W: 'static,
        F: Fn(T, U, V) -> W + Send + Sync + 'static,
    {
        Gen::new(move |size, seed| {
            let (seed1, rest) = seed.split();
            let (seed2, seed3) = rest.split();
            f(
                self.generate(size, seed1),
                second.generate(size, seed2),
                third.generate(size, seed3),
            )
        })
    }

    /// Two independent draws from this generator.
    pub fn two(self) -> Gen<(T, T)> {
        self.clone().zip(self)
    }

    /// Three independent draws from this generator.
    pub fn three(self) -> Gen<(T, T, T)> {
        self.clone().zip3(self.clone(), self)
    }

    /// Four independent draws from this generator.
    pub fn four(self) -> Gen<(T, T, T, T)> {
        let pairs = self.two();
        pairs
            .clone()
            .zip_with(pairs, |(a, b), (c, d)| (a, b, c, d))
    }

    /// Apply generated functions to generated arguments.
    ///
    /// The function is drawn from the left substream and the argument from
    /// the right one.
    pub fn apply<A, B>(self, arg: Gen<A>) -> Gen<B>
    where
        T: FnOnce(A) -> B,
        A: 'static,
        B: 'static,
    {
        self.zip_with(arg, |f, a| f(a))
    }
}

impl<A, B> Gen<(A, B)>
where
    A: 'static,
    B: 'static,
{
    /// Generate pairs from two generators.
    pub fn tuple_of(first: Gen<A>, second: Gen<B>) -> Self {
        first.zip(second)
    }
}

impl<A, B, C> Gen<(A, B, C)>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    /// Generate triples from three generators.
    pub fn tuple_of(first: Gen<A>, second: Gen<B>, third: Gen<C>) -> Self {
        first.zip3(second, third)
    }
}
