//! Validating entry points for callers with optional callables and signed
//! counts.
//!
//! Binding layers often receive callables that may be absent and lengths as
//! signed integers. These functions check every argument before any
//! generator is built, so a bad argument is reported immediately and never
//! surfaces in the middle of a draw.

use crate::{arbitrary::*, choice::*, collection::*, data::*, error::*, gen::*, shrink::*};

fn require<F>(callable: Option<F>, argument: &'static str) -> Result<F> {
    callable.ok_or_else(|| {
        log::debug!("rejected missing callable `{argument}`");
        GenError::invalid_argument(argument, "callable is missing")
    })
}

fn non_negative(value: i64, argument: &'static str) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        log::debug!("rejected `{argument}` = {value}");
        GenError::invalid_argument(argument, format!("must be non-negative, got {value}"))
    })
}

/// [`Gen::map`] with a selector that may be missing.
pub fn map<T, U, F>(gen: Gen<T>, selector: Option<F>) -> Result<Gen<U>>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    Ok(gen.map(require(selector, "selector")?))
}

/// [`Gen::filter`] with a predicate that may be missing.
pub fn filter<T, P>(gen: Gen<T>, predicate: Option<P>) -> Result<Gen<T>>
where
    T: 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Ok(gen.filter(require(predicate, "predicate")?))
}

/// [`Gen::bind`] with a binder that may be missing.
pub fn bind<T, U, F>(gen: Gen<T>, binder: Option<F>) -> Result<Gen<U>>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Gen<U> + Send + Sync + 'static,
{
    Ok(gen.bind(require(binder, "binder")?))
}

/// [`Gen::bind_map`]; both the binder and the projector are required.
pub fn bind_map<T, U, V, F, P>(
    gen: Gen<T>,
    binder: Option<F>,
    projector: Option<P>,
) -> Result<Gen<V>>
where
    T: 'static,
    U: 'static,
    V: 'static,
    F: Fn(&T) -> Gen<U> + Send + Sync + 'static,
    P: Fn(T, U) -> V + Send + Sync + 'static,
{
    let binder = require(binder, "binder")?;
    let projector = require(projector, "projector")?;
    Ok(gen.bind_map(binder, projector))
}

/// [`Gen::zip_with`] with a combiner that may be missing.
pub fn zip_with<T, U, V, F>(first: Gen<T>, second: Gen<U>, combiner: Option<F>) -> Result<Gen<V>>
where
    T: 'static,
    U: 'static,
    V: 'static,
    F: Fn(T, U) -> V + Send + Sync + 'static,
{
    Ok(first.zip_with(second, require(combiner, "combiner")?))
}

/// [`Gen::zip3_with`] with a combiner that may be missing.
pub fn zip3_with<T, U, V, W, F>(
    first: Gen<T>,
    second: Gen<U>,
    third: Gen<V>,
    combiner: Option<F>,
) -> Result<Gen<W>>
where
    T: 'static,
    U: 'static,
    V: 'static,
    W: 'static,
    F: Fn(T, U, V) -> W + Send + Sync + 'static,
{
    Ok(first.zip3_with(second, third, require(combiner, "combiner")?))
}

/// Fixed-length vectors from a signed length.
pub fn vec_of_length<T: 'static>(length: i64, element: Gen<T>) -> Result<Gen<Vec<T>>> {
    Ok(Gen::<Vec<T>>::vec_of_length(
        non_negative(length, "length")?,
        element,
    ))
}

/// Fixed-size grids from signed dimensions.
pub fn grid_of<T: 'static>(rows: i64, cols: i64, element: Gen<T>) -> Result<Gen<Grid<T>>> {
    let rows = non_negative(rows, "rows")?;
    let cols = non_negative(cols, "cols")?;
    Ok(Gen::<Grid<T>>::grid_of(rows, cols, element))
}

/// [`Gen::resize`] from a signed size.
pub fn resize<T: 'static>(size: i64, gen: Gen<T>) -> Result<Gen<T>> {
    Ok(gen.resize(Size::new(non_negative(size, "size")?)))
}

/// Weighted choice with signed weights; every weight must be positive.
pub fn frequency<T: 'static>(choices: Vec<(i64, Gen<T>)>) -> Result<Gen<T>> {
    if choices.is_empty() {
        return Err(GenError::EmptyChoiceSet);
    }
    let choices = choices
        .into_iter()
        .enumerate()
        .map(|(index, (weight, gen))| match u64::try_from(weight) {
            Ok(valid) if valid > 0 => Ok(WeightedChoice::new(valid, gen)),
            _ => Err(GenError::InvalidWeight { index, weight }),
        })
        .collect::<Result<Vec<_>>>()?;
    Gen::frequency(choices)
}

/// [`Arbitrary::from_gen_shrink`] with a shrinker that may be missing.
pub fn from_gen_shrink<T, S>(gen: Gen<T>, shrinker: Option<S>) -> Result<Arbitrary<T>>
where
    T: 'static,
    S: Fn(&T) -> ShrinkIter<T> + Send + Sync + 'static,
{
    Ok(Arbitrary::from_gen_shrink(gen, require(shrinker, "shrinker")?))
}
