//! Uniform and weighted choice between generators.

use crate::{error::*, gen::*};
use std::sync::Arc;

/// Weight of the present value in [`Gen::option_of`].
const SOME_WEIGHT: u64 = 7;
/// Weight of `None` in [`Gen::option_of`].
const NONE_WEIGHT: u64 = 1;

/// A generator paired with its relative weight.
#[derive(Debug)]
pub struct WeightedChoice<T> {
    pub weight: u64,
    pub gen: Gen<T>,
}

impl<T> Clone for WeightedChoice<T> {
    fn clone(&self) -> Self {
        WeightedChoice {
            weight: self.weight,
            gen: self.gen.clone(),
        }
    }
}

impl<T> WeightedChoice<T> {
    /// Create a weighted choice.
    pub fn new(weight: u64, gen: Gen<T>) -> Self {
        WeightedChoice { weight, gen }
    }
}

impl<T> Gen<T>
where
    T: 'static,
{
    /// Pick one of `gens` uniformly, then draw from it.
    pub fn one_of(gens: Vec<Gen<T>>) -> Result<Self> {
        if gens.is_empty() {
            return Err(GenError::EmptyChoiceSet);
        }
        let gens: Arc<[Gen<T>]> = gens.into();
        Ok(Gen::new(move |size, seed| {
            let (choice_seed, draw_seed) = seed.split();
            let (index, _) = choice_seed.next_bounded(gens.len() as u64);
            gens[index as usize].generate(size, draw_seed)
        }))
    }

    /// Pick a generator with probability proportional to its weight, then
    /// draw from it.
    ///
    /// Fails when `choices` is empty or any weight is zero.
    pub fn frequency(choices: Vec<WeightedChoice<T>>) -> Result<Self> {
        if choices.is_empty() {
            return Err(GenError::EmptyChoiceSet);
        }
        if let Some(index) = choices.iter().position(|choice| choice.weight == 0) {
            return Err(GenError::InvalidWeight { index, weight: 0 });
        }
        Ok(weighted(choices))
    }

    /// Pick one of `values` uniformly.
    pub fn elements(values: Vec<T>) -> Result<Self>
    where
        T: Clone + Send + Sync,
    {
        if values.is_empty() {
            return Err(GenError::EmptyChoiceSet);
        }
        let values: Arc<[T]> = values.into();
        Ok(Gen::new(move |_size, seed| {
            let (index, _) = seed.next_bounded(values.len() as u64);
            values[index as usize].clone()
        }))
    }

    /// Draw from either this generator or `other`, with equal probability.
    pub fn or(self, other: Gen<T>) -> Gen<T> {
        weighted(vec![WeightedChoice::new(1, self), WeightedChoice::new(1, other)])
    }
}

impl<T> Gen<Option<T>>
where
    T: 'static,
{
    /// Mostly `Some` values from `gen`, occasionally `None` (7 to 1).
    pub fn option_of(gen: Gen<T>) -> Self {
        weighted(optional_choices(gen, SOME_WEIGHT, NONE_WEIGHT))
    }

    /// `Some` values from `gen` and `None` with the given relative weights.
    pub fn option_of_weighted(gen: Gen<T>, some_weight: u64, none_weight: u64) -> Result<Self> {
        Gen::frequency(optional_choices(gen, some_weight, none_weight))
    }
}

fn optional_choices<T: 'static>(
    gen: Gen<T>,
    some_weight: u64,
    none_weight: u64,
) -> Vec<WeightedChoice<Option<T>>> {
    vec![
        WeightedChoice::new(some_weight, gen.map(Some)),
        WeightedChoice::new(none_weight, Gen::new(|_size, _seed| None)),
    ]
}

/// Weighted selection over pre-validated choices.
fn weighted<T: 'static>(choices: Vec<WeightedChoice<T>>) -> Gen<T> {
    let weights: Vec<u64> = choices.iter().map(|choice| choice.weight).collect();
    let total: u128 = weights.iter().map(|&weight| weight as u128).sum();
    let gens: Vec<Gen<T>> = choices.into_iter().map(|choice| choice.gen).collect();
    Gen::new(move |size, seed| {
        let (choice_seed, draw_seed) = seed.split();
        let (target, _) = choice_seed.next_bounded_wide(total);
        gens[pick_index(&weights, target)].generate(size, draw_seed)
    })
}

/// Index of the choice whose cumulative weight range contains `target`.
fn pick_index(weights: &[u64], mut target: u128) -> usize {
    for (index, &weight) in weights.iter().enumerate() {
        if target < weight as u128 {
            return index;
        }
        target -= weight as u128;
    }
    weights.len() - 1
}
