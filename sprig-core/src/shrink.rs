//! Shrinkers: lazy sequences of smaller candidates for a value.
//!
//! A shrinker is a pure function from a value to an iterator of simpler
//! values. Calling it again on the same value restarts the sequence. This
//! module only produces candidates; searching them for a minimal failing
//! example is left to the caller.

use std::iter;
use std::sync::Arc;

/// Lazy sequence of shrink candidates.
pub type ShrinkIter<T> = Box<dyn Iterator<Item = T>>;

/// A shareable shrinking function.
pub type Shrinker<T> = Arc<dyn Fn(&T) -> ShrinkIter<T> + Send + Sync>;

/// A shrinker that never proposes anything.
pub fn none<T: 'static>() -> Shrinker<T> {
    Arc::new(|_value: &T| -> ShrinkIter<T> { Box::new(iter::empty()) })
}

/// Shrink integers toward `target`.
///
/// Proposes `target` first, then values that close half, a quarter, ...
/// of the remaining distance, ending one step away from the original.
/// Every candidate lies between `target` and the original value. When the
/// distance does not fit in an `i128`, only `target` is proposed.
pub fn int_towards<T>(target: T) -> Shrinker<T>
where
    T: Copy + Into<i128> + TryFrom<i128> + 'static,
{
    let target: i128 = target.into();
    Arc::new(move |value: &T| -> ShrinkIter<T> {
        let value: i128 = (*value).into();
        // the distance overflows only between i128 extremes
        let Some(first) = value.checked_sub(target) else {
            return Box::new(T::try_from(target).ok().into_iter());
        };
        let distances = iter::successors(Some(first), |&distance| {
            let next = distance / 2;
            (next != 0).then_some(next)
        });
        Box::new(
            distances
                .take_while(|&distance| distance != 0)
                .filter_map(move |distance| T::try_from(value - distance).ok()),
        )
    })
}

/// Shrink vectors by removing chunks, then by shrinking single elements.
///
/// Removal tries the whole vector first, then halves, quarters and so on
/// down to single elements.
pub fn vec<T>(element: Shrinker<T>) -> Shrinker<Vec<T>>
where
    T: Clone + 'static,
{
    Arc::new(move |values: &Vec<T>| -> ShrinkIter<Vec<T>> {
        let len = values.len();
        let chunk_sizes = iter::successors((len > 0).then_some(len), |&chunk| {
            (chunk > 1).then_some(chunk / 2)
        });

        let source = values.clone();
        let removals = chunk_sizes.flat_map(move |chunk| {
            let source = source.clone();
            (0..=len - chunk).step_by(chunk).map(move |start| {
                let mut smaller = source[..start].to_vec();
                smaller.extend_from_slice(&source[start + chunk..]);
                smaller
            })
        });

        let source = values.clone();
        let element = Arc::clone(&element);
        let replacements = (0..len).flat_map(move |index| {
            let candidates = element(&source[index]);
            let source = source.clone();
            candidates.map(move |candidate| {
                let mut smaller = source.clone();
                smaller[index] = candidate;
                smaller
            })
        });

        Box::new(removals.chain(replacements))
    })
}
