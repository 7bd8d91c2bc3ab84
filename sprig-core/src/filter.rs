//! Filtering generated values by a predicate.

use crate::{data::*, error::*, gen::*};

/// Consecutive discards between warnings from an unbounded filter.
const DISCARD_WARN_INTERVAL: usize = 1000;

impl<T> Gen<T>
where
    T: 'static,
{
    /// Keep drawing until a value satisfies `predicate`.
    ///
    /// Every retry runs on a fresh substream with the size grown by one, so
    /// later attempts explore larger values.
    ///
    /// There is no retry limit. A predicate that is rarely satisfied makes
    /// generation spin for a long time, and one that is never satisfied
    /// makes it loop forever. A warning is logged every 1000 consecutive
    /// discards. Use [`Gen::filter_bounded`] when the predicate cannot be
    /// trusted.
    pub fn filter<P>(self, predicate: P) -> Gen<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Gen::new(move |size, seed| {
            let mut attempts = 0;
            let mut seed = seed;
            loop {
                let (rest, here) = seed.split();
                let value = self.generate(size.grow(attempts), here);
                if predicate(&value) {
                    return value;
                }
                attempts += 1;
                record_discard(attempts, size);
                seed = rest;
            }
        })
    }

    /// Like [`Gen::filter`], but gives up after `max_attempts` draws.
    ///
    /// Generated values are `Err(GenError::ExhaustedRetries)` when no draw
    /// was accepted. A limit of zero always gives up.
    pub fn filter_bounded<P>(self, max_attempts: usize, predicate: P) -> Gen<Result<T>>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Gen::new(move |size, seed| {
            for (attempt, seed) in seed.splits().take(max_attempts).enumerate() {
                let value = self.generate(size.grow(attempt), seed);
                if predicate(&value) {
                    return Ok(value);
                }
                log::trace!("filter discarded attempt {} at {size}", attempt + 1);
            }
            log::debug!("filter gave up after {max_attempts} attempts at {size}");
            Err(GenError::ExhaustedRetries {
                attempts: max_attempts,
            })
        })
    }
}

fn record_discard(attempts: usize, size: Size) {
    if attempts % DISCARD_WARN_INTERVAL == 0 {
        log::warn!(
            "filter has discarded {attempts} consecutive values starting at {size}; \
             the predicate may be unsatisfiable"
        );
    } else {
        log::trace!("filter discarded attempt {attempts} at {size}");
    }
}
