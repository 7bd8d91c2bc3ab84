//! Shrinking properties
//!
//! These properties check how arbitraries store and expose shrinkers, and
//! that the standard shrinkers propose simpler values.

use crate::inputs;
use sprig::*;

/// Property: an arbitrary built from a generator alone never shrinks
pub fn test_from_gen_has_no_shrinks() {
    let arbitrary = Arbitrary::from_gen(Gen::<Vec<i32>>::vec_of(Gen::int_range(-50, 50)));
    for (size, seed) in inputs(100) {
        let value = arbitrary.generate(size, seed);
        assert_eq!(arbitrary.shrink(&value).count(), 0);
    }
    println!("✓ No-shrink invariant passed");
}

/// Property: an explicit shrinker is returned verbatim
pub fn test_from_gen_shrink_is_verbatim() {
    let shrinker = shrink::int_towards(0i32);
    let arbitrary = Arbitrary::with_shrinker(Gen::<i32>::sized_int(), shrinker.clone());
    let closure = Arbitrary::from_gen_shrink(Gen::<i32>::sized_int(), {
        let shrinker = shrinker.clone();
        move |value: &i32| shrinker(value)
    });

    for (size, seed) in inputs(100) {
        let value = arbitrary.generate(size, seed);
        let expected: Vec<i32> = shrinker(&value).collect();
        assert_eq!(arbitrary.shrink(&value).collect::<Vec<_>>(), expected);
        assert_eq!(closure.shrink(&value).collect::<Vec<_>>(), expected);
        // shrinking again restarts the sequence
        assert_eq!(arbitrary.shrink(&value).collect::<Vec<_>>(), expected);
    }
    println!("✓ Verbatim shrinker property passed");
}

/// Property: vector candidates are shorter or have a smaller element
pub fn test_candidates_are_simpler() {
    let arbitrary = Arbitrary::vec_of(Arbitrary::int_range(-1000, 1000));
    let weight = |xs: &Vec<i32>| -> u64 {
        xs.len() as u64 * 10_000 + xs.iter().map(|x| x.unsigned_abs() as u64).sum::<u64>()
    };
    for (size, seed) in inputs(50) {
        let value = arbitrary.generate(size, seed);
        for candidate in arbitrary.shrink(&value) {
            assert!(weight(&candidate) < weight(&value));
        }
    }
    println!("✓ Simpler candidates property passed");
}

/// Greedy minimisation, standing in for the search a test runner performs.
fn minimise<T: Clone + 'static>(
    arbitrary: &Arbitrary<T>,
    mut value: T,
    fails: impl Fn(&T) -> bool,
) -> T {
    'search: loop {
        for candidate in arbitrary.shrink(&value) {
            if fails(&candidate) {
                value = candidate;
                continue 'search;
            }
        }
        return value;
    }
}

/// Property: stored shrinkers are enough to minimise a counterexample
pub fn test_external_minimisation() {
    let arbitrary = Arbitrary::vec_of(Arbitrary::int_range(0, 1000));
    let fails = |xs: &Vec<i32>| xs.iter().any(|&x| x >= 100);

    let failing = inputs(200)
        .into_iter()
        .map(|(_, seed)| arbitrary.generate(Size::new(20), seed))
        .find(|xs| fails(xs))
        .expect("some generated vector should contain a large element");

    assert_eq!(minimise(&arbitrary, failing, fails), vec![100]);
    println!("✓ External minimisation property passed");
}
