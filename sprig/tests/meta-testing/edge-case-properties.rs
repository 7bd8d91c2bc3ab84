//! Edge case properties
//!
//! These properties cover size zero, invalid choice sets, argument
//! validation and the bounded filter.

use crate::inputs;
use sprig::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Property: size zero yields empty bounded collections and zero-sized ints
pub fn test_size_zero() {
    for (_, seed) in inputs(50) {
        let zero = Size::new(0);
        assert!(Gen::<Vec<i32>>::vec_of(Gen::natural()).generate(zero, seed).is_empty());
        assert_eq!(Gen::<Vec<i32>>::non_empty_vec_of(Gen::natural()).generate(zero, seed).len(), 1);
        assert_eq!(Gen::<i32>::sized_int().generate(zero, seed), 0);
        let grid = Gen::<Grid<i32>>::grid_sized(Gen::natural()).generate(zero, seed);
        assert_eq!((grid.rows(), grid.cols()), (0, 0));
    }
    println!("✓ Size zero property passed");
}

/// Property: choice combinators reject empty sets and zero weights
pub fn test_choice_errors() {
    assert_eq!(Gen::<u8>::one_of(Vec::new()).unwrap_err(), GenError::EmptyChoiceSet);
    assert_eq!(Gen::<u8>::frequency(Vec::new()).unwrap_err(), GenError::EmptyChoiceSet);
    assert!(matches!(
        Gen::frequency(vec![WeightedChoice::new(0, Gen::constant(1u8))]),
        Err(GenError::InvalidWeight { index: 0, .. })
    ));
    assert!(matches!(
        checked::frequency(vec![(1, Gen::constant(1u8)), (-4, Gen::constant(2u8))]),
        Err(GenError::InvalidWeight { index: 1, weight: -4 })
    ));
    println!("✓ Choice error property passed");
}

/// Property: invalid arguments are rejected before anything is drawn
pub fn test_validation_fail_fast() {
    let draws = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&draws);
    let counted = Gen::new(move |_size, _seed| {
        counter.fetch_add(1, Ordering::SeqCst);
        3
    });

    assert!(matches!(
        checked::map(counted.clone(), None::<fn(i32) -> i32>),
        Err(GenError::InvalidArgument { argument: "selector", .. })
    ));
    assert!(matches!(
        checked::filter(counted.clone(), None::<fn(&i32) -> bool>),
        Err(GenError::InvalidArgument { argument: "predicate", .. })
    ));
    assert!(matches!(
        checked::vec_of_length(-3, counted.clone()),
        Err(GenError::InvalidArgument { argument: "length", .. })
    ));
    assert!(matches!(
        checked::grid_of(-1, 2, counted),
        Err(GenError::InvalidArgument { argument: "rows", .. })
    ));
    assert_eq!(draws.load(Ordering::SeqCst), 0);
    println!("✓ Validation fail-fast property passed");
}

/// Property: the bounded filter reports exhaustion instead of spinning
pub fn test_bounded_filter_exhaustion() {
    let impossible = Gen::int_range(0, 10).filter_bounded(50, |&x| x > 10);
    let easy = Gen::int_range(0, 10).filter_bounded(500, |&x| x % 2 == 0);
    for (size, seed) in inputs(50) {
        assert_eq!(
            impossible.generate(size, seed),
            Err(GenError::ExhaustedRetries { attempts: 50 })
        );
        assert!(matches!(easy.generate(size, seed), Ok(x) if x % 2 == 0));
    }
    println!("✓ Bounded filter property passed");
}
