//! Parallel generation properties
//!
//! Generators are immutable, so the same generator evaluated from several
//! threads must agree with sequential evaluation.

use crate::inputs;
use sprig::*;
use std::sync::Arc;
use std::thread;

/// Property: results computed on worker threads match sequential results
pub fn test_threads_agree_with_sequential() {
    let gen = Gen::<Vec<i32>>::vec_of(Gen::int_range(-100, 100)).zip(Gen::option_of(Gen::bool()));
    let inputs = Arc::new(inputs(200));
    let expected: Vec<_> = inputs.iter().map(|&(size, seed)| gen.generate(size, seed)).collect();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let gen = gen.clone();
            let inputs = Arc::clone(&inputs);
            thread::spawn(move || {
                inputs
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| i % 4 == worker)
                    .map(|(i, &(size, seed))| (i, gen.generate(size, seed)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (i, value) in handle.join().expect("worker thread panicked") {
            assert_eq!(value, expected[i]);
        }
    }
    println!("✓ Thread agreement property passed");
}

/// Property: arbitraries can be shared between threads
pub fn test_shared_arbitrary_across_threads() {
    let arbitrary = Arbitrary::vec_of(Arbitrary::int_range(-10, 10));
    let value = arbitrary.generate(Size::new(15), Seed::from_u64(4));
    let expected: Vec<Vec<i32>> = arbitrary.shrink(&value).collect();

    let handle = {
        let arbitrary = arbitrary.clone();
        let value = value.clone();
        thread::spawn(move || arbitrary.shrink(&value).collect::<Vec<_>>())
    };
    assert_eq!(handle.join().expect("worker thread panicked"), expected);
    println!("✓ Shared arbitrary property passed");
}
