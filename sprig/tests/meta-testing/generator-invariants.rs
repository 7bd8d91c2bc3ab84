//! Generator invariant properties
//!
//! These properties check determinism and the length/dimension laws of the
//! collection builders across many sizes and seeds.

use crate::inputs;
use sprig::*;
use std::collections::HashSet;

/// Property: the same size and seed always produce the same value
pub fn test_generate_determinism() {
    let gen = Gen::<Vec<i32>>::vec_of(Gen::int_range(-100, 100))
        .zip(Gen::option_of(Gen::bool()))
        .bind(|(xs, flag)| Gen::<usize>::range(0, xs.len()).map(move |i| (xs.clone(), flag, i)));

    for (size, seed) in inputs(100) {
        assert_eq!(gen.generate(size, seed), gen.generate(size, seed));
    }
    println!("✓ Determinism property passed");
}

/// Property: fixed-length builders always produce exactly `n` elements
pub fn test_exact_length_law() {
    let fives = Gen::<Vec<i32>>::vec_of_length(3, Gen::constant(5));
    assert_eq!(fives.generate(Size::new(0), Seed::from_u64(1)), vec![5, 5, 5]);

    for (size, seed) in inputs(100) {
        let n = size.get();
        let gen = Gen::<Vec<i32>>::vec_of_length(n, Gen::int_range(0, 3));
        // the ambient size must not matter
        assert_eq!(gen.generate(Size::new(n * 7 + 1), seed).len(), n);
    }
    println!("✓ Exact length law passed");
}

/// Property: bounded lists have length in `[0, size]`
pub fn test_bounded_length_law() {
    let gen = Gen::<Vec<bool>>::vec_of(Gen::bool());
    for (size, seed) in inputs(200) {
        assert!(gen.generate(size, seed).len() <= size.get());
    }
    println!("✓ Bounded length law passed");
}

/// Property: non-empty lists have length in `[1, size + 1]`
pub fn test_non_empty_length_law() {
    let gen = Gen::<Vec<bool>>::non_empty_vec_of(Gen::bool());
    for (size, seed) in inputs(200) {
        let len = gen.generate(size, seed).len();
        assert!(len >= 1 && len <= size.get() + 1);
    }
    println!("✓ Non-empty length law passed");
}

/// Property: grids have the requested or size-bounded dimensions
pub fn test_grid_dimension_laws() {
    for (size, seed) in inputs(100) {
        let rows = size.get() % 5;
        let cols = size.get() / 5;
        let grid = Gen::<Grid<u8>>::grid_of(rows, cols, Gen::constant(0)).generate(size, seed);
        assert_eq!((grid.rows(), grid.cols()), (rows, cols));
        assert_eq!(grid.cells().len(), rows * cols);

        let sized = Gen::<Grid<u8>>::grid_sized(Gen::constant(0)).generate(size, seed);
        assert!(sized.rows() * sized.rows() <= size.get());
        assert!(sized.cols() * sized.cols() <= size.get());
    }
    println!("✓ Grid dimension laws passed");
}

/// Property: sampled values never share a seed
pub fn test_sample_independence() {
    let gen = Gen::<i64>::range(i64::MIN, i64::MAX);
    let values = gen.sample_with_seed(Size::new(30), 500, Seed::from_u64(17));
    let distinct: HashSet<i64> = values.iter().copied().collect();
    assert_eq!(distinct.len(), values.len());
    println!("✓ Sample independence property passed");
}
