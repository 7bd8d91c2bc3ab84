//! Example showing how stored shrinkers minimise a failing input.

use sprig::*;

/// Repeatedly move to the first shrink candidate that still fails.
fn minimise<T: Clone + std::fmt::Debug + 'static>(
    arbitrary: &Arbitrary<T>,
    mut value: T,
    fails: impl Fn(&T) -> bool,
) -> T {
    let mut steps = 0;
    'search: loop {
        for candidate in arbitrary.shrink(&value) {
            if fails(&candidate) {
                steps += 1;
                println!("  step {steps}: {candidate:?}");
                value = candidate;
                continue 'search;
            }
        }
        return value;
    }
}

fn main() {
    // "no list sums to more than 100"
    let fails = |xs: &Vec<i32>| xs.iter().sum::<i32>() > 100;
    let arbitrary = Arbitrary::vec_of(Arbitrary::int_range(-50, 200));

    let failing = Seed::random()
        .splits()
        .map(|seed| arbitrary.generate(Size::new(20), seed))
        .find(|xs| fails(xs))
        .expect("seed splits are endless");

    println!("Original counterexample: {failing:?}");
    let minimal = minimise(&arbitrary, failing, fails);
    println!("Minimal counterexample: {minimal:?}");

    println!();
    println!("Without a shrinker nothing is proposed:");
    let plain = Arbitrary::from_gen(Gen::<Vec<i32>>::vec_of(Gen::int_range(-50, 200)));
    println!("  candidates for [150]: {}", plain.shrink(&vec![150]).count());
}
