//! Basic example of building and sampling generators.

use sprig::*;

#[derive(Debug, Clone)]
struct User {
    name: String,
    age: i32,
    tags: Vec<String>,
}

fn user() -> Gen<User> {
    let name = Gen::elements(vec!["ada", "grace", "linus", "barbara"])
        .expect("name list is not empty")
        .map(str::to_string);
    let age = Gen::int_range(18, 99);
    let tag = Gen::elements(vec!["admin", "dev", "ops"])
        .expect("tag list is not empty")
        .map(str::to_string);

    name.zip3_with(age, Gen::<Vec<String>>::vec_of(tag), |name, age, tags| User {
        name,
        age,
        tags,
    })
}

fn main() {
    println!("Sampling users with growing size");
    for user in user().sample_with(&Config::default().with_size_limit(5).with_seed(7)) {
        println!("  {user:?}");
    }
    println!();

    println!("Fixed-length rows and a 2x3 grid");
    let row = Gen::<Vec<i32>>::vec_of_length(4, Gen::int_range(0, 9));
    let grid = Gen::<Grid<i32>>::grid_of(2, 3, Gen::int_range(0, 9));
    let seed = Seed::from_u64(42);
    println!("  row:  {:?}", row.generate(Size::new(10), seed));
    for cells in grid.generate(Size::new(10), seed).iter_rows() {
        println!("  grid: {cells:?}");
    }
    println!();

    println!("Mostly present, sometimes absent (7 to 1)");
    let maybe = Gen::option_of(Gen::int_range(1, 100));
    println!("  {:?}", maybe.sample(Size::new(10), 16));
    println!();

    println!("Even numbers through a filter");
    let evens = Gen::<i32>::sized_int().filter(|x| x % 2 == 0);
    println!("  {:?}", evens.sample(Size::new(50), 8));
}
