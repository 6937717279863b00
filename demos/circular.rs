//! Example: robbing houses arranged in a circle.
//!
//! Run with:
//! `cargo run --example circular --features tracing`
//! (set `RUST_LOG=debug` to see the per-pass totals)

use circular_robbery::{solve, solve_with_selection};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let houses = [200, 3, 140, 20, 10];

    match solve(&houses) {
        Ok(total) => println!("Best total: {total}"),
        Err(e) => println!("error: {e}"),
    }

    match solve_with_selection(&houses) {
        Ok(sel) => {
            let picked: Vec<i32> = sel.houses.iter().map(|&i| houses[i]).collect();
            println!("Houses robbed: {:?} (values {picked:?})", sel.houses);
        }
        Err(e) => println!("error: {e}"),
    }

    if let Err(e) = solve(&[]) {
        println!("Empty street: {e}");
    }
}
