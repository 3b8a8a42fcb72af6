//! Extension methods as extension traits and free functions.
//!
//! Run with: cargo run --bin extension_methods

use capability_dispatch::extensions::{self, GameZone, GameZoneExt, SumOfSquaresExt};
use capability_dispatch::logging;
use colored::Colorize;

fn main() {
    logging::init();

    println!("{}", "=== Game Zone ===".bold());
    let zone = GameZone::default();
    for line in zone.log_out_message() {
        println!("{}", line);
    }

    println!("\n{}", "=== Sum of Squares ===".bold());
    let numbers = [1, 2, 3, 4, 5];
    println!("Method form:   {}", numbers.iter().copied().sum_of_squares());
    println!("Function form: {}", extensions::sum_of_squares(&numbers));
}
