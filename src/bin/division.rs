//! Unhandled arithmetic failure.
//!
//! The configured divisor defaults to 0, so the last division fails and the
//! error leaves `main`, ending the program with a non-zero status.
//!
//! Run with: cargo run --bin division

use anyhow::{Context, Result};
use capability_dispatch::arithmetic::{EuclideanDivision, Operands, TruncatingDivision};
use capability_dispatch::config::DemoConfig;
use capability_dispatch::{logging, Dispatcher};
use colored::Colorize;

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load()?;

    println!("{}", "=== Division ===".bold());
    let mut truncating = Dispatcher::bind(TruncatingDivision);
    let mut euclidean = Dispatcher::bind(EuclideanDivision);

    for (dividend, divisor) in [(7, 2), (-7, 2)] {
        let operands = Operands::new(dividend, divisor);
        println!(
            "{} / {}: truncating = {}, euclidean = {}",
            dividend,
            divisor,
            truncating.invoke(operands)?,
            euclidean.invoke(operands)?
        );
    }

    let operands = Operands::new(config.dividend, config.divisor);
    let quotient = truncating
        .invoke(operands)
        .with_context(|| format!("dividing {} by {}", config.dividend, config.divisor))?;
    println!("{} / {} = {}", config.dividend, config.divisor, quotient);

    Ok(())
}
