//! Abstract classes and virtual methods.
//!
//! Run with: cargo run --bin animal_sounds

use anyhow::Result;
use capability_dispatch::animal::{Animal, AnimalAction, Cat, Dog};
use capability_dispatch::config::DemoConfig;
use capability_dispatch::{logging, Dispatcher};
use colored::Colorize;

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load()?;

    println!("{}", "=== Animals ===".bold());
    let animals: Vec<Box<dyn Animal>> = vec![
        Box::new(Dog::new(config.dog_name)),
        Box::new(Cat::new(config.cat_name)),
    ];

    for animal in animals {
        let mut dispatcher = Dispatcher::bind(animal);
        println!("{}", dispatcher.invoke(AnimalAction::MakeSound));
        println!("{}", dispatcher.invoke(AnimalAction::Eat));
    }

    Ok(())
}
