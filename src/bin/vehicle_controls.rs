//! Inheritance: shared controls, per-variant acceleration.
//!
//! Run with: cargo run --bin vehicle_controls

use anyhow::Result;
use capability_dispatch::config::DemoConfig;
use capability_dispatch::vehicle::{
    BasicVehicle, Car, ElectricTrain, Motorcycle, Vehicle, VehicleCommand,
};
use capability_dispatch::{logging, Dispatcher};
use colored::Colorize;

fn drive(vehicle: Box<dyn Vehicle>, accelerations: u32) {
    let mut dispatcher = Dispatcher::bind(vehicle);
    println!("{}", dispatcher.invoke(VehicleCommand::Start));
    for _ in 0..accelerations {
        println!("{}", dispatcher.invoke(VehicleCommand::Accelerate));
    }
    println!("{}", dispatcher.invoke(VehicleCommand::Stop));
}

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load()?;

    println!("{}", "=== Fleet ===".bold());
    let fleet: Vec<Box<dyn Vehicle>> = vec![
        Box::new(BasicVehicle::new()),
        Box::new(Car::new(config.car_doors)),
        Box::new(Motorcycle::new(config.motorcycle_has_sidecar)),
        Box::new(ElectricTrain::new()),
    ];
    for vehicle in fleet {
        drive(vehicle, config.accelerations);
        println!();
    }

    // Operations only the concrete variant has
    println!("{}", "=== Variant Extras ===".bold());
    let car = Car::new(config.car_doors);
    println!("Car with {} doors: {}", car.doors(), car.open_sunroof());
    let motorcycle = Motorcycle::new(config.motorcycle_has_sidecar);
    println!(
        "Motorcycle (sidecar: {}): {}",
        motorcycle.has_sidecar(),
        motorcycle.use_kick_stand()
    );

    Ok(())
}
