use crate::dispatch::Capability;

/// Current speed in km/h. Only this module can change it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Speedometer {
    speed: u32,
}

impl Speedometer {
    fn new() -> Self {
        Speedometer { speed: 0 }
    }

    fn speed(&self) -> u32 {
        self.speed
    }

    fn advance(&mut self, step: u32) -> u32 {
        self.speed = self.speed.saturating_add(step);
        self.speed
    }
}

/// Speed is read through `speed` and changed only by `accelerate`. The
/// variants own their `Speedometer` privately and hand out no mutable access.
///
/// ```compile_fail
/// use capability_dispatch::vehicle::{Motorcycle, Vehicle};
///
/// let mut bike = Motorcycle::new(false);
/// bike.speedometer_mut();
/// ```
pub trait Vehicle {
    fn kind(&self) -> &str;

    /// km/h gained per call to `accelerate`.
    fn acceleration_step(&self) -> u32 {
        5
    }

    fn speed(&self) -> u32;

    fn start(&self) -> String {
        format!("{} is starting.", self.kind())
    }

    fn stop(&self) -> String {
        format!("{} is stopping.", self.kind())
    }

    fn accelerate(&mut self) -> String;
}

// `speed` and `accelerate` for a variant with a `speedometer` field.
macro_rules! speed_controls {
    () => {
        fn speed(&self) -> u32 {
            self.speedometer.speed()
        }

        fn accelerate(&mut self) -> String {
            let step = self.acceleration_step();
            let speed = self.speedometer.advance(step);
            format!("{} is accelerating. Current speed: {} km/h", self.kind(), speed)
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleCommand {
    Start,
    Stop,
    Accelerate,
}

#[derive(Debug, Clone)]
pub struct BasicVehicle {
    speedometer: Speedometer,
}

impl BasicVehicle {
    pub fn new() -> Self {
        BasicVehicle {
            speedometer: Speedometer::new(),
        }
    }
}

impl Default for BasicVehicle {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle for BasicVehicle {
    fn kind(&self) -> &str {
        "Vehicle"
    }

    speed_controls!();
}

#[derive(Debug, Clone)]
pub struct Car {
    doors: u8,
    speedometer: Speedometer,
}

impl Car {
    pub fn new(doors: u8) -> Self {
        Car {
            doors,
            speedometer: Speedometer::new(),
        }
    }

    pub fn doors(&self) -> u8 {
        self.doors
    }

    pub fn open_sunroof(&self) -> String {
        "Opening sunroof.".to_string()
    }
}

impl Vehicle for Car {
    fn kind(&self) -> &str {
        "Car"
    }

    speed_controls!();

    fn acceleration_step(&self) -> u32 {
        10
    }
}

#[derive(Debug, Clone)]
pub struct Motorcycle {
    has_sidecar: bool,
    speedometer: Speedometer,
}

impl Motorcycle {
    pub fn new(has_sidecar: bool) -> Self {
        Motorcycle {
            has_sidecar,
            speedometer: Speedometer::new(),
        }
    }

    pub fn has_sidecar(&self) -> bool {
        self.has_sidecar
    }

    pub fn use_kick_stand(&self) -> String {
        "Kickstand placed!".to_string()
    }
}

impl Vehicle for Motorcycle {
    fn kind(&self) -> &str {
        "Motorcycle"
    }

    speed_controls!();

    fn acceleration_step(&self) -> u32 {
        7
    }
}

#[derive(Debug, Clone)]
pub struct ElectricTrain {
    speedometer: Speedometer,
}

impl ElectricTrain {
    pub fn new() -> Self {
        ElectricTrain {
            speedometer: Speedometer::new(),
        }
    }
}

impl Default for ElectricTrain {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle for ElectricTrain {
    fn kind(&self) -> &str {
        "Electric train"
    }

    speed_controls!();
}

macro_rules! vehicle_capability {
    ($($vehicle:ty),+ $(,)?) => {
        $(
            impl Capability for $vehicle {
                type Input = VehicleCommand;
                type Output = String;

                fn capability_name(&self) -> &str {
                    self.kind()
                }

                fn invoke(&mut self, command: VehicleCommand) -> String {
                    match command {
                        VehicleCommand::Start => self.start(),
                        VehicleCommand::Stop => self.stop(),
                        VehicleCommand::Accelerate => self.accelerate(),
                    }
                }
            }
        )+
    };
}

vehicle_capability!(BasicVehicle, Car, Motorcycle, ElectricTrain, dyn Vehicle);
