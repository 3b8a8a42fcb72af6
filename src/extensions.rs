//! Behavior attached to a type without touching its definition.
//!
//! Each extension exists twice: as a free function taking the target first,
//! and as an extension trait so it reads like a method at the call site.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameZone {
    name: String,
    players_online: u32,
}

impl GameZone {
    pub fn new(name: impl Into<String>, players_online: u32) -> Self {
        GameZone {
            name: name.into(),
            players_online,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players_online(&self) -> u32 {
        self.players_online
    }
}

impl Default for GameZone {
    fn default() -> Self {
        GameZone::new("Game Zone", 0)
    }
}

pub fn log_out_message(zone: &GameZone) -> Vec<String> {
    vec![
        "You have successfully logged out.".to_string(),
        format!("Thank you for visiting the {}!", zone.name()),
    ]
}

pub fn sum_of_squares(numbers: &[i32]) -> i128 {
    numbers.iter().copied().sum_of_squares()
}

pub trait GameZoneExt {
    fn log_out_message(&self) -> Vec<String>;
}

impl GameZoneExt for GameZone {
    fn log_out_message(&self) -> Vec<String> {
        log_out_message(self)
    }
}

/// Squares are widened to `i128`, so no `i32` input can overflow.
pub trait SumOfSquaresExt: Iterator<Item = i32> + Sized {
    fn sum_of_squares(self) -> i128 {
        self.map(|n| i128::from(n) * i128::from(n)).sum()
    }
}

impl<I: Iterator<Item = i32>> SumOfSquaresExt for I {}
