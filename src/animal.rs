//! Abstract operations and overridable defaults.
//!
//! `make_sound` has no default, so every animal must provide one. `eat` has
//! a default that `Cat` replaces.

use crate::dispatch::Capability;

pub trait Animal {
    fn name(&self) -> &str;

    fn make_sound(&self) -> String;

    fn eat(&self) -> String {
        format!("{} is eating", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalAction {
    MakeSound,
    Eat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Dog { name: name.into() }
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> String {
        format!("{} barks", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Cat { name: name.into() }
    }
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> String {
        format!("{} meows", self.name)
    }

    fn eat(&self) -> String {
        format!("{} is eating fish", self.name)
    }
}

macro_rules! animal_capability {
    ($($animal:ty),+ $(,)?) => {
        $(
            impl Capability for $animal {
                type Input = AnimalAction;
                type Output = String;

                fn capability_name(&self) -> &str {
                    self.name()
                }

                fn invoke(&mut self, action: AnimalAction) -> String {
                    match action {
                        AnimalAction::MakeSound => self.make_sound(),
                        AnimalAction::Eat => self.eat(),
                    }
                }
            }
        )+
    };
}

animal_capability!(Dog, Cat, dyn Animal);
