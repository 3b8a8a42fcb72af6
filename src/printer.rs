//! Printer → LaserJet → InkJet.
//!
//! `LaserJet` overrides `print` and that override is final: the models built
//! on it implement the sealed `LaserJetModel` trait, which can rename the
//! printer and change its warm-up but has no hook into `print`.

use crate::dispatch::Capability;

pub trait Printer {
    fn model(&self) -> &str;

    fn warm_up(&self) -> String {
        format!("{} is warming up.", self.model())
    }

    fn print(&self, document: &str) -> String {
        format!("{} is printing \"{}\".", self.model(), document)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrinterCommand {
    WarmUp,
    Print(String),
}

fn execute<P: Printer + ?Sized>(printer: &P, command: PrinterCommand) -> String {
    match command {
        PrinterCommand::WarmUp => printer.warm_up(),
        PrinterCommand::Print(document) => printer.print(&document),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicPrinter {
    model: String,
}

impl BasicPrinter {
    pub fn new(model: impl Into<String>) -> Self {
        BasicPrinter { model: model.into() }
    }
}

impl Printer for BasicPrinter {
    fn model(&self) -> &str {
        &self.model
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::StandardLaserJet {}
    impl Sealed for super::InkJet {}
}

/// A model built on the LaserJet engine.
pub trait LaserJetModel: sealed::Sealed {
    fn model_name(&self) -> &str;

    fn warm_up_routine(&self) -> &str {
        "heating the fuser"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardLaserJet;

impl LaserJetModel for StandardLaserJet {
    fn model_name(&self) -> &str {
        "LaserJet"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InkJet;

impl LaserJetModel for InkJet {
    fn model_name(&self) -> &str {
        "InkJet"
    }

    fn warm_up_routine(&self) -> &str {
        "priming the ink cartridges"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaserJet<M = StandardLaserJet> {
    model: M,
}

pub type InkJetPrinter = LaserJet<InkJet>;

impl<M: LaserJetModel> LaserJet<M> {
    pub fn with_model(model: M) -> Self {
        LaserJet { model }
    }
}

impl LaserJet {
    pub fn new() -> Self {
        LaserJet::with_model(StandardLaserJet)
    }
}

impl<M: LaserJetModel> Printer for LaserJet<M> {
    fn model(&self) -> &str {
        self.model.model_name()
    }

    fn warm_up(&self) -> String {
        format!("{} is {}.", self.model(), self.model.warm_up_routine())
    }

    fn print(&self, document: &str) -> String {
        format!("{} is laser printing \"{}\" at 1200 dpi.", self.model(), document)
    }
}

impl Capability for BasicPrinter {
    type Input = PrinterCommand;
    type Output = String;

    fn capability_name(&self) -> &str {
        self.model()
    }

    fn invoke(&mut self, command: PrinterCommand) -> String {
        execute(&*self, command)
    }
}

impl<M: LaserJetModel> Capability for LaserJet<M> {
    type Input = PrinterCommand;
    type Output = String;

    fn capability_name(&self) -> &str {
        self.model()
    }

    fn invoke(&mut self, command: PrinterCommand) -> String {
        execute(&*self, command)
    }
}

impl Capability for dyn Printer {
    type Input = PrinterCommand;
    type Output = String;

    fn capability_name(&self) -> &str {
        self.model()
    }

    fn invoke(&mut self, command: PrinterCommand) -> String {
        execute(&*self, command)
    }
}
