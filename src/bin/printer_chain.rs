//! Sealed overrides: LaserJet's print is final for its models.
//!
//! Run with: cargo run --bin printer_chain

use anyhow::Result;
use capability_dispatch::config::DemoConfig;
use capability_dispatch::printer::{BasicPrinter, InkJet, LaserJet, Printer, PrinterCommand};
use capability_dispatch::{logging, Dispatcher};
use colored::Colorize;

fn main() -> Result<()> {
    logging::init();
    let config = DemoConfig::load()?;

    println!("{}", "=== Printers ===".bold());
    let printers: Vec<Box<dyn Printer>> = vec![
        Box::new(BasicPrinter::new("Office printer")),
        Box::new(LaserJet::new()),
        Box::new(LaserJet::with_model(InkJet)),
    ];

    for printer in printers {
        let mut dispatcher = Dispatcher::bind(printer);
        println!("{}", dispatcher.invoke(PrinterCommand::WarmUp));
        println!("{}", dispatcher.invoke(PrinterCommand::Print(config.document.clone())));
    }

    Ok(())
}
