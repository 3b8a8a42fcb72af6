//! Composition, single-definition types and read-only fields.
//!
//! Run with: cargo run --bin people_records

use capability_dispatch::logging;
use capability_dispatch::money::Amount;
use capability_dispatch::people::{Employee, Gender, Person, Teacher};
use colored::Colorize;

fn main() {
    logging::init();

    println!("{}", "=== Person and Teacher ===".bold());
    let person = Person::new("Alice", 30, "221B Baker Street");
    println!("{}", person.display_details());

    let teacher = Teacher::new(Person::new("Bob", 42, "10 Downing Street"), 1001);
    println!("{}", teacher.person().display_details());
    println!("Employee id: {}", teacher.employee_id());
    println!("{}", teacher.teach("Mathematics"));

    println!("\n{}", "=== Employee ===".bold());
    let salary = Amount::from_cents(5_500_000);
    let employee = Employee::new("Jane", "Doe", Gender::Female, salary);
    println!("{}", employee.display_full_name());
    println!("{}", employee.details());
}
