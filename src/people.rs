//! Composition instead of inheritance, one-place type definitions and
//! fields that cannot change after construction.

use crate::money::Amount;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
    address: String,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, address: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            age,
            address: address.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn relocate(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn display_details(&self) -> String {
        format!("Name: {}, Age: {}, Address: {}", self.name, self.age, self.address)
    }
}

/// A person with an employee id that is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    person: Person,
    employee_id: u32,
}

impl Teacher {
    pub fn new(person: Person, employee_id: u32) -> Self {
        Teacher {
            person,
            employee_id,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn employee_id(&self) -> u32 {
        self.employee_id
    }

    pub fn teach(&self, subject: &str) -> String {
        format!("{} is teaching {}.", self.person.name(), subject)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Unspecified,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => write!(f, "Female"),
            Gender::Male => write!(f, "Male"),
            Gender::Unspecified => write!(f, "Unspecified"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    first_name: String,
    last_name: String,
    gender: Gender,
    salary: Amount,
}

impl Employee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
        salary: Amount,
    ) -> Self {
        Employee {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            salary,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn display_full_name(&self) -> String {
        format!("Full Name is : {}", self.full_name())
    }

    pub fn salary(&self) -> Amount {
        self.salary
    }

    pub fn details(&self) -> String {
        [
            "Employee Details : ".to_string(),
            format!("First Name : {}", self.first_name),
            format!("Last Name : {}", self.last_name),
            format!("Gender : {}", self.gender),
            format!("Salary : {}", self.salary),
        ]
        .join("\n")
    }
}
