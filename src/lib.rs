//! # Capability Dispatch in Rust
//!
//! This crate shows how classic object-oriented features map onto traits:
//!
//! ## Dispatcher
//! - A `Capability` contract with associated input/output types
//! - `Dispatcher` binds exactly one variant and forwards calls to it
//! - Works with concrete types, `Box<dyn Trait>` and `&mut T`
//!
//! ## Interfaces
//! - `payment`: payment methods behind one contract, checkout by injection
//!
//! ## Abstract classes and virtual methods
//! - `animal`: abstract `make_sound`, default `eat` with an override
//! - `vehicle`: per-variant acceleration, read-only speed
//!
//! ## Sealed overrides
//! - `printer`: LaserJet's `print` is final for every LaserJet model
//!
//! ## Failure propagation
//! - `arithmetic`: divide-by-zero surfaces as an error, never a sentinel
//!
//! ## Extension methods, composition, read-only fields
//! - `extensions`, `people`
//!
//! Run demos with: `cargo run --bin <name>`

pub mod animal;
pub mod arithmetic;
pub mod config;
pub mod dispatch;
pub mod extensions;
pub mod logging;
pub mod money;
pub mod payment;
pub mod people;
pub mod printer;
pub mod vehicle;

pub use dispatch::{Capability, Dispatcher};
pub use money::Amount;
