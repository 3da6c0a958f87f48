//! # Calculator Registry
//!
//! A write-once registry for a single calculator implementation hidden behind
//! the [`Calculator`] trait. Startup code registers an implementation; any
//! consumer later resolves it without knowing the concrete type.
//!
//! ## Quick Start
//!
//! ```rust
//! use calculator_registry::{get_instance, register_seeded};
//!
//! // Install the implementation once
//! register_seeded(420.0).unwrap();
//!
//! // Resolve it anywhere
//! let calc = get_instance().unwrap();
//! assert_eq!(calc.binary_operation(2.0, 2.0), 424.0);
//! ```
//!
//! ## Features
//!
//! - **Write-once**: the first registration wins, later ones return
//!   [`RegistryError::AlreadyRegistered`]
//! - **Typed failure**: resolving before registration returns
//!   [`RegistryError::NotRegistered`] instead of panicking
//! - **Thread-safe**: registration and lookup are ordered by a `OnceLock`
//! - **Isolated registries**: [`define_registry!`] generates independent slots
//! - **No globals required**: [`CalculatorContext`] holds the calculator as an
//!   ordinary value
//! - **Tracing**: per-registry event callbacks plus `tracing` log records
//!
//! ## Main Functions
//!
//! - [`register`] - Register a calculator in the global registry
//! - [`register_seeded`] - Register a [`SeededAdder`] built from a seed
//! - [`register_boxed`] - Register an already boxed calculator
//! - [`get_instance`] - Retrieve the registered calculator
//! - [`is_registered`] - Check whether a calculator is registered
//! - [`set_trace_callback`] - Set up tracing for registry operations

mod calculator;
mod context;
mod macros;
mod registry;
mod registry_error;
mod registry_event;
mod registry_trait;

pub use calculator::{Calculator, CalculatorKind, Multiplier, SeededAdder, DEFAULT_SEED};
pub use context::CalculatorContext;
pub use registry::{
    clear_trace_callback, get_instance, is_registered, register, register_boxed, register_seeded,
    set_trace_callback,
};
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use registry_trait::{CalculatorSlot, RegistryApi, TraceCallback};
