//! The process-wide default calculator registry.
//!
//! One slot per process, filled at most once. Startup code registers an
//! implementation; consumers anywhere later resolve it with [`get_instance`].
//!
//! # Examples
//!
//! ```
//! use calculator_registry::{get_instance, register_seeded};
//!
//! register_seeded(420.0).unwrap();
//!
//! let calc = get_instance().unwrap();
//! assert_eq!(calc.binary_operation(2.0, 2.0), 424.0);
//! ```

use std::sync::{Mutex, OnceLock};

use crate::registry_trait::{CalculatorSlot, RegistryApi, TraceCallback};
use crate::{Calculator, RegistryError, RegistryEvent};

/// Global slot holding the registered calculator.
static GLOBAL_SLOT: CalculatorSlot = OnceLock::new();

/// Holds an optional user-defined tracing callback.
static TRACE_CALLBACK: TraceCallback = Mutex::new(None);

struct Global;

impl RegistryApi for Global {
    const NAME: &'static str = "global";

    fn slot() -> &'static CalculatorSlot {
        &GLOBAL_SLOT
    }

    fn trace() -> &'static TraceCallback {
        &TRACE_CALLBACK
    }
}

/// Sets a tracing callback that will be invoked on every registry interaction.
///
/// # Example
/// ```rust
/// use calculator_registry::set_trace_callback;
///
/// set_trace_callback(|event| println!("[calculator-registry] {event}"));
/// ```
pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
    Global.set_trace_callback(callback);
}

/// Clears the tracing callback.
pub fn clear_trace_callback() {
    Global.clear_trace_callback();
}

/// Registers `calculator` in the global slot.
///
/// The calculator is kept until the process exits and is never dropped.
///
/// # Errors
///
/// `RegistryError::AlreadyRegistered` if the slot is already filled. The
/// installed calculator is kept and `calculator` is dropped.
///
/// # Examples
///
/// ```
/// use calculator_registry::{register, get_instance, Multiplier, RegistryError};
///
/// register(Multiplier).unwrap();
/// assert!(matches!(
///     register(Multiplier),
///     Err(RegistryError::AlreadyRegistered { .. })
/// ));
/// assert_eq!(get_instance().unwrap().binary_operation(6.0, 7.0), 42.0);
/// ```
pub fn register<C: Calculator + 'static>(calculator: C) -> Result<(), RegistryError> {
    Global.register(calculator)
}

/// Registers a [`SeededAdder`](crate::SeededAdder) built from `seed`.
pub fn register_seeded(seed: f64) -> Result<(), RegistryError> {
    Global.register_seeded(seed)
}

/// Registers an already boxed calculator.
pub fn register_boxed(calculator: Box<dyn Calculator>) -> Result<(), RegistryError> {
    Global.register_boxed(calculator)
}

/// Returns the registered calculator.
///
/// # Errors
///
/// `RegistryError::NotRegistered` if nothing was registered yet.
///
/// # Examples
///
/// ```
/// use calculator_registry::{get_instance, RegistryError};
///
/// assert_eq!(get_instance().err(), Some(RegistryError::NotRegistered));
/// ```
pub fn get_instance() -> Result<&'static dyn Calculator, RegistryError> {
    Global.get_instance()
}

/// Checks whether a calculator is registered in the global slot.
pub fn is_registered() -> bool {
    Global.is_registered()
}
