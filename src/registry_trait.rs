//! Core trait defining registry behavior.
//!
//! This module provides the `RegistryApi` trait with default implementations for
//! registering, resolving and tracing a single calculator instance.
//!
//! Each registry owns exactly one slot. The slot moves from empty to filled once
//! and never back: the first registration wins and later ones are rejected.

use std::sync::{Arc, Mutex, OnceLock};

use crate::{Calculator, RegistryError, RegistryEvent, SeededAdder};

/// Storage for the registered calculator.
///
/// A `static` slot is never dropped, so the registered calculator's `Drop`
/// does not run at process exit.
pub type CalculatorSlot = OnceLock<Box<dyn Calculator>>;

/// Storage for the optional trace callback.
pub type TraceCallback = Mutex<Option<Arc<dyn Fn(&RegistryEvent) + Send + Sync>>>;

/// Core trait defining registry behavior.
///
/// Implementors only provide the two statics (`slot` and `trace`) and a name;
/// every operation comes from the default methods.
pub trait RegistryApi {
    /// Registry name used in log records.
    const NAME: &'static str;

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceCallback;

    /// Set a tracing callback for registry operations.
    ///
    /// The callback is invoked for every `register*`, `get_instance` and
    /// `is_registered` call, after the operation completed. It replaces any
    /// previously set callback.
    ///
    /// # Lock Poisoning Recovery
    ///
    /// A poisoned trace lock is recovered by extracting the inner value.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback.
    ///
    /// Does not affect the registered calculator.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Log `event` and hand it to the current callback, if any.
    ///
    /// Only the default methods call this; it is not part of the public API.
    /// The callback runs after the trace lock is released, so it may call back
    /// into this registry.
    #[doc(hidden)]
    fn emit_event(&self, event: &RegistryEvent) {
        tracing::debug!(registry = Self::NAME, %event, "calculator registry event");

        let callback = Self::trace()
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registry
    // -------------------------------------------------------------------------------------------------

    /// Access the slot static.
    fn slot() -> &'static CalculatorSlot;

    /// Register a calculator, taking ownership of it.
    ///
    /// The slot owns the calculator for the rest of the process. Slots live in
    /// `static`s, which are never dropped, so its `Drop` impl never runs.
    ///
    /// # Errors
    ///
    /// `RegistryError::AlreadyRegistered` if a calculator is already installed.
    /// The offered calculator is dropped and the installed one stays.
    fn register<C: Calculator + 'static>(&self, calculator: C) -> Result<(), RegistryError> {
        self.register_boxed(Box::new(calculator))
    }

    /// Register a [`SeededAdder`] built from `seed`.
    fn register_seeded(&self, seed: f64) -> Result<(), RegistryError> {
        self.register(SeededAdder::new(seed))
    }

    /// Register an already boxed calculator.
    ///
    /// Concurrent calls are ordered by the slot: exactly one succeeds.
    fn register_boxed(&self, calculator: Box<dyn Calculator>) -> Result<(), RegistryError> {
        let implementation = calculator.name();
        let accepted = Self::slot().set(calculator).is_ok();

        self.emit_event(&RegistryEvent::Register {
            implementation,
            accepted,
        });

        if accepted {
            Ok(())
        } else {
            tracing::warn!(
                registry = Self::NAME,
                implementation,
                "calculator already registered, registration rejected"
            );
            Err(RegistryError::AlreadyRegistered { implementation })
        }
    }

    /// Retrieve the registered calculator.
    ///
    /// The reference borrows from the registry's static slot, so it stays valid
    /// for the rest of the process and always points at the same instance.
    ///
    /// # Errors
    ///
    /// `RegistryError::NotRegistered` if nothing was registered yet.
    fn get_instance(&self) -> Result<&'static dyn Calculator, RegistryError> {
        let instance: Option<&'static dyn Calculator> = Self::slot().get().map(|c| &**c);

        self.emit_event(&RegistryEvent::Get {
            found: instance.is_some(),
        });

        instance.ok_or_else(|| {
            tracing::warn!(registry = Self::NAME, "calculator requested before registration");
            RegistryError::NotRegistered
        })
    }

    /// Check whether a calculator is registered.
    fn is_registered(&self) -> bool {
        let found = Self::slot().get().is_some();
        self.emit_event(&RegistryEvent::Contains { found });
        found
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
