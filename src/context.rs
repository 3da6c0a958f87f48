//! An owned calculator holder to pass around instead of using a global slot.

use std::fmt;

use crate::{Calculator, RegistryError, SeededAdder};

/// Holds at most one calculator, owned by whoever owns the context.
///
/// Follows the same rules as the global registry: registration happens once,
/// and asking for the calculator before that is an error.
///
/// # Examples
///
/// ```rust
/// use calculator_registry::{CalculatorContext, RegistryError};
///
/// let mut ctx = CalculatorContext::new();
/// assert_eq!(ctx.binary_operation(2.0, 2.0), Err(RegistryError::NotRegistered));
///
/// ctx.register_seeded(420.0).unwrap();
/// assert_eq!(ctx.binary_operation(2.0, 2.0), Ok(424.0));
/// ```
#[derive(Default)]
pub struct CalculatorContext {
    calculator: Option<Box<dyn Calculator>>,
}

impl CalculatorContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with `calculator` already registered.
    pub fn with_calculator<C: Calculator + 'static>(calculator: C) -> Self {
        Self {
            calculator: Some(Box::new(calculator)),
        }
    }

    /// Registers `calculator`. The first registration wins.
    ///
    /// # Errors
    ///
    /// `RegistryError::AlreadyRegistered` if the context already holds one.
    pub fn register<C: Calculator + 'static>(
        &mut self,
        calculator: C,
    ) -> Result<(), RegistryError> {
        self.register_boxed(Box::new(calculator))
    }

    /// Registers a [`SeededAdder`] built from `seed`.
    pub fn register_seeded(&mut self, seed: f64) -> Result<(), RegistryError> {
        self.register(SeededAdder::new(seed))
    }

    /// Registers an already boxed calculator.
    pub fn register_boxed(
        &mut self,
        calculator: Box<dyn Calculator>,
    ) -> Result<(), RegistryError> {
        if self.calculator.is_some() {
            let implementation = calculator.name();
            tracing::warn!(
                implementation,
                "context already holds a calculator, registration rejected"
            );
            return Err(RegistryError::AlreadyRegistered { implementation });
        }

        tracing::debug!(
            implementation = calculator.name(),
            "calculator registered in context"
        );
        self.calculator = Some(calculator);
        Ok(())
    }

    /// Returns the registered calculator.
    ///
    /// # Errors
    ///
    /// `RegistryError::NotRegistered` if the context is empty.
    pub fn get(&self) -> Result<&dyn Calculator, RegistryError> {
        let found = self.calculator.is_some();
        tracing::debug!(found, "calculator requested from context");

        self.calculator.as_deref().ok_or_else(|| {
            tracing::warn!("calculator requested before registration");
            RegistryError::NotRegistered
        })
    }

    /// Checks whether a calculator is registered.
    pub fn is_registered(&self) -> bool {
        let found = self.calculator.is_some();
        tracing::debug!(found, "context registration queried");
        found
    }

    /// Runs the registered calculator on `x` and `y`.
    pub fn binary_operation(&self, x: f64, y: f64) -> Result<f64, RegistryError> {
        Ok(self.get()?.binary_operation(x, y))
    }
}

impl fmt::Debug for CalculatorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorContext")
            .field("calculator", &self.calculator.as_ref().map(|c| c.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CalculatorKind, Multiplier};

    #[test]
    fn test_empty_context_not_registered() {
        let ctx = CalculatorContext::new();
        assert!(!ctx.is_registered());
        assert_eq!(ctx.get().err(), Some(RegistryError::NotRegistered));
    }

    #[test]
    fn test_seed_420_scenario() {
        let mut ctx = CalculatorContext::new();
        ctx.register_seeded(420.0).unwrap();
        assert_eq!(ctx.binary_operation(2.0, 2.0), Ok(424.0));
    }

    #[test]
    fn test_seed_10_scenario() -> Result<(), RegistryError> {
        let mut ctx = CalculatorContext::new();
        ctx.register(SeededAdder::new(10.0))?;
        assert_eq!(ctx.binary_operation(0.0, 0.0)?, 10.0);
        assert_eq!(ctx.binary_operation(-5.0, 5.0)?, 10.0);
        Ok(())
    }

    #[test]
    fn test_with_calculator() {
        let ctx = CalculatorContext::with_calculator(CalculatorKind::product());
        assert!(ctx.is_registered());
        assert_eq!(ctx.binary_operation(3.0, 4.0), Ok(12.0));
    }

    #[test]
    fn test_second_registration_rejected() {
        let mut ctx = CalculatorContext::with_calculator(SeededAdder::new(1.0));
        let result = ctx.register(Multiplier);

        assert!(matches!(
            result,
            Err(RegistryError::AlreadyRegistered { implementation }) if implementation.ends_with("Multiplier")
        ));
        assert_eq!(ctx.binary_operation(2.0, 3.0), Ok(6.0));
    }

    #[test]
    fn test_identity_is_stable() {
        let ctx = CalculatorContext::with_calculator(SeededAdder::new(0.0));
        let first = std::ptr::from_ref(ctx.get().unwrap()).cast::<()>();
        let second = std::ptr::from_ref(ctx.get().unwrap()).cast::<()>();
        assert_eq!(first, second);
    }

    #[test]
    fn test_injected_into_consumer() {
        struct Invoice<'a> {
            calculator: &'a CalculatorContext,
        }

        impl Invoice<'_> {
            fn total(&self, net: f64, tax: f64) -> Result<f64, RegistryError> {
                self.calculator.binary_operation(net, tax)
            }
        }

        let ctx = CalculatorContext::with_calculator(SeededAdder::new(5.0));
        let invoice = Invoice { calculator: &ctx };
        assert_eq!(invoice.total(100.0, 20.0), Ok(125.0));
    }

    #[test]
    fn test_context_drops_its_calculator() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Counted;

        impl Calculator for Counted {
            fn binary_operation(&self, x: f64, y: f64) -> f64 {
                x * y
            }
        }

        impl Drop for Counted {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::SeqCst);
            }
        }

        let ctx = CalculatorContext::with_calculator(Counted);
        assert_eq!(ctx.binary_operation(2.0, 3.0), Ok(6.0));
        drop(ctx);
        assert_eq!(DROPS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_shows_implementation() {
        let ctx = CalculatorContext::with_calculator(Multiplier);
        assert!(format!("{ctx:?}").contains("Multiplier"));
        assert_eq!(
            format!("{:?}", CalculatorContext::new()),
            "CalculatorContext { calculator: None }"
        );
    }
}
