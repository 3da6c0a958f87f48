//! The capability interface and the calculators shipped with the crate.
//!
//! [`Calculator`] is the only type the registries know about. Implementations
//! are free to carry state captured at construction, but `binary_operation`
//! takes `&self`, so that state is read-only once built.

/// Seed used by [`SeededAdder::default`].
pub const DEFAULT_SEED: f64 = 420.0;

/// Contract for a two-operand arithmetic operation.
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// through a process-wide registry.
///
/// # Examples
///
/// ```rust
/// use calculator_registry::{Calculator, SeededAdder};
///
/// let calc = SeededAdder::new(10.0);
/// assert_eq!(calc.binary_operation(-5.0, 5.0), 10.0);
/// ```
pub trait Calculator: Send + Sync {
    /// Combines the two operands into a result.
    fn binary_operation(&self, x: f64, y: f64) -> f64;

    /// Human-readable name of the implementation, used in events and errors.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Adds both operands plus a seed fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeededAdder {
    seed: f64,
}

impl SeededAdder {
    /// Creates an adder that folds `seed` into every result.
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    /// The seed captured at construction.
    pub fn seed(&self) -> f64 {
        self.seed
    }
}

impl Default for SeededAdder {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Calculator for SeededAdder {
    fn binary_operation(&self, x: f64, y: f64) -> f64 {
        x + y + self.seed
    }
}

/// Multiplies both operands. Stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiplier;

impl Calculator for Multiplier {
    fn binary_operation(&self, x: f64, y: f64) -> f64 {
        x * y
    }
}

/// Closed set of the calculators this crate knows about.
///
/// Use this when the implementation is picked at the call site and a trait
/// object is not needed.
///
/// ```rust
/// use calculator_registry::{Calculator, CalculatorKind};
///
/// let kinds = [CalculatorKind::seeded(1.0), CalculatorKind::product()];
/// let results: Vec<f64> = kinds.iter().map(|k| k.binary_operation(3.0, 4.0)).collect();
/// assert_eq!(results, vec![8.0, 12.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorKind {
    Seeded(SeededAdder),
    Product(Multiplier),
}

impl CalculatorKind {
    /// A [`SeededAdder`] built from `seed`.
    pub fn seeded(seed: f64) -> Self {
        CalculatorKind::Seeded(SeededAdder::new(seed))
    }

    /// A [`Multiplier`].
    pub fn product() -> Self {
        CalculatorKind::Product(Multiplier)
    }
}

impl Calculator for CalculatorKind {
    fn binary_operation(&self, x: f64, y: f64) -> f64 {
        match self {
            CalculatorKind::Seeded(adder) => adder.binary_operation(x, y),
            CalculatorKind::Product(multiplier) => multiplier.binary_operation(x, y),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            CalculatorKind::Seeded(adder) => adder.name(),
            CalculatorKind::Product(multiplier) => multiplier.name(),
        }
    }
}

/// Plain functions and closures act as calculators, which lets callers
/// override the arithmetic without declaring a type.
impl<F> Calculator for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn binary_operation(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}
