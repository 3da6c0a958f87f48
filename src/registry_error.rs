use thiserror::Error;

/// Errors returned by the calculator registries and [`CalculatorContext`](crate::CalculatorContext).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The instance was requested before any registration.
    #[error("calculator instance not registered")]
    NotRegistered,

    /// A calculator is already installed; the new one was dropped.
    #[error("calculator instance already registered, rejected {implementation}")]
    AlreadyRegistered {
        /// Name of the rejected implementation.
        implementation: &'static str,
    },
}
