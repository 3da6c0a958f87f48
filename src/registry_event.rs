/// Events emitted by a registry during operations.
///
/// These are passed to the callback installed with `set_trace_callback` and
/// logged through `tracing` at `debug` level.
///
/// # Examples
///
/// ```rust
/// use calculator_registry::RegistryEvent;
///
/// let event = RegistryEvent::Get { found: false };
/// assert_eq!(event.to_string(), "get { found: false }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A registration was attempted.
    Register {
        /// Name of the implementation offered for registration.
        implementation: &'static str,
        /// `false` when the slot was already filled and the offer was dropped.
        accepted: bool,
    },

    /// The instance was requested.
    Get {
        /// Whether an instance was installed.
        found: bool,
    },

    /// The registration state was queried.
    Contains {
        /// Whether an instance was installed.
        found: bool,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Register {
                implementation,
                accepted,
            } => write!(
                f,
                "register {{ implementation: {implementation}, accepted: {accepted} }}"
            ),
            RegistryEvent::Get { found } => write!(f, "get {{ found: {found} }}"),
            RegistryEvent::Contains { found } => write!(f, "contains {{ found: {found} }}"),
        }
    }
}
