//! Macro for creating isolated calculator registries.

/// Creates a calculator registry module with a single macro invocation.
///
/// The macro generates a module containing:
/// - the slot static (hidden)
/// - the trace callback static (hidden)
/// - an `Api` struct implementing `RegistryApi`
/// - free functions delegating to it
///
/// # Examples
///
/// ```rust
/// use calculator_registry::{define_registry, SeededAdder};
///
/// define_registry!(pricing);
///
/// assert!(pricing::get_instance().is_err());
///
/// pricing::register(SeededAdder::new(420.0)).unwrap();
/// let calc = pricing::get_instance().unwrap();
/// assert_eq!(calc.binary_operation(2.0, 2.0), 424.0);
/// ```
///
/// # Multiple Registries
///
/// Each generated module owns its own slot:
///
/// ```rust
/// use calculator_registry::{define_registry, Multiplier};
///
/// define_registry!(left);
/// define_registry!(right);
///
/// left::register_seeded(1.0).unwrap();
/// right::register(Multiplier).unwrap();
///
/// assert_eq!(left::get_instance().unwrap().binary_operation(2.0, 3.0), 6.0);
/// assert_eq!(right::get_instance().unwrap().binary_operation(2.0, 3.0), 6.0);
/// assert_eq!(left::get_instance().unwrap().binary_operation(2.0, 2.0), 5.0);
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        #[allow(dead_code)]
        pub mod $name {
            // Slot for the registered calculator (module-private)
            static SLOT: $crate::CalculatorSlot = std::sync::OnceLock::new();

            // Trace callback storage (module-private)
            static TRACE: $crate::TraceCallback = std::sync::Mutex::new(None);

            /// Zero-sized type that implements the registry API.
            pub struct Api;

            impl $crate::RegistryApi for Api {
                const NAME: &'static str = stringify!($name);

                fn slot() -> &'static $crate::CalculatorSlot {
                    &SLOT
                }

                fn trace() -> &'static $crate::TraceCallback {
                    &TRACE
                }
            }

            /// Convenient constant for trait-based access.
            pub const API: Api = Api;

            /// Register a calculator. The first registration wins.
            pub fn register<C: $crate::Calculator + 'static>(
                calculator: C,
            ) -> Result<(), $crate::RegistryError> {
                use $crate::RegistryApi;
                API.register(calculator)
            }

            /// Register a seeded adder.
            pub fn register_seeded(seed: f64) -> Result<(), $crate::RegistryError> {
                use $crate::RegistryApi;
                API.register_seeded(seed)
            }

            /// Register an already boxed calculator.
            pub fn register_boxed(
                calculator: Box<dyn $crate::Calculator>,
            ) -> Result<(), $crate::RegistryError> {
                use $crate::RegistryApi;
                API.register_boxed(calculator)
            }

            /// Retrieve the registered calculator.
            pub fn get_instance() -> Result<&'static dyn $crate::Calculator, $crate::RegistryError> {
                use $crate::RegistryApi;
                API.get_instance()
            }

            /// Check whether a calculator is registered.
            pub fn is_registered() -> bool {
                use $crate::RegistryApi;
                API.is_registered()
            }

            /// Set a tracing callback for registry operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::RegistryEvent) + Send + Sync + 'static,
            ) {
                use $crate::RegistryApi;
                API.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                use $crate::RegistryApi;
                API.clear_trace_callback()
            }
        }
    };
}
