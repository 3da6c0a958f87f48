//! Integration tests for the global registry once a seeded adder is installed.
//!
//! Every test goes through `setup()`, which registers the seed-420 adder
//! exactly once for the whole binary. Tests therefore see the registered
//! state regardless of the order they run in.
//!
//! NOTE: All tests use #[serial] because the global registry has a single
//! trace callback and tracing tests count the events they see.

use calculator_registry::{
    clear_trace_callback, get_instance, is_registered, register, register_boxed, register_seeded,
    set_trace_callback, Calculator, Multiplier, RegistryError, SeededAdder,
};
use serial_test::serial;
use std::sync::{Arc, Mutex, Once};

static SETUP: Once = Once::new();

fn setup() {
    SETUP.call_once(|| {
        register_seeded(420.0).expect("first registration succeeds");
    });
}

#[test]
#[serial]
fn test_seed_420_scenario() -> Result<(), RegistryError> {
    setup();

    let calc = get_instance()?;
    assert_eq!(calc.binary_operation(2.0, 2.0), 424.0);

    Ok(())
}

#[test]
#[serial]
fn test_result_is_sum_plus_seed() -> Result<(), RegistryError> {
    setup();

    let calc = get_instance()?;
    for (x, y) in [(0.0, 0.0), (-5.0, 5.0), (1.5, 2.25), (-1000.0, 10.0)] {
        assert_eq!(calc.binary_operation(x, y), x + y + 420.0);
    }

    Ok(())
}

#[test]
#[serial]
fn test_identity_is_stable() {
    setup();

    let first = get_instance().unwrap();
    let second = get_instance().unwrap();

    assert_eq!(
        std::ptr::from_ref(first).cast::<()>(),
        std::ptr::from_ref(second).cast::<()>()
    );
}

#[test]
#[serial]
fn test_is_registered() {
    setup();
    assert!(is_registered());
}

#[test]
#[serial]
fn test_reregistration_rejected_and_first_kept() {
    setup();

    assert!(matches!(
        register(Multiplier),
        Err(RegistryError::AlreadyRegistered { .. })
    ));
    assert!(matches!(
        register_seeded(10.0),
        Err(RegistryError::AlreadyRegistered { .. })
    ));
    let boxed: Box<dyn Calculator> = Box::new(SeededAdder::new(1.0));
    assert!(register_boxed(boxed).is_err());

    assert_eq!(get_instance().unwrap().binary_operation(2.0, 2.0), 424.0);
}

#[test]
#[serial]
fn test_instance_shared_across_threads() {
    setup();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let calc = get_instance().unwrap();
                calc.binary_operation(f64::from(i), 0.0)
            })
        })
        .collect();

    let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![420.0, 421.0, 422.0, 423.0]);
}

#[test]
#[serial]
fn test_trace_rejected_registration() {
    setup();

    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();

    set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });

    let _ = register(Multiplier);
    let _ = get_instance();

    clear_trace_callback();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert!(captured[0].contains("Multiplier"));
    assert!(captured[0].contains("accepted: false"));
    assert_eq!(captured[1], "get { found: true }");
}
