//! Seeded calculator example for calculator-registry.
//!
//! Demonstrates:
//! - Resolving before registration (typed `NotRegistered` error)
//! - Registering the seeded adder once at startup
//! - Resolving it from a consumer and rejecting a second registration
//! - Doing the same without globals through `CalculatorContext`
//!
//! Run with: `RUST_LOG=debug cargo run --example seeded_calculator`

use calculator_registry::{
    define_registry, get_instance, register, register_seeded, set_trace_callback,
    CalculatorContext, CalculatorKind, Multiplier, RegistryError, DEFAULT_SEED,
};
use tracing_subscriber::EnvFilter;

define_registry!(overrides);

fn main() -> Result<(), RegistryError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== calculator-registry: Seeded Calculator ===\n");

    set_trace_callback(|event| println!("   [trace] {event}"));

    // -------------------------------------------------------------------------
    // 1. Resolve before registration
    // -------------------------------------------------------------------------
    println!("1. Resolving before registration...");

    match get_instance() {
        Ok(_) => println!("   unexpected: already registered"),
        Err(err) => println!("   Error: {err}"),
    }

    // -------------------------------------------------------------------------
    // 2. Register at startup
    // -------------------------------------------------------------------------
    println!("\n2. Registering the seeded adder (seed {DEFAULT_SEED})...");

    register_seeded(DEFAULT_SEED)?;

    // -------------------------------------------------------------------------
    // 3. Resolve from a consumer
    // -------------------------------------------------------------------------
    println!("\n3. Resolving...");

    let calc = get_instance()?;
    println!("   2 + 2 with seed -> {}", calc.binary_operation(2.0, 2.0));

    // -------------------------------------------------------------------------
    // 4. Second registration is rejected
    // -------------------------------------------------------------------------
    println!("\n4. Registering a multiplier on top...");

    if let Err(err) = register(Multiplier) {
        println!("   Error: {err}");
    }
    println!(
        "   still -> {}",
        get_instance()?.binary_operation(2.0, 2.0)
    );

    // -------------------------------------------------------------------------
    // 5. An isolated registry with a function override
    // -------------------------------------------------------------------------
    println!("\n5. Isolated registry with a function override...");

    overrides::register(|x: f64, y: f64| x * 1000.0 + y * 1_000_000.0)?;
    println!(
        "   override(2, 2) -> {}",
        overrides::get_instance()?.binary_operation(2.0, 2.0)
    );

    // -------------------------------------------------------------------------
    // 6. No globals
    // -------------------------------------------------------------------------
    println!("\n6. Using an injected context...");

    let ctx = CalculatorContext::with_calculator(CalculatorKind::product());
    println!("   2 * 2 -> {}", ctx.binary_operation(2.0, 2.0)?);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
