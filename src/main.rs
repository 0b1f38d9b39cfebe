use stress_test::{
    stress_test_append, stress_test_insert_pop, stress_test_max_stacks, stress_test_queue,
    StressConfig, StressError,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), StressError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = StressConfig::default();

    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║            LINEAR COLLECTION STRESS TESTS                  ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    // Test 1: amortized append
    stress_test_append(&config)?.print();

    // Test 2: insert/pop round trips at random positions
    stress_test_insert_pop(&config)?.print();

    // Test 3: both max stacks against each other
    stress_test_max_stacks(&config)?.print();

    // Test 4: queue layered on two stacks
    stress_test_queue(&config)?.print();

    println!("\n✓ All stress tests completed successfully!");
    Ok(())
}
