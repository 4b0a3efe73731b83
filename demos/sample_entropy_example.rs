use ndarray::Array1;
use tracing_subscriber::EnvFilter;
use tsentropy::estimators::entropy::{Entropy, ProfileValues};
use tsentropy::estimators::params::{Tolerance, WU_TOLERANCE_FACTOR};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=tsentropy=debug shows the resolved tolerance and template counts
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A noisy sine: regular at short scales, noisy at long ones
    let data: Array1<f64> = (0..500)
        .map(|i| (i as f64 * 0.2).sin() + 0.3 * ((i * 7919 % 101) as f64 / 101.0 - 0.5))
        .collect();

    let sampen = Entropy::new_sample(data.clone(), 3, Tolerance::StdFactor(0.2))?;
    println!("Tolerance: {}", sampen.tolerance);
    println!("Template counts: {:?}", sampen.template_counts());
    println!("Sample entropy (m = 1..=3): {}", sampen.values());

    let mse = Entropy::new_multiscale(data.clone(), 2, Tolerance::StdFactor(0.2), Some(8))?;
    println!("Multiscale entropy (scales 1..=8): {}", mse.values());

    let cmse = Entropy::new_composite_multiscale(
        data,
        2,
        8,
        Tolerance::StdFactor(WU_TOLERANCE_FACTOR),
    )?;
    println!("Composite multiscale entropy (scales 1..=8): {}", cmse.values());
    Ok(())
}
