use ndarray::array;
use tracing_subscriber::EnvFilter;
use tsentropy::estimators::entropy::{Entropy, GlobalValue, LocalValues, ProfileValues};
use tsentropy::estimators::params::PermutationParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Bandt & Pompe's worked example
    let data = array![4.0, 7.0, 9.0, 10.0, 6.0, 11.0, 3.0];

    for order in 2..=3 {
        let params = PermutationParams::new(order, 1);
        let pe = Entropy::new_permutation(data.clone(), params)?;
        let normalized = Entropy::new_permutation(data.clone(), params.normalized(true))?;
        println!(
            "order {order}: PE = {:.4} bits, normalized = {:.4}, motifs = {}",
            pe.global_value(),
            normalized.global_value(),
            pe.num_motifs()
        );
        println!("  local values: {}", pe.local_values());

        let wpe = Entropy::new_weighted_permutation(data.clone(), params)?;
        println!("  weighted PE = {:.4} bits", wpe.global_value());
    }

    let long: Vec<f64> = (0..400).map(|i| ((i * i) % 37) as f64).collect();
    let mspe = Entropy::new_multiscale_permutation(long.into(), PermutationParams::new(3, 1), 5)?;
    println!("Multiscale permutation entropy (scales 1..=5): {}", mspe.values());
    Ok(())
}
