pub mod discrete;
pub mod ordinal;
pub mod sample;

// Unified re-exports for common estimators so tests and users can import
// tsentropy::estimators::approaches::* ergonomically.
pub use discrete::shannon::ShannonEntropy;
pub use ordinal::multiscale::MultiscalePermutationEntropy;
pub use ordinal::permutation::PermutationEntropy;
pub use ordinal::weighted::WeightedPermutationEntropy;
pub use sample::multiscale::{CompositeMultiscaleEntropy, MultiscaleEntropy};
pub use sample::sample::SampleEntropy;
