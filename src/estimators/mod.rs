pub mod approaches;
pub mod entropy;
pub mod functional;
pub mod params;
pub mod traits;
pub mod utils;

pub use params::{MotifEncoding, PermutationParams, Tolerance};
pub use traits::{GlobalValue, LocalValues, OptionalLocalValues, ProfileValues};
