pub mod approaches;
pub mod base;
pub mod entropy;
pub mod measure;
pub mod reference;
pub mod traits;

pub use base::LogBase;
pub use traits::{CrossEntropy, GlobalValue, LocalValues};
