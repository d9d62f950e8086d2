pub mod discrete;

// Unified re-exports for common estimators so tests and users can import
// labelentropy::estimators::approaches::* ergonomically.
pub use discrete::metric::MetricEntropy;
pub use discrete::relative::RelativeEntropy;
pub use discrete::shannon::ShannonEntropy;
