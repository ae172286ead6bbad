//! Computation engine
//!
//! Stateless scoring and synthesis. Every entry point is a pure function of
//! its inputs plus a caller-supplied random source; there is no shared
//! mutable state and nothing here performs I/O.

pub mod analytics;
pub mod estimator;
pub mod synthesizer;
pub mod weights;

pub use estimator::VolumeEstimator;
pub use weights::FeatureWeights;
