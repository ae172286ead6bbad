//! Data models

pub mod alert;
pub mod analytics;
pub mod features;
pub mod prediction;
pub mod record;

pub use alert::*;
pub use analytics::*;
pub use features::*;
pub use prediction::*;
pub use record::*;
