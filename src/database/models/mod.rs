pub mod macros;
pub mod stats;
pub mod team;

// Re-export all models for easy importing
pub use stats::*;
pub use team::*;
