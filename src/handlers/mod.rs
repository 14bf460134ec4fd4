pub mod registration;
pub mod shared;
pub mod stats;
pub mod teams;
