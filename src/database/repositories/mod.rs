pub mod stats;
pub mod team;
