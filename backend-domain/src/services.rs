// Pure domain services

pub mod promotion;
pub mod statistics;

pub use promotion::*;
pub use statistics::*;
