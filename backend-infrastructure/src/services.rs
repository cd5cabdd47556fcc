pub mod clock;
pub mod health_service;

pub use clock::*;
pub use health_service::*;
