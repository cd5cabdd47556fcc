// Domain entities

pub mod content;
pub mod official_event;
pub mod report;
pub mod runtime_config;
pub mod stats;

pub use content::*;
pub use official_event::*;
pub use report::*;
pub use runtime_config::*;
pub use stats::*;
