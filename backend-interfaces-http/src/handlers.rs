pub mod content_handlers;
pub mod event_handlers;
pub mod ops_handlers;
pub mod report_handlers;

pub use content_handlers::*;
pub use event_handlers::*;
pub use ops_handlers::*;
pub use report_handlers::*;
