pub mod content_queries;
pub mod event_queries;
pub mod report_queries;
pub mod stats_queries;
