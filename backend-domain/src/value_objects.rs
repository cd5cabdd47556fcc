// Domain value objects
pub mod casualties;
pub mod geo_point;
pub mod identifiers;
pub mod province;
pub mod report_status;

pub use casualties::*;
pub use geo_point::*;
pub use identifiers::*;
pub use province::*;
pub use report_status::*;
