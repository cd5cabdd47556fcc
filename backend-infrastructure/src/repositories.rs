pub mod local_rows;
pub mod local_store;
pub mod remote_rows;
pub mod remote_store;

pub use local_store::*;
pub use remote_store::*;
