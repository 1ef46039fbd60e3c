//! HTTP handlers for the DIU Result Proxy

pub mod health;
pub mod result;

pub use health::{health_check, root};
pub use result::get_result;
