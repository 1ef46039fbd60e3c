//! Shared types and models for the DIU Result Proxy
//!
//! This crate holds the transport-free transcript domain: profiles, semesters,
//! course results, the CGPA fold and course classification. The backend feeds
//! it with upstream data; nothing here performs I/O.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
