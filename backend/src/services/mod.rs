//! Business logic services for the DIU Result Proxy

pub mod transcript;

pub use transcript::TranscriptService;
