//! Domain models for the DIU Result Proxy

mod classification;
mod course;
mod semester;
mod student;
mod transcript;

pub use classification::*;
pub use course::*;
pub use semester::*;
pub use student::*;
pub use transcript::*;
