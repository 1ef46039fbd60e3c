//! External API integrations

pub mod diu_results;

#[cfg(test)]
pub mod fixture;

pub use diu_results::{DiuResultsClient, ResultsApi};
