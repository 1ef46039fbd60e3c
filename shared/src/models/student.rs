//! Student profile models

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_SHIFT, NOT_PROVIDED};

/// Student profile as reported by the results API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    pub id: String,
    pub name: String,
    pub program: String,
    pub department: String,
    pub campus: String,
    pub shift: String,
    pub faculty: String,
    /// Starting semester label, e.g. "Spring 2022"
    pub semester: String,
    pub batch: String,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            id: NOT_PROVIDED.to_string(),
            name: NOT_PROVIDED.to_string(),
            program: NOT_PROVIDED.to_string(),
            department: NOT_PROVIDED.to_string(),
            campus: NOT_PROVIDED.to_string(),
            shift: DEFAULT_SHIFT.to_string(),
            faculty: NOT_PROVIDED.to_string(),
            semester: NOT_PROVIDED.to_string(),
            batch: NOT_PROVIDED.to_string(),
        }
    }
}
