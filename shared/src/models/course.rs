//! Course result models

use serde::{Deserialize, Serialize};

use crate::types::{is_failing_grade, is_pending_evaluation};

/// One attempt at a course in one semester
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseResult {
    pub title: String,
    /// Course code; repeats across semesters when a course is retaken
    pub code: String,
    pub grade: String,
    pub credits: f64,
    /// `None` while the course is not yet evaluated
    #[serde(rename = "cgpa")]
    pub grade_point: Option<f64>,
    pub semester_id: i64,
}

impl CourseResult {
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        grade: impl Into<String>,
        credits: f64,
        grade_point: Option<f64>,
        semester_id: i64,
    ) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            grade: grade.into(),
            credits,
            grade_point,
            semester_id,
        }
    }

    pub fn is_failed(&self) -> bool {
        is_failing_grade(&self.grade)
    }

    pub fn is_pending_evaluation(&self) -> bool {
        is_pending_evaluation(&self.grade)
    }

    /// Credits times grade-point; zero for ungraded courses
    pub fn weighted_points(&self) -> f64 {
        self.grade_point.map(|gp| gp * self.credits).unwrap_or(0.0)
    }

    /// Credits that count towards the CGPA denominator
    ///
    /// Every non-failing course counts, including ones still awaiting a grade-point.
    pub fn passed_credits(&self) -> f64 {
        if self.is_failed() {
            0.0
        } else {
            self.credits
        }
    }
}
