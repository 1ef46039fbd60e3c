//! Transcript fold: running totals, defense credit and final CGPA

use serde::{Deserialize, Serialize};

use crate::models::{classify_courses, CourseResult, Semester, SemesterSummary, StudentProfile};
use crate::types::{weighted_average, DEFENSE_CREDITS};

/// Combined transcript returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSummary {
    pub student: StudentProfile,
    pub semesters: Vec<SemesterSummary>,
    /// Passed credits, defense included
    pub total_credits: f64,
    #[serde(rename = "finalCGPA")]
    pub final_cgpa: Option<f64>,
    pub defense_included: bool,
    pub failed_courses: Vec<CourseResult>,
    pub low_cgpa_courses: Vec<CourseResult>,
    pub passed_courses: Vec<CourseResult>,
    pub has_pending_evaluation: bool,
}

/// Running totals while semesters are folded in catalog order
#[derive(Debug, Clone, Default)]
pub struct TranscriptAccumulator {
    semesters: Vec<SemesterSummary>,
    passed_credits: f64,
    weighted_sum: f64,
    pending_evaluation: bool,
    defense_included: bool,
}

impl TranscriptAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one semester's retained courses into the totals
    ///
    /// Returns `false` when the semester had no courses and was left out.
    pub fn add_semester(&mut self, semester: &Semester, courses: Vec<CourseResult>) -> bool {
        if courses.is_empty() {
            return false;
        }

        for course in &courses {
            self.weighted_sum += course.weighted_points();
            self.passed_credits += course.passed_credits();
            self.pending_evaluation |= course.is_pending_evaluation();
        }

        self.semesters.push(SemesterSummary::new(semester, courses));
        true
    }

    /// Count the defense course at the given grade-point
    pub fn apply_defense(&mut self, defense_cgpa: f64) {
        self.passed_credits += DEFENSE_CREDITS;
        self.weighted_sum += DEFENSE_CREDITS * defense_cgpa;
        self.defense_included = true;
    }

    pub fn passed_credits(&self) -> f64 {
        self.passed_credits
    }

    pub fn weighted_sum(&self) -> f64 {
        self.weighted_sum
    }

    pub fn semesters(&self) -> &[SemesterSummary] {
        &self.semesters
    }

    pub fn final_cgpa(&self) -> Option<f64> {
        weighted_average(self.weighted_sum, self.passed_credits)
    }

    /// Classify courses and assemble the transcript
    pub fn finish(self, student: StudentProfile) -> TranscriptSummary {
        let final_cgpa = self.final_cgpa();
        let classification = classify_courses(&self.semesters);

        TranscriptSummary {
            student,
            semesters: self.semesters,
            total_credits: self.passed_credits,
            final_cgpa,
            defense_included: self.defense_included,
            failed_courses: classification.failed,
            low_cgpa_courses: classification.low_cgpa,
            passed_courses: classification.passed,
            has_pending_evaluation: self.pending_evaluation,
        }
    }
}
