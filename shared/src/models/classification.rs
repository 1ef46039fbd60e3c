//! Course classification across semesters
//!
//! Retakes share a course code, so every list here is keyed by code. The
//! reduction is order independent: attempts are compared explicitly rather
//! than overwritten in iteration order.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{CourseResult, SemesterSummary};
use crate::types::LOW_CGPA_THRESHOLD;

/// Courses bucketed by outcome, one entry per course code
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseClassification {
    /// Codes whose latest attempt is a fail
    pub failed: Vec<CourseResult>,
    /// Best passing attempts at or below the low-CGPA threshold
    pub low_cgpa: Vec<CourseResult>,
    /// Best passing attempt per code
    pub passed: Vec<CourseResult>,
}

/// Rank two attempts at the same course; `Greater` means `a` is better
///
/// Higher grade-point wins, then the later semester.
pub fn compare_attempts(a: &CourseResult, b: &CourseResult) -> Ordering {
    let gp_a = a.grade_point.unwrap_or(f64::NEG_INFINITY);
    let gp_b = b.grade_point.unwrap_or(f64::NEG_INFINITY);
    gp_a.total_cmp(&gp_b)
        .then_with(|| a.semester_id.cmp(&b.semester_id))
}

/// Group course attempts by code, in order of first appearance
fn attempts_by_code(semesters: &[SemesterSummary]) -> Vec<Vec<&CourseResult>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&CourseResult>> = Vec::new();

    for course in semesters.iter().flat_map(|s| s.courses.iter()) {
        match index.get(course.code.as_str()).copied() {
            Some(i) => groups[i].push(course),
            None => {
                index.insert(course.code.as_str(), groups.len());
                groups.push(vec![course]);
            }
        }
    }

    groups
}

/// Classify every course code into failed / low-CGPA / passed
pub fn classify_courses(semesters: &[SemesterSummary]) -> CourseClassification {
    let mut classification = CourseClassification::default();

    for attempts in attempts_by_code(semesters) {
        let latest = attempts.iter().copied().max_by_key(|c| c.semester_id);
        if let Some(latest) = latest.filter(|c| c.is_failed()) {
            classification.failed.push(latest.clone());
        }

        let best = attempts
            .iter()
            .copied()
            .filter(|c| !c.is_failed() && c.grade_point.is_some())
            .max_by(|a, b| compare_attempts(a, b));

        if let Some(best) = best {
            if best.grade_point.is_some_and(|gp| gp <= LOW_CGPA_THRESHOLD) {
                classification.low_cgpa.push(best.clone());
            }
            classification.passed.push(best.clone());
        }
    }

    classification
}
