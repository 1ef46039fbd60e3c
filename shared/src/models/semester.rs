//! Semester catalog and per-semester summary models

use serde::{Deserialize, Serialize};

use crate::models::CourseResult;
use crate::types::weighted_average;

/// Semester catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Semester {
    pub id: i64,
    pub name: String,
    pub year: String,
}

impl Semester {
    pub fn new(id: i64, name: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            year: year.into(),
        }
    }

    /// Display label, e.g. "Fall 2023"
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.year).trim().to_string()
    }
}

/// Keep catalog semesters at or after the starting semester, in catalog order
pub fn semesters_from(catalog: Vec<Semester>, starting_semester_id: Option<i64>) -> Vec<Semester> {
    match starting_semester_id {
        Some(start) => catalog.into_iter().filter(|s| s.id >= start).collect(),
        None => catalog,
    }
}

/// Courses retained for one semester with semester-local totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SemesterSummary {
    pub semester: String,
    pub semester_id: i64,
    pub courses: Vec<CourseResult>,
    #[serde(rename = "semesterCGPA")]
    pub semester_cgpa: Option<f64>,
    pub total_credits: f64,
}

impl SemesterSummary {
    /// Summarize a semester's courses
    ///
    /// The semester CGPA only weighs courses that carry a grade-point.
    pub fn new(semester: &Semester, courses: Vec<CourseResult>) -> Self {
        let total_credits = courses.iter().map(|c| c.credits).sum();
        let graded_credits: f64 = courses
            .iter()
            .filter(|c| c.grade_point.is_some())
            .map(|c| c.credits)
            .sum();
        let weighted: f64 = courses.iter().map(CourseResult::weighted_points).sum();

        Self {
            semester: semester.label(),
            semester_id: semester.id,
            courses,
            semester_cgpa: weighted_average(weighted, graded_credits),
            total_credits,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, credits: f64, gp: Option<f64>) -> CourseResult {
        CourseResult::new("Course", code, "A", credits, gp, 221)
    }

    #[test]
    fn test_label() {
        assert_eq!(Semester::new(221, "Spring", "2022").label(), "Spring 2022");
        assert_eq!(Semester::new(221, "Spring", "").label(), "Spring");
    }

    #[test]
    fn test_semesters_from_keeps_order() {
        let catalog = vec![
            Semester::new(233, "Fall", "2023"),
            Semester::new(213, "Spring", "2021"),
            Semester::new(221, "Spring", "2022"),
            Semester::new(222, "Summer", "2022"),
        ];
        let kept: Vec<i64> = semesters_from(catalog, Some(221)).iter().map(|s| s.id).collect();
        assert_eq!(kept, vec![233, 221, 222]);
    }

    #[test]
    fn test_semesters_from_without_bound() {
        let catalog = vec![Semester::new(213, "Spring", "2021")];
        assert_eq!(semesters_from(catalog, None).len(), 1);
    }

    #[test]
    fn test_semester_cgpa_ignores_ungraded_courses() {
        let semester = Semester::new(221, "Spring", "2022");
        let summary = SemesterSummary::new(
            &semester,
            vec![course("CSE101", 3.0, Some(4.0)), course("CSE102", 3.0, None)],
        );
        assert_eq!(summary.total_credits, 6.0);
        assert_eq!(summary.semester_cgpa, Some(4.0));
    }

    #[test]
    fn test_semester_cgpa_none_without_graded_credit() {
        let semester = Semester::new(221, "Spring", "2022");
        let summary = SemesterSummary::new(&semester, vec![course("CSE102", 3.0, None)]);
        assert_eq!(summary.semester_cgpa, None);
    }
}
