//! Common grading constants and numeric helpers

/// Letter grade the upstream API uses for a failed course
pub const FAILING_GRADE: &str = "F";

/// Grade text the upstream API reports while teaching evaluation is outstanding
pub const PENDING_EVALUATION_GRADE: &str = "Teaching evaluation is pending";

/// Credit value of the thesis/defense course
pub const DEFENSE_CREDITS: f64 = 6.0;

/// Grade-points at or below this value are reported as low CGPA
pub const LOW_CGPA_THRESHOLD: f64 = 2.5;

/// Placeholder for profile fields the upstream API leaves out
pub const NOT_PROVIDED: &str = "Not Provided";

/// Shift assumed when the upstream profile has none
pub const DEFAULT_SHIFT: &str = "Morning";

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Credit-weighted average rounded to two decimals, `None` for a zero denominator
pub fn weighted_average(weighted_sum: f64, credits: f64) -> Option<f64> {
    if credits > 0.0 {
        Some(round2(weighted_sum / credits))
    } else {
        None
    }
}

/// Whether a letter grade is the failing grade
pub fn is_failing_grade(grade: &str) -> bool {
    grade.trim() == FAILING_GRADE
}

/// Whether a grade text marks a pending teaching evaluation
pub fn is_pending_evaluation(grade: &str) -> bool {
    grade.trim() == PENDING_EVALUATION_GRADE
}
