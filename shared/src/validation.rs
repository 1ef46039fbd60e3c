//! Defensive parsing for upstream result data
//!
//! The results API returns loosely typed JSON: numbers arrive as numbers or
//! strings, fields go missing, and grade-points are `null` until a course is
//! evaluated. These helpers turn that into typed values or an explicit
//! rejection instead of failing the whole request.

use serde_json::Value;
use thiserror::Error;

/// Reason a course record was left out of the transcript
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CourseRejection {
    #[error("credit value is missing")]
    MissingCredit,

    #[error("credit value is not numeric: {0}")]
    InvalidCredit(String),

    #[error("grade-point value is missing")]
    MissingGradePoint,

    #[error("grade-point value is not numeric: {0}")]
    InvalidGradePoint(String),
}

/// Parse a finite number from a JSON number or numeric string
pub fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Parse an integer semester identifier from a JSON number or string
pub fn parse_semester_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Render a scalar JSON value as display text
///
/// Blank strings count as absent.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Credit value of a course; required
pub fn parse_credit(value: Option<&Value>) -> Result<f64, CourseRejection> {
    match value {
        None | Some(Value::Null) => Err(CourseRejection::MissingCredit),
        Some(v) => parse_number(v).ok_or_else(|| CourseRejection::InvalidCredit(v.to_string())),
    }
}

/// Grade-point value of a course
///
/// An explicit `null` means the course is not evaluated yet and is kept as
/// `None`. A missing field or a non-numeric value rejects the course.
pub fn parse_grade_point(value: Option<&Value>) -> Result<Option<f64>, CourseRejection> {
    match value {
        None => Err(CourseRejection::MissingGradePoint),
        Some(Value::Null) => Ok(None),
        Some(v) => parse_number(v)
            .map(Some)
            .ok_or_else(|| CourseRejection::InvalidGradePoint(v.to_string())),
    }
}

/// Lower bound for semester filtering
///
/// Uses the semester recorded on the profile, falling back to the numeric
/// prefix of the student id (`221-15-4567` starts in semester `221`).
/// `None` means every catalog semester is kept.
pub fn starting_semester_id(profile_semester: Option<&Value>, student_id: &str) -> Option<i64> {
    profile_semester.and_then(parse_semester_id).or_else(|| {
        student_id
            .split('-')
            .next()
            .and_then(|prefix| prefix.trim().parse::<i64>().ok())
    })
}
