//! Client for the university results API
//!
//! Three plain GET endpoints: the student profile, the semester catalog and
//! the course results of one student in one semester. Response bodies are
//! loosely typed, so the wire structs keep raw JSON values and conversion to
//! domain models goes through the shared validation helpers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use shared::{
    parse_credit, parse_grade_point, parse_semester_id, value_text, CourseRejection, CourseResult,
    Semester, StudentProfile, DEFAULT_SHIFT, NOT_PROVIDED,
};

use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};

/// Results API operations the transcript service depends on
#[async_trait]
pub trait ResultsApi: Send + Sync {
    /// Profile of one student
    async fn student_info(&self, student_id: &str) -> AppResult<StudentInfoResponse>;

    /// Full semester catalog, oldest first
    async fn semester_list(&self) -> AppResult<Vec<SemesterResponse>>;

    /// Course results of a student in one semester
    async fn semester_results(
        &self,
        student_id: &str,
        semester_id: i64,
    ) -> AppResult<Vec<CourseResultResponse>>;
}

/// Keeps an explicit `null` distinguishable from a missing field
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// `/result/studentInfo` response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfoResponse {
    pub student_id: Option<Value>,
    pub student_name: Option<Value>,
    pub program_name: Option<Value>,
    pub department_name: Option<Value>,
    pub campus_name: Option<Value>,
    pub shift_name: Option<Value>,
    pub faculty_name: Option<Value>,
    pub semester_id: Option<Value>,
    pub semester_name: Option<Value>,
    pub semester_year: Option<Value>,
    pub batch_no: Option<Value>,
}

/// `/result/semesterList` entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterResponse {
    pub semester_id: Option<Value>,
    pub semester_name: Option<Value>,
    pub semester_year: Option<Value>,
}

/// `/result` entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResultResponse {
    pub course_title: Option<Value>,
    pub custom_course_id: Option<Value>,
    pub grade_letter: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub total_credit: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub point_equivalent: Option<Value>,
}

fn text_or(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(value_text)
        .unwrap_or_else(|| default.to_string())
}

impl StudentInfoResponse {
    /// Semester the profile records as the student's first
    pub fn starting_semester(&self) -> Option<&Value> {
        self.semester_id.as_ref()
    }
}

impl From<StudentInfoResponse> for StudentProfile {
    fn from(r: StudentInfoResponse) -> Self {
        let semester = [r.semester_name.as_ref(), r.semester_year.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(value_text)
            .collect::<Vec<_>>()
            .join(" ");

        StudentProfile {
            id: text_or(r.student_id.as_ref(), NOT_PROVIDED),
            name: text_or(r.student_name.as_ref(), NOT_PROVIDED),
            program: text_or(r.program_name.as_ref(), NOT_PROVIDED),
            department: text_or(r.department_name.as_ref(), NOT_PROVIDED),
            campus: text_or(r.campus_name.as_ref(), NOT_PROVIDED),
            shift: text_or(r.shift_name.as_ref(), DEFAULT_SHIFT),
            faculty: text_or(r.faculty_name.as_ref(), NOT_PROVIDED),
            semester: if semester.is_empty() {
                NOT_PROVIDED.to_string()
            } else {
                semester
            },
            batch: text_or(r.batch_no.as_ref(), NOT_PROVIDED),
        }
    }
}

impl SemesterResponse {
    /// Catalog entry as a domain semester; `None` when the id is not an integer
    pub fn into_semester(self) -> Option<Semester> {
        let id = self.semester_id.as_ref().and_then(parse_semester_id)?;
        Some(Semester::new(
            id,
            text_or(self.semester_name.as_ref(), ""),
            text_or(self.semester_year.as_ref(), ""),
        ))
    }
}

impl CourseResultResponse {
    /// Validate credits and grade-point and build the course record
    pub fn into_course(self, semester_id: i64) -> Result<CourseResult, CourseRejection> {
        let credits = parse_credit(self.total_credit.as_ref())?;
        let grade_point = parse_grade_point(self.point_equivalent.as_ref())?;

        Ok(CourseResult::new(
            text_or(self.course_title.as_ref(), ""),
            text_or(self.custom_course_id.as_ref(), ""),
            text_or(self.grade_letter.as_ref(), ""),
            credits,
            grade_point,
            semester_id,
        ))
    }
}

/// reqwest-backed results API client
#[derive(Clone)]
pub struct DiuResultsClient {
    client: Client,
    base_url: String,
}

impl DiuResultsClient {
    /// Create a client with the configured base URL and timeout
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T>(&self, context: &str, path: &str, query: &[(&str, String)]) -> AppResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::from_upstream(context, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "{} returned {}: {}",
                context, status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::from_upstream(context, e))
    }
}

#[async_trait]
impl ResultsApi for DiuResultsClient {
    async fn student_info(&self, student_id: &str) -> AppResult<StudentInfoResponse> {
        self.get_json(
            "studentInfo",
            "/result/studentInfo",
            &[("studentId", student_id.to_string())],
        )
        .await
    }

    async fn semester_list(&self) -> AppResult<Vec<SemesterResponse>> {
        self.get_json("semesterList", "/result/semesterList", &[]).await
    }

    async fn semester_results(
        &self,
        student_id: &str,
        semester_id: i64,
    ) -> AppResult<Vec<CourseResultResponse>> {
        self.get_json(
            "result",
            "/result",
            &[
                ("studentId", student_id.to_string()),
                ("semesterId", semester_id.to_string()),
                ("grecaptcha", String::new()),
            ],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_defaults() {
        let info: StudentInfoResponse = serde_json::from_value(json!({
            "studentId": "221-15-4567",
            "studentName": "Test Student"
        }))
        .unwrap();
        let profile = StudentProfile::from(info);
        assert_eq!(profile.id, "221-15-4567");
        assert_eq!(profile.name, "Test Student");
        assert_eq!(profile.program, "Not Provided");
        assert_eq!(profile.shift, "Morning");
        assert_eq!(profile.semester, "Not Provided");
    }

    #[test]
    fn test_profile_semester_label_and_batch() {
        let info: StudentInfoResponse = serde_json::from_value(json!({
            "semesterId": "221",
            "semesterName": "Spring",
            "semesterYear": 2022,
            "batchNo": 57,
            "shiftName": "Evening"
        }))
        .unwrap();
        assert_eq!(info.starting_semester(), Some(&json!("221")));
        let profile = StudentProfile::from(info);
        assert_eq!(profile.semester, "Spring 2022");
        assert_eq!(profile.batch, "57");
        assert_eq!(profile.shift, "Evening");
    }

    #[test]
    fn test_semester_conversion() {
        let entry: SemesterResponse = serde_json::from_value(json!({
            "semesterId": "233",
            "semesterName": "Fall",
            "semesterYear": 2023
        }))
        .unwrap();
        let semester = entry.into_semester().unwrap();
        assert_eq!(semester.id, 233);
        assert_eq!(semester.label(), "Fall 2023");

        let bad: SemesterResponse =
            serde_json::from_value(json!({ "semesterId": "n/a" })).unwrap();
        assert!(bad.into_semester().is_none());
    }

    #[test]
    fn test_course_conversion() {
        let entry: CourseResultResponse = serde_json::from_value(json!({
            "courseTitle": "Data Structures",
            "customCourseId": "CSE134",
            "gradeLetter": "A+",
            "totalCredit": 3,
            "pointEquivalent": "4.00"
        }))
        .unwrap();
        let course = entry.into_course(221).unwrap();
        assert_eq!(course.code, "CSE134");
        assert_eq!(course.credits, 3.0);
        assert_eq!(course.grade_point, Some(4.0));
        assert_eq!(course.semester_id, 221);
    }

    #[test]
    fn test_course_null_grade_point_is_kept() {
        let entry: CourseResultResponse = serde_json::from_value(json!({
            "customCourseId": "CSE134",
            "gradeLetter": "Teaching evaluation is pending",
            "totalCredit": 3.0,
            "pointEquivalent": null
        }))
        .unwrap();
        let course = entry.into_course(221).unwrap();
        assert_eq!(course.grade_point, None);
        assert!(course.is_pending_evaluation());
    }

    #[test]
    fn test_course_rejections() {
        let missing_gp: CourseResultResponse = serde_json::from_value(json!({
            "customCourseId": "CSE134",
            "totalCredit": 3.0
        }))
        .unwrap();
        assert_eq!(
            missing_gp.into_course(221),
            Err(CourseRejection::MissingGradePoint)
        );

        let bad_credit: CourseResultResponse = serde_json::from_value(json!({
            "customCourseId": "CSE134",
            "totalCredit": "N/A",
            "pointEquivalent": 3.0
        }))
        .unwrap();
        assert!(matches!(
            bad_credit.into_course(221),
            Err(CourseRejection::InvalidCredit(_))
        ));
    }

    #[test]
    fn test_client_trims_base_url() {
        let client = DiuResultsClient::new(&UpstreamConfig {
            base_url: "http://localhost:8006/".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:8006");
    }
}
