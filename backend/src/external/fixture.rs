//! In-memory results API for tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::diu_results::{
    CourseResultResponse, ResultsApi, SemesterResponse, StudentInfoResponse,
};
use crate::error::{AppError, AppResult};

/// Canned upstream responses with optional failures
#[derive(Default)]
pub struct FixtureResultsApi {
    pub profile: Option<Value>,
    pub catalog: Option<Value>,
    pub results: HashMap<i64, Value>,
    pub failing_semesters: HashSet<i64>,
    pub profile_timeout: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FixtureResultsApi {
    pub fn new(profile: Value, catalog: Value) -> Self {
        Self {
            profile: Some(profile),
            catalog: Some(catalog),
            ..Default::default()
        }
    }

    pub fn with_results(mut self, semester_id: i64, courses: Value) -> Self {
        self.results.insert(semester_id, courses);
        self
    }

    pub fn with_failing_semester(mut self, semester_id: i64) -> Self {
        self.failing_semesters.insert(semester_id);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

/// A course entry in upstream shape
pub fn course(code: &str, grade: &str, credits: Value, point: Value) -> Value {
    json!({
        "courseTitle": format!("{} title", code),
        "customCourseId": code,
        "gradeLetter": grade,
        "totalCredit": credits,
        "pointEquivalent": point,
    })
}

/// A semester catalog entry in upstream shape
pub fn semester(id: i64, name: &str, year: i64) -> Value {
    json!({ "semesterId": id.to_string(), "semesterName": name, "semesterYear": year })
}

fn decode<T: for<'de> serde::Deserialize<'de>>(value: &Value) -> AppResult<T> {
    serde_json::from_value(value.clone())
        .map_err(|e| AppError::UpstreamUnavailable(format!("fixture decode: {}", e)))
}

#[async_trait]
impl ResultsApi for FixtureResultsApi {
    async fn student_info(&self, student_id: &str) -> AppResult<StudentInfoResponse> {
        self.record(format!("studentInfo:{}", student_id));
        if self.profile_timeout {
            return Err(AppError::UpstreamTimeout("studentInfo: timed out".into()));
        }
        match &self.profile {
            Some(profile) => decode(profile),
            None => Err(AppError::UpstreamUnavailable("studentInfo returned 500".into())),
        }
    }

    async fn semester_list(&self) -> AppResult<Vec<SemesterResponse>> {
        self.record("semesterList".to_string());
        match &self.catalog {
            Some(catalog) => decode(catalog),
            None => Err(AppError::UpstreamUnavailable("semesterList returned 500".into())),
        }
    }

    async fn semester_results(
        &self,
        student_id: &str,
        semester_id: i64,
    ) -> AppResult<Vec<CourseResultResponse>> {
        self.record(format!("result:{}:{}", student_id, semester_id));
        if self.failing_semesters.contains(&semester_id) {
            return Err(AppError::UpstreamUnavailable(format!(
                "result returned 503 for semester {}",
                semester_id
            )));
        }
        match self.results.get(&semester_id) {
            Some(courses) => decode(courses),
            None => Ok(Vec::new()),
        }
    }
}
