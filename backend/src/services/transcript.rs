//! Transcript aggregation service
//!
//! Fetches the profile, the semester catalog and each semester's results in
//! sequence, then folds them into a [`TranscriptSummary`]. The profile and
//! catalog are hard dependencies; a failed semester fetch only drops that
//! semester.

use std::sync::Arc;

use shared::{
    semesters_from, starting_semester_id, CourseResult, Semester, StudentProfile,
    TranscriptAccumulator, TranscriptSummary,
};

use crate::error::{AppError, AppResult};
use crate::external::diu_results::{CourseResultResponse, ResultsApi};

/// Highest grade-point on the university scale
pub const MAX_GRADE_POINT: f64 = 4.0;

/// Builds transcripts from the upstream results API
#[derive(Clone)]
pub struct TranscriptService {
    api: Arc<dyn ResultsApi>,
}

impl TranscriptService {
    pub fn new(api: Arc<dyn ResultsApi>) -> Self {
        Self { api }
    }

    /// Check a caller-supplied defense grade-point
    pub fn validate_defense_cgpa(defense_cgpa: Option<f64>) -> AppResult<Option<f64>> {
        match defense_cgpa {
            Some(cgpa) if !cgpa.is_finite() || !(0.0..=MAX_GRADE_POINT).contains(&cgpa) => {
                Err(AppError::validation(
                    "defense_cgpa",
                    format!("defense_cgpa must be between 0.0 and {:.1}", MAX_GRADE_POINT),
                ))
            }
            other => Ok(other),
        }
    }

    /// Validate one semester's course records
    ///
    /// Returns the retained courses and the number rejected.
    pub fn retain_valid_courses(
        courses: Vec<CourseResultResponse>,
        semester_id: i64,
    ) -> (Vec<CourseResult>, usize) {
        let mut dropped = 0;
        let retained = courses
            .into_iter()
            .filter_map(|raw| match raw.into_course(semester_id) {
                Ok(course) => Some(course),
                Err(reason) => {
                    tracing::debug!(semester_id, %reason, "Dropping course record");
                    dropped += 1;
                    None
                }
            })
            .collect();
        (retained, dropped)
    }

    /// Compute the full transcript for a student
    #[tracing::instrument(skip(self), fields(student_id = %student_id))]
    pub async fn compute_transcript(
        &self,
        student_id: &str,
        defense_cgpa: Option<f64>,
    ) -> AppResult<TranscriptSummary> {
        let defense_cgpa = Self::validate_defense_cgpa(defense_cgpa)?;

        let info = self.api.student_info(student_id).await.map_err(|e| {
            tracing::error!(error = %e, "Student profile unavailable");
            e
        })?;
        let starting_semester = starting_semester_id(info.starting_semester(), student_id);
        let profile = StudentProfile::from(info);

        let catalog = self.api.semester_list().await.map_err(|e| {
            tracing::error!(error = %e, "Semester catalog unavailable");
            e
        })?;
        let catalog_len = catalog.len();
        let catalog: Vec<Semester> = catalog
            .into_iter()
            .filter_map(|entry| entry.into_semester())
            .collect();
        if catalog.len() < catalog_len {
            tracing::warn!(
                skipped = catalog_len - catalog.len(),
                "Skipping catalog entries without a numeric semester id"
            );
        }

        let semesters = semesters_from(catalog, starting_semester);
        tracing::debug!(
            starting_semester = ?starting_semester,
            semester_count = semesters.len(),
            "Fetching semester results"
        );

        let mut transcript = TranscriptAccumulator::new();
        let mut skipped_semesters = 0usize;

        for semester in &semesters {
            let raw = match self.api.semester_results(student_id, semester.id).await {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(semester_id = semester.id, error = %e, "Skipping semester");
                    skipped_semesters += 1;
                    continue;
                }
            };

            let (courses, dropped) = Self::retain_valid_courses(raw, semester.id);
            if dropped > 0 {
                tracing::warn!(semester_id = semester.id, dropped, "Dropped malformed course records");
            }

            transcript.add_semester(semester, courses);
        }

        if let Some(cgpa) = defense_cgpa {
            transcript.apply_defense(cgpa);
        }

        let summary = transcript.finish(profile);

        tracing::info!(
            semesters = summary.semesters.len(),
            skipped_semesters,
            total_credits = summary.total_credits,
            final_cgpa = ?summary.final_cgpa,
            defense_included = summary.defense_included,
            "Transcript computed"
        );

        Ok(summary)
    }
}
