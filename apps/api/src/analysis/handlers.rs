//! Axum route handlers for the Resume Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::{analyze_resume, ResumeAnalysis};
use crate::errors::AppError;
use crate::models::{JobRole, ResumeSubmission, ResumeType};
use crate::state::AppState;

pub const MISSING_UPLOAD_MESSAGE: &str = "Please upload a resume PDF file.";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub session_id: Uuid,
    pub resume_type: ResumeType,
    pub job_role: JobRole,
    pub company: Option<String>,
    #[serde(flatten)]
    pub result: ResumeAnalysis,
}

/// Form fields collected from the multipart body.
#[derive(Debug, Default)]
struct AnalyzeForm {
    file: Option<Bytes>,
    resume_type: ResumeType,
    job_role: JobRole,
    company: Option<String>,
    session_id: Option<Uuid>,
}

fn bad_multipart(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {e}"))
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                if let Some(file_name) = field.file_name() {
                    if !file_name.is_empty() && !file_name.to_lowercase().ends_with(".pdf") {
                        return Err(AppError::Validation(
                            "Only PDF files are supported.".to_string(),
                        ));
                    }
                }
                let data = field.bytes().await.map_err(bad_multipart)?;
                if !data.is_empty() {
                    form.file = Some(data);
                }
            }
            "resume_type" => {
                let value = field.text().await.map_err(bad_multipart)?;
                form.resume_type = value
                    .parse()
                    .map_err(|e| AppError::Validation(format!("resume_type: {e}")))?;
            }
            "job_role" => {
                let value = field.text().await.map_err(bad_multipart)?;
                form.job_role = value
                    .parse()
                    .map_err(|e| AppError::Validation(format!("job_role: {e}")))?;
            }
            "company" => {
                form.company = Some(field.text().await.map_err(bad_multipart)?);
            }
            "session_id" => {
                let value = field.text().await.map_err(bad_multipart)?;
                if !value.trim().is_empty() {
                    form.session_id = Some(value.trim().parse().map_err(|_| {
                        AppError::Validation("session_id must be a UUID".to_string())
                    })?);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// POST /api/v1/resume/analyze
///
/// Multipart fields: `resume` (PDF), `resume_type`, `job_role`, `company`,
/// `session_id`. A successful analysis opens the interview gate for the
/// returned session.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_form(multipart).await?;
    let file = form
        .file
        .ok_or_else(|| AppError::Validation(MISSING_UPLOAD_MESSAGE.to_string()))?;

    let submission = ResumeSubmission {
        file,
        resume_type: form.resume_type,
        job_role: form.job_role,
        company: form.company,
    };

    let result = analyze_resume(&submission, state.llm.as_ref()).await?;

    let (session_id, session) = state.sessions.get_or_create(form.session_id);
    session.lock().await.mark_analyzed(submission.job_role);
    info!(%session_id, job_role = %submission.job_role, "resume analyzed");

    Ok(Json(AnalyzeResponse {
        session_id,
        resume_type: submission.resume_type,
        job_role: submission.job_role,
        company: submission.company().map(str::to_string),
        result,
    }))
}
