use axum::Json;
use serde_json::{json, Value};

use crate::interview::session::MAX_QUESTIONS;
use crate::models::{JobRole, ResumeType};

/// GET /api/v1/options
/// Choices for the résumé-type and job-role selectors.
pub async fn options_handler() -> Json<Value> {
    Json(json!({
        "resume_types": ResumeType::ALL,
        "job_roles": JobRole::ALL,
        "default_resume_type": ResumeType::default(),
        "default_job_role": JobRole::default(),
        "max_questions": MAX_QUESTIONS
    }))
}
