//! Axum route handlers for the Interview API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::interviewer::{
    continue_interview, start_interview, InterviewTurn, ANALYZE_FIRST_MESSAGE,
    START_FIRST_MESSAGE,
};
use crate::interview::session::InterviewPhase;
use crate::models::JobRole;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub job_role: JobRole,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub answer: String,
    pub job_role: Option<JobRole>,
}

#[derive(Debug, Serialize)]
pub struct InterviewTurnResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub turn: InterviewTurn,
}

#[derive(Debug, Serialize)]
pub struct InterviewStatusResponse {
    pub session_id: Uuid,
    pub phase: InterviewPhase,
    pub question_count: u32,
    pub max_questions: u32,
    pub job_role: Option<JobRole>,
    pub resume_analyzed: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/start
///
/// An unknown or missing session has never analyzed a résumé, so it fails the gate.
pub async fn handle_start(
    State(state): State<AppState>,
    payload: Result<Json<StartInterviewRequest>, JsonRejection>,
) -> Result<Json<InterviewTurnResponse>, AppError> {
    let Json(request) = payload?;
    let session = request
        .session_id
        .and_then(|id| state.sessions.get(id))
        .ok_or_else(|| AppError::Precondition(ANALYZE_FIRST_MESSAGE.to_string()))?;

    let mut session = session.lock().await;
    let turn = start_interview(&mut session, request.job_role, state.llm.as_ref()).await?;

    Ok(Json(InterviewTurnResponse {
        session_id: session.id,
        turn,
    }))
}

/// POST /api/v1/interview/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    payload: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<Json<InterviewTurnResponse>, AppError> {
    let Json(request) = payload?;
    let session = request
        .session_id
        .and_then(|id| state.sessions.get(id))
        .ok_or_else(|| AppError::Precondition(START_FIRST_MESSAGE.to_string()))?;

    let mut session = session.lock().await;
    let turn = continue_interview(
        &mut session,
        &request.answer,
        request.job_role,
        state.llm.as_ref(),
    )
    .await?;

    Ok(Json(InterviewTurnResponse {
        session_id: session.id,
        turn,
    }))
}

/// GET /api/v1/interview/:session_id
pub async fn handle_status(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<InterviewStatusResponse>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
    let session = session.lock().await;

    Ok(Json(InterviewStatusResponse {
        session_id,
        phase: session.phase(),
        question_count: session.question_count,
        max_questions: session.max_questions,
        job_role: session.job_role,
        resume_analyzed: session.resume_analyzed,
    }))
}
