//! Interview turns: a strictly linear question counter driven by the LLM.
//!
//! NotStarted (count = 0) → InProgress (0 < count < max) → Complete (count ≥ max).
//! The interview ends once `max_questions` questions have been asked: the
//! answer to the last question is acknowledged with the completion message
//! and no further request is made.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::interview::prompts::{
    build_first_question_prompt, build_follow_up_prompt, FIRST_QUESTION_MAX_TOKENS,
    FOLLOW_UP_MAX_TOKENS, QUESTION_TEMPERATURE,
};
use crate::interview::session::{InterviewPhase, InterviewSession};
use crate::llm_client::{CompletionClient, CompletionRequest};
use crate::models::JobRole;

pub const ANALYZE_FIRST_MESSAGE: &str =
    "Please analyze your resume first in the Resume Analysis tab.";
pub const START_FIRST_MESSAGE: &str = "Please click 'Start Interview' first.";
pub const EMPTY_ANSWER_MESSAGE: &str = "Please provide an answer to continue.";
pub const COMPLETE_MESSAGE: &str =
    "Interview complete! Thank you for your time. Analyze another resume or start a new interview.";

/// Result of one interview action, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewTurn {
    pub question_number: u32,
    pub max_questions: u32,
    pub phase: InterviewPhase,
    pub message: String,
}

impl InterviewTurn {
    fn from_session(session: &InterviewSession, message: String) -> Self {
        Self {
            question_number: session.question_count,
            max_questions: session.max_questions,
            phase: session.phase(),
            message,
        }
    }
}

/// Resets the session and asks the first question.
///
/// Fails without touching the session if no résumé has been analyzed.
/// If the completion call fails the count stays at zero.
pub async fn start_interview(
    session: &mut InterviewSession,
    job_role: JobRole,
    llm: &dyn CompletionClient,
) -> Result<InterviewTurn, AppError> {
    if !session.resume_analyzed {
        return Err(AppError::Precondition(ANALYZE_FIRST_MESSAGE.to_string()));
    }

    session.question_count = 0;
    session.job_role = Some(job_role);
    session.touch();

    let question = llm
        .complete(CompletionRequest::new(
            build_first_question_prompt(job_role),
            QUESTION_TEMPERATURE,
            FIRST_QUESTION_MAX_TOKENS,
        ))
        .await
        .map_err(|e| AppError::Llm(format!("Error: {e}")))?;

    session.question_count = 1;
    info!(session_id = %session.id, job_role = %job_role, "interview started");

    Ok(InterviewTurn::from_session(
        session,
        format!("**Question 1:**\n{question}"),
    ))
}

/// Submits an answer and asks the next question with feedback.
///
/// `job_role` overrides the role the interview was started with.
pub async fn continue_interview(
    session: &mut InterviewSession,
    answer: &str,
    job_role: Option<JobRole>,
    llm: &dyn CompletionClient,
) -> Result<InterviewTurn, AppError> {
    if session.phase() == InterviewPhase::NotStarted {
        return Err(AppError::Precondition(START_FIRST_MESSAGE.to_string()));
    }
    if answer.trim().is_empty() {
        return Err(AppError::Precondition(EMPTY_ANSWER_MESSAGE.to_string()));
    }
    if session.phase() == InterviewPhase::Complete {
        return Ok(InterviewTurn::from_session(
            session,
            COMPLETE_MESSAGE.to_string(),
        ));
    }

    let job_role = job_role.or(session.job_role).unwrap_or_default();
    session.touch();

    let reply = llm
        .complete(CompletionRequest::new(
            build_follow_up_prompt(job_role, answer),
            QUESTION_TEMPERATURE,
            FOLLOW_UP_MAX_TOKENS,
        ))
        .await
        .map_err(|e| AppError::Llm(format!("Error: {e}")))?;

    session.question_count += 1;
    info!(
        session_id = %session.id,
        question = session.question_count,
        "interview advanced"
    );

    Ok(InterviewTurn::from_session(
        session,
        format!("**Question {}:**\n\n{reply}", session.question_count),
    ))
}
