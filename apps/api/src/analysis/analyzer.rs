//! Résumé analysis: orchestrates the analysis pipeline.
//!
//! Flow: extract_pdf_text → build_analysis_prompt → LLM complete →
//!       parse_analysis → build_resources → render_markdown.

use serde::Serialize;
use tracing::info;

use crate::analysis::parser::{parse_analysis, SkillsSource};
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_MAX_TOKENS, ANALYSIS_TEMPERATURE};
use crate::analysis::resources::{build_resources, render_markdown, LearningResource};
use crate::errors::AppError;
use crate::extraction::extract_pdf_text;
use crate::llm_client::{CompletionClient, CompletionRequest};
use crate::models::ResumeSubmission;

/// Everything the Resume Analysis tab displays.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    /// Raw model reply, shown as-is.
    pub analysis: String,
    pub missing_skills: Vec<String>,
    pub missing_skills_section_found: bool,
    pub skills_source: SkillsSource,
    pub resources: Vec<LearningResource>,
    pub resources_markdown: String,
}

/// Runs extraction and analysis for one submission.
pub async fn analyze_resume(
    submission: &ResumeSubmission,
    llm: &dyn CompletionClient,
) -> Result<ResumeAnalysis, AppError> {
    let resume_text = extract_pdf_text(submission.file.clone()).await?;

    let prompt = build_analysis_prompt(
        &resume_text,
        submission.resume_type,
        submission.job_role,
        submission.company(),
    );

    let analysis = llm
        .complete(CompletionRequest::new(
            prompt,
            ANALYSIS_TEMPERATURE,
            ANALYSIS_MAX_TOKENS,
        ))
        .await
        .map_err(|e| AppError::Llm(format!("Error analyzing resume: {e}")))?;

    Ok(summarize(analysis))
}

/// Derives skills and learning resources from a model reply.
pub fn summarize(analysis: String) -> ResumeAnalysis {
    let skills = parse_analysis(&analysis);
    let resources = build_resources(&skills.missing_skills);
    let resources_markdown = render_markdown(&resources);

    info!(
        missing_skills = skills.missing_skills.len(),
        section_found = skills.section_found,
        "resume analysis parsed"
    );

    ResumeAnalysis {
        analysis,
        missing_skills: skills.missing_skills,
        missing_skills_section_found: skills.section_found,
        skills_source: skills.source,
        resources,
        resources_markdown,
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::analysis::resources::NO_SKILLS_MESSAGE;
    use crate::llm_client::testing::ScriptedClient;
    use crate::models::{JobRole, ResumeType};

    #[test]
    fn test_summarize_builds_resources_from_missing_skills() {
        let reply = "CURRENT SKILLS:\n- Java\n\nMISSING SKILLS:\n- Docker (containerization)\n- Kubernetes\n\nIMPROVEMENT SUGGESTIONS:\n- Add metrics";
        let result = summarize(reply.to_string());
        assert_eq!(result.analysis, reply);
        assert_eq!(result.missing_skills.len(), 2);
        assert_eq!(result.resources[0].skill, "Docker");
        assert!(result.resources_markdown.contains("**Kubernetes**"));
        assert!(result.missing_skills_section_found);
    }

    #[test]
    fn test_summarize_without_section_reports_no_skills() {
        let result = summarize("Looks great overall!".to_string());
        assert!(result.missing_skills.is_empty());
        assert!(!result.missing_skills_section_found);
        assert_eq!(result.resources_markdown, NO_SKILLS_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreadable_pdf_never_reaches_llm() {
        let llm = ScriptedClient::with_replies(["unused"]);
        let submission = ResumeSubmission {
            file: Bytes::from_static(b"not a pdf"),
            resume_type: ResumeType::Fresher,
            job_role: JobRole::SoftwareEngineer,
            company: None,
        };
        let err = analyze_resume(&submission, &llm).await.unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
        assert!(llm.requests().is_empty());
    }
}
