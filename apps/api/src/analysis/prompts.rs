// Résumé analysis prompt template.
// The section headers below are the contract the parser depends on;
// change them together with `parser::MISSING_SKILLS_HEADER` and friends.

use crate::models::{JobRole, ResumeType};

/// Only this many characters of extracted résumé text reach the model.
pub const MAX_RESUME_CHARS: usize = 3000;

pub const ANALYSIS_TEMPERATURE: f32 = 0.7;
pub const ANALYSIS_MAX_TOKENS: u32 = 1000;

const FRESHER_FOCUS: &str = "focus on fundamentals and project skills for freshers";
const EXPERIENCED_FOCUS: &str =
    "focus on advanced skills and leadership for experienced professionals";

/// Analysis prompt template. `{resume_text}` is substituted last so résumé
/// content can never be mistaken for a placeholder.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert career advisor analyzing a resume.

Resume Type: {resume_type}
Target Job Role: {job_role}{company_context}

Resume Content:
{resume_text}

Analyze this resume and provide output in EXACTLY this format:

CURRENT SKILLS:
- [List 5-7 technical and soft skills found in the resume]

MISSING SKILLS:
- [List 4-6 important skills missing for this role{company_suffix}]
- Consider the resume type: {resume_focus}

IMPROVEMENT SUGGESTIONS:
- [3-4 specific, actionable tips to improve this resume]

Be specific and role-aware. Adjust expectations based on resume type."#;

/// Returns at most the first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Builds the analysis instruction. `company` is ignored when blank.
pub fn build_analysis_prompt(
    resume_text: &str,
    resume_type: ResumeType,
    job_role: JobRole,
    company: Option<&str>,
) -> String {
    let company = company.map(str::trim).filter(|c| !c.is_empty());
    let company_context = company
        .map(|c| format!("\nTarget Company: {c}"))
        .unwrap_or_default();
    let company_suffix = company.map(|c| format!(" at {c}")).unwrap_or_default();
    let resume_focus = match resume_type {
        ResumeType::Fresher => FRESHER_FOCUS,
        _ => EXPERIENCED_FOCUS,
    };

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_type}", resume_type.as_str())
        .replace("{job_role}", job_role.as_str())
        .replace("{company_context}", &company_context)
        .replace("{company_suffix}", &company_suffix)
        .replace("{resume_focus}", resume_focus)
        .replace("{resume_text}", truncate_chars(resume_text, MAX_RESUME_CHARS))
}
