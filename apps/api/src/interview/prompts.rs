// Interview prompt templates.

use crate::models::JobRole;

pub const QUESTION_TEMPERATURE: f32 = 0.8;
pub const FIRST_QUESTION_MAX_TOKENS: u32 = 150;
pub const FOLLOW_UP_MAX_TOKENS: u32 = 200;

pub const FIRST_QUESTION_TEMPLATE: &str = r#"You are a professional interviewer conducting an interview for a {job_role} position.

Ask ONE interview question (technical or behavioral). Keep it concise and relevant to the role.
Do not provide any introduction, just ask the question directly."#;

pub const FOLLOW_UP_TEMPLATE: &str = r#"You are interviewing a candidate for {job_role}.

Their answer to the previous question:
"{answer}"

First, provide 2-3 sentences of constructive feedback on their answer (max 60 words).
Then ask the next interview question (technical or behavioral).

Format:
Feedback: [your feedback]

Next Question: [your question]"#;

pub fn build_first_question_prompt(job_role: JobRole) -> String {
    FIRST_QUESTION_TEMPLATE.replace("{job_role}", job_role.as_str())
}

/// The answer is substituted last so its text is never treated as a placeholder.
pub fn build_follow_up_prompt(job_role: JobRole, answer: &str) -> String {
    FOLLOW_UP_TEMPLATE
        .replace("{job_role}", job_role.as_str())
        .replace("{answer}", answer)
}
