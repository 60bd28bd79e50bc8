//! Resource Link Synthesizer: search links for each missing skill.
//!
//! Links are built from fixed templates only; nothing is fetched or validated.

use serde::Serialize;

pub const NO_SKILLS_MESSAGE: &str = "No missing skills identified.";
const RESOURCES_HEADING: &str = "### 📚 Learning Resources for Missing Skills";

const YOUTUBE_SEARCH: &str = "https://www.youtube.com/results?search_query=";
const GOOGLE_SEARCH: &str = "https://www.google.com/search?q=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningResource {
    pub skill: String,
    pub tutorial_url: String,
    pub course_url: String,
    pub project_url: String,
}

/// Drops any parenthetical qualifier: `"Docker (containerization)"` → `"Docker"`.
///
/// A skill that is nothing but a parenthetical keeps its inner text, so
/// `"(Cloud certification)"` → `"Cloud certification"`.
pub fn clean_skill_label(skill: &str) -> &str {
    let label = skill.split('(').next().unwrap_or_default().trim();
    if !label.is_empty() {
        return label;
    }
    skill
        .trim()
        .trim_start_matches('(')
        .split(')')
        .next()
        .unwrap_or_default()
        .trim()
}

fn search_terms(label: &str) -> String {
    label.replace(' ', "+")
}

impl LearningResource {
    pub fn for_skill(skill: &str) -> Self {
        let label = clean_skill_label(skill);
        let terms = search_terms(label);
        Self {
            skill: label.to_string(),
            tutorial_url: format!("{YOUTUBE_SEARCH}{terms}+tutorial"),
            course_url: format!("{GOOGLE_SEARCH}{terms}+beginner+course"),
            project_url: format!("{GOOGLE_SEARCH}{terms}+project+tutorial"),
        }
    }
}

/// One resource per skill, in order.
pub fn build_resources(skills: &[String]) -> Vec<LearningResource> {
    skills.iter().map(|s| LearningResource::for_skill(s)).collect()
}

/// Renders the Markdown block shown under the analysis.
pub fn render_markdown(resources: &[LearningResource]) -> String {
    if resources.is_empty() {
        return NO_SKILLS_MESSAGE.to_string();
    }

    let mut out = format!("{RESOURCES_HEADING}\n\n");
    for r in resources {
        out.push_str(&format!("**{}**\n", r.skill));
        out.push_str(&format!("- [YouTube Tutorials]({})\n", r.tutorial_url));
        out.push_str(&format!("- [Beginner Courses]({})\n", r.course_url));
        out.push_str(&format!("- [Project-Based Learning]({})\n\n", r.project_url));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthetical_qualifier_is_stripped() {
        let r = LearningResource::for_skill("Docker (containerization)");
        assert_eq!(r.skill, "Docker");
        assert!(r.tutorial_url.contains("Docker+tutorial"));
        assert!(r.course_url.contains("Docker+beginner+course"));
        assert!(r.project_url.contains("Docker+project+tutorial"));
    }

    #[test]
    fn test_spaces_become_plus() {
        let r = LearningResource::for_skill("System Design");
        assert_eq!(
            r.tutorial_url,
            "https://www.youtube.com/results?search_query=System+Design+tutorial"
        );
        assert_eq!(
            r.course_url,
            "https://www.google.com/search?q=System+Design+beginner+course"
        );
        assert_eq!(
            r.project_url,
            "https://www.google.com/search?q=System+Design+project+tutorial"
        );
    }

    #[test]
    fn test_empty_skill_list_renders_no_skills_message() {
        assert_eq!(render_markdown(&build_resources(&[])), NO_SKILLS_MESSAGE);
    }

    #[test]
    fn test_markdown_has_one_subsection_per_skill() {
        let skills = vec!["Docker (containerization)".to_string(), "AWS".to_string()];
        let markdown = render_markdown(&build_resources(&skills));
        assert!(markdown.starts_with(RESOURCES_HEADING));
        assert_eq!(markdown.matches("- [YouTube Tutorials]").count(), 2);
        let docker = markdown.find("**Docker**").unwrap();
        let aws = markdown.find("**AWS**").unwrap();
        assert!(docker < aws);
    }

    #[test]
    fn test_parenthetical_only_skill_keeps_inner_text() {
        let skills = vec!["(Cloud certification)".to_string()];
        let resources = build_resources(&skills);
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].skill, "Cloud certification");
        assert!(resources[0]
            .tutorial_url
            .ends_with("Cloud+certification+tutorial"));

        let markdown = render_markdown(&resources);
        assert_ne!(markdown, NO_SKILLS_MESSAGE);
        assert!(markdown.contains("**Cloud certification**"));
    }
}
