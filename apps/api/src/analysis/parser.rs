//! Analysis Parser: pulls the missing-skills bullets out of the model's reply.
//!
//! The reply is expected to follow the section layout requested by
//! `prompts::ANALYSIS_PROMPT_TEMPLATE`, which asks for plain sections, so the
//! section scan is the normal path: the text is scanned line by line between
//! the MISSING SKILLS and IMPROVEMENT SUGGESTIONS headers.
//!
//! The template never asks for JSON. A reply that nonetheless arrives as a
//! JSON object with a `missing_skills` array (some models fall back to that)
//! is accepted as a compatibility path and reported as
//! `SkillsSource::Structured`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::strip_json_fences;

pub const MISSING_SKILLS_HEADER: &str = "MISSING SKILLS:";
pub const IMPROVEMENT_HEADER: &str = "IMPROVEMENT SUGGESTIONS:";

/// Where the skills list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillsSource {
    Structured,
    Sections,
}

/// Missing skills plus whether the reply actually contained a skills section.
/// `section_found == false` means the model ignored the requested layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillsAnalysis {
    pub missing_skills: Vec<String>,
    pub section_found: bool,
    pub source: SkillsSource,
}

#[derive(Debug, Deserialize)]
struct StructuredReply {
    missing_skills: Vec<String>,
}

/// Scans `analysis` for bulleted lines strictly between the two headers.
///
/// Leading dashes and surrounding whitespace are stripped; bullets that are
/// empty afterwards are skipped. No header means an empty list.
pub fn extract_missing_skills(analysis: &str) -> Vec<String> {
    let mut skills = Vec::new();
    let mut capturing = false;

    for line in analysis.lines() {
        if line.contains(MISSING_SKILLS_HEADER) {
            capturing = true;
            continue;
        }
        if line.contains(IMPROVEMENT_HEADER) {
            break;
        }
        if !capturing {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.starts_with('-') {
            let skill = trimmed.trim_start_matches('-').trim();
            if !skill.is_empty() {
                skills.push(skill.to_string());
            }
        }
    }

    skills
}

fn has_missing_skills_section(analysis: &str) -> bool {
    analysis
        .lines()
        .any(|line| line.contains(MISSING_SKILLS_HEADER))
}

/// Parses the reply, preferring a structured JSON payload and falling back
/// to the header scan.
pub fn parse_analysis(analysis: &str) -> SkillsAnalysis {
    if let Some(structured) = parse_structured(analysis) {
        return structured;
    }

    let section_found = has_missing_skills_section(analysis);
    if !section_found {
        warn!("analysis reply has no '{MISSING_SKILLS_HEADER}' section");
    }
    SkillsAnalysis {
        missing_skills: extract_missing_skills(analysis),
        section_found,
        source: SkillsSource::Sections,
    }
}

fn parse_structured(analysis: &str) -> Option<SkillsAnalysis> {
    let body = strip_json_fences(analysis);
    if !body.starts_with('{') {
        return None;
    }
    let reply: StructuredReply = serde_json::from_str(body).ok()?;
    Some(SkillsAnalysis {
        missing_skills: reply
            .missing_skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        section_found: true,
        source: SkillsSource::Structured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ANALYSIS: &str = "\
CURRENT SKILLS:
- Python
- Communication

MISSING SKILLS:
- Docker (containerization)
  -  Kubernetes
- System Design
not a bullet
--- CI/CD

IMPROVEMENT SUGGESTIONS:
- Quantify achievements
- Add a GitHub link";

    #[test]
    fn test_extracts_bullets_between_headers_in_order() {
        assert_eq!(
            extract_missing_skills(SAMPLE_ANALYSIS),
            vec!["Docker (containerization)", "Kubernetes", "System Design", "CI/CD"]
        );
    }

    #[test]
    fn test_no_missing_skills_header_yields_empty() {
        let text = "CURRENT SKILLS:\n- Python\nIMPROVEMENT SUGGESTIONS:\n- Tip";
        assert!(extract_missing_skills(text).is_empty());
    }

    #[test]
    fn test_header_casing_must_match() {
        let text = "Missing Skills:\n- Docker\n";
        assert!(extract_missing_skills(text).is_empty());
    }

    #[test]
    fn test_section_without_end_header_runs_to_end() {
        let text = "**MISSING SKILLS:**\n- Rust\n- Go";
        assert_eq!(extract_missing_skills(text), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_improvement_header_before_missing_stops_scan() {
        let text = "IMPROVEMENT SUGGESTIONS:\n- Tip\nMISSING SKILLS:\n- Docker";
        assert!(extract_missing_skills(text).is_empty());
    }

    #[test]
    fn test_empty_bullets_are_skipped() {
        let text = "MISSING SKILLS:\n-\n- \n- SQL\nIMPROVEMENT SUGGESTIONS:";
        assert_eq!(extract_missing_skills(text), vec!["SQL"]);
    }

    #[test]
    fn test_parse_analysis_flags_missing_section() {
        let parsed = parse_analysis("The model rambled without headers.");
        assert!(!parsed.section_found);
        assert!(parsed.missing_skills.is_empty());
        assert_eq!(parsed.source, SkillsSource::Sections);
    }

    #[test]
    fn test_parse_analysis_reports_empty_but_present_section() {
        let parsed = parse_analysis("MISSING SKILLS:\nnone\nIMPROVEMENT SUGGESTIONS:");
        assert!(parsed.section_found);
        assert!(parsed.missing_skills.is_empty());
    }

    #[test]
    fn test_parse_analysis_prefers_structured_reply() {
        let reply = "```json\n{\"missing_skills\": [\" Docker \", \"\", \"AWS\"]}\n```";
        let parsed = parse_analysis(reply);
        assert_eq!(parsed.source, SkillsSource::Structured);
        assert_eq!(parsed.missing_skills, vec!["Docker", "AWS"]);
        assert!(parsed.section_found);
    }

    #[test]
    fn test_malformed_json_falls_back_to_sections() {
        let parsed = parse_analysis("{ not json\nMISSING SKILLS:\n- Git");
        assert_eq!(parsed.source, SkillsSource::Sections);
        assert_eq!(parsed.missing_skills, vec!["Git"]);
    }
}
