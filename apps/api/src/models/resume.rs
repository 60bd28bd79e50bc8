use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Caller-supplied résumé category. Only `Fresher` changes the prompt framing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeType {
    #[default]
    Fresher,
    Experienced,
    Technical,
    #[serde(rename = "Non-Technical")]
    NonTechnical,
}

impl ResumeType {
    pub const ALL: [ResumeType; 4] = [
        ResumeType::Fresher,
        ResumeType::Experienced,
        ResumeType::Technical,
        ResumeType::NonTechnical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeType::Fresher => "Fresher",
            ResumeType::Experienced => "Experienced",
            ResumeType::Technical => "Technical",
            ResumeType::NonTechnical => "Non-Technical",
        }
    }
}

/// Target role offered by both the analysis and interview tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobRole {
    #[default]
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "Full Stack Developer")]
    FullStackDeveloper,
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "Business Analyst")]
    BusinessAnalyst,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
    #[serde(rename = "ML Engineer")]
    MlEngineer,
}

impl JobRole {
    pub const ALL: [JobRole; 10] = [
        JobRole::SoftwareEngineer,
        JobRole::DataScientist,
        JobRole::FullStackDeveloper,
        JobRole::FrontendDeveloper,
        JobRole::BackendDeveloper,
        JobRole::DevOpsEngineer,
        JobRole::ProductManager,
        JobRole::BusinessAnalyst,
        JobRole::UiUxDesigner,
        JobRole::MlEngineer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobRole::SoftwareEngineer => "Software Engineer",
            JobRole::DataScientist => "Data Scientist",
            JobRole::FullStackDeveloper => "Full Stack Developer",
            JobRole::FrontendDeveloper => "Frontend Developer",
            JobRole::BackendDeveloper => "Backend Developer",
            JobRole::DevOpsEngineer => "DevOps Engineer",
            JobRole::ProductManager => "Product Manager",
            JobRole::BusinessAnalyst => "Business Analyst",
            JobRole::UiUxDesigner => "UI/UX Designer",
            JobRole::MlEngineer => "ML Engineer",
        }
    }
}

impl fmt::Display for ResumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for JobRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a form field names an option that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option '{}'", self.0)
    }
}

impl FromStr for ResumeType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ResumeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl FromStr for JobRole {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        JobRole::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// One analysis request, assembled from the multipart upload. Not persisted.
#[derive(Debug, Clone)]
pub struct ResumeSubmission {
    pub file: Bytes,
    pub resume_type: ResumeType,
    pub job_role: JobRole,
    pub company: Option<String>,
}

impl ResumeSubmission {
    /// The target company, if one was given that is non-empty after trimming.
    pub fn company(&self) -> Option<&str> {
        self.company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_type_serde_uses_display_names() {
        let json = serde_json::to_string(&ResumeType::NonTechnical).unwrap();
        assert_eq!(json, r#""Non-Technical""#);
        let parsed: ResumeType = serde_json::from_str(r#""Experienced""#).unwrap();
        assert_eq!(parsed, ResumeType::Experienced);
    }

    #[test]
    fn test_job_role_serde_uses_display_names() {
        let parsed: JobRole = serde_json::from_str(r#""UI/UX Designer""#).unwrap();
        assert_eq!(parsed, JobRole::UiUxDesigner);
        assert_eq!(
            serde_json::to_string(&JobRole::MlEngineer).unwrap(),
            r#""ML Engineer""#
        );
    }

    #[test]
    fn test_from_str_round_trips_every_option() {
        for role in JobRole::ALL {
            assert_eq!(role.as_str().parse::<JobRole>().unwrap(), role);
        }
        for resume_type in ResumeType::ALL {
            assert_eq!(
                resume_type.as_str().parse::<ResumeType>().unwrap(),
                resume_type
            );
        }
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = "Astronaut".parse::<JobRole>().unwrap_err();
        assert_eq!(err, UnknownOption("Astronaut".to_string()));
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        assert_eq!(ResumeType::default(), ResumeType::Fresher);
        assert_eq!(JobRole::default(), JobRole::SoftwareEngineer);
    }

    #[test]
    fn test_blank_company_is_ignored() {
        let submission = ResumeSubmission {
            file: Bytes::new(),
            resume_type: ResumeType::Fresher,
            job_role: JobRole::SoftwareEngineer,
            company: Some("   ".to_string()),
        };
        assert_eq!(submission.company(), None);

        let submission = ResumeSubmission {
            company: Some("  Google ".to_string()),
            ..submission
        };
        assert_eq!(submission.company(), Some("Google"));
    }
}
