use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to a matched skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft",
            SkillCategory::Domain => "Domain",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A taxonomy skill found in the resume text.
///
/// `relevance_score` is 0 until a weighted scoring pass runs:
/// 3 = matches a required skill, 2 = matches a preferred skill, 1 = neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub name: String,
    pub category: SkillCategory,
    pub relevance_score: u8,
}

impl SkillMatch {
    pub const RELEVANCE_UNSCORED: u8 = 0;
    pub const RELEVANCE_LOW: u8 = 1;
    pub const RELEVANCE_PREFERRED: u8 = 2;
    pub const RELEVANCE_REQUIRED: u8 = 3;

    pub fn new(name: impl Into<String>, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            category,
            relevance_score: Self::RELEVANCE_UNSCORED,
        }
    }
}

/// One education record per institution-pattern match.
///
/// All string fields are verbatim substrings of the source text. `field_of_study`
/// is never populated by any extractor; it stays in the schema so persistence
/// consumers see a stable shape. Duplicate entries are possible when multiple
/// patterns match the same institution and are intentionally not deduplicated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<f64>,
}

/// One experience record per job-title-pattern match.
///
/// `location` is never populated (kept for schema stability). `description` is
/// a fixed-size text window around the title, not a sentence. `responsibilities`
/// is a `"; "`-joined list of bullet fragments, empty when none were found.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub responsibilities: String,
}

/// A job requirement profile used for weighted scoring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobProfile {
    pub title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
}

impl JobProfile {
    /// Build a profile from comma-joined skill lists, trimming whitespace and
    /// dropping empty fragments.
    pub fn from_comma_lists(
        title: impl Into<String>,
        company: impl Into<String>,
        required: &str,
        preferred: &str,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            required_skills: split_skill_list(required),
            preferred_skills: split_skill_list(preferred),
        }
    }
}

fn split_skill_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Everything extracted from one resume. Fresh per parse; the only mutation
/// after construction is the relevance pass performed by the scoring engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParseResult {
    pub skills: Vec<SkillMatch>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.education.is_empty() && self.experience.is_empty()
    }
}

/// A scored parse, the aggregate handed to rendering and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub result: ParseResult,
    /// ATS compatibility score in [0, 100]. Never NaN.
    pub ats_score: f64,
}
