//! Vitae core domain types and errors.

mod error;
mod types;

pub use error::VitaeError;
pub use types::{
    Analysis, EducationEntry, ExperienceEntry, JobProfile, ParseResult, SkillCategory, SkillMatch,
};
