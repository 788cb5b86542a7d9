use crate::education::EducationExtractor;
use crate::experience::ExperienceExtractor;
use crate::normalizer::Normalizer;
use crate::skills::SkillExtractor;
use log::debug;
use vitae_core::ParseResult;

/// The full extraction pipeline: normalizer feeds the skill extractor, while
/// education and experience run independently over the raw text. Stateless
/// between calls; every parse returns fresh entities.
pub struct ResumeParser {
    normalizer: Normalizer,
    skills: SkillExtractor,
    education: EducationExtractor,
    experience: ExperienceExtractor,
}

impl ResumeParser {
    /// Parser with the built-in stop words, taxonomy, and patterns.
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            skills: SkillExtractor::default(),
            education: EducationExtractor::new(),
            experience: ExperienceExtractor::new(),
        }
    }

    /// Parser with caller-supplied components (custom taxonomy or patterns).
    pub fn with_components(
        normalizer: Normalizer,
        skills: SkillExtractor,
        education: EducationExtractor,
        experience: ExperienceExtractor,
    ) -> Self {
        Self {
            normalizer,
            skills,
            education,
            experience,
        }
    }

    /// Parse resume text into structured entities. Empty or unmatchable text
    /// yields an empty result, never an error.
    pub fn parse(&self, text: &str) -> ParseResult {
        let lower = text.to_lowercase();
        let tokens = self.normalizer.token_set(text);

        let result = ParseResult {
            skills: self.skills.extract(&tokens, &lower),
            education: self.education.extract(text),
            experience: self.experience.extract(text),
        };
        debug!(
            "parsed {} chars: {} skills, {} education, {} experience",
            text.len(),
            result.skills.len(),
            result.education.len(),
            result.experience.len()
        );
        result
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}
