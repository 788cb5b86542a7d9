use regex::Regex;
use vitae_core::{SkillCategory, VitaeError};

/// Canonical skill names in taxonomy order. Output order follows this list.
const SKILL_NAMES: &[&str] = &[
    "Python",
    "Java",
    "Javascript",
    "HTML",
    "CSS",
    "SQL",
    "NoSQL",
    "React",
    "Angular",
    "Vue",
    "Node",
    "Express",
    "Django",
    "Flask",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Git",
    "Agile",
    "Scrum",
    "Machine Learning",
    "Data Analysis",
    "Data Science",
    "TensorFlow",
    "PyTorch",
    "NLP",
    "Computer Vision",
    "Communication",
    "Leadership",
    "Teamwork",
    "Problem Solving",
    "Critical Thinking",
    "Time Management",
    "Adaptability",
];

const SOFT_SKILLS: &[&str] = &[
    "Communication",
    "Leadership",
    "Teamwork",
    "Problem Solving",
    "Critical Thinking",
    "Time Management",
    "Adaptability",
];

const DOMAIN_SKILLS: &[&str] = &[
    "Machine Learning",
    "Data Analysis",
    "Data Science",
    "TensorFlow",
    "PyTorch",
    "NLP",
    "Computer Vision",
    "Agile",
    "Scrum",
];

/// One taxonomy entry: canonical display name, its lowercase form (every
/// comparison runs against lowercase on both sides), category, and a
/// precompiled whole-word matcher.
pub(crate) struct SkillEntry {
    pub(crate) name: String,
    pub(crate) lower: String,
    pub(crate) category: SkillCategory,
    pub(crate) word_re: Regex,
}

/// The fixed skill taxonomy: an ordered list of canonical names partitioned
/// into technical / soft / domain sets.
///
/// Entries are lowercased once at construction so membership and whole-word
/// tests never compare mixed case against lowercased text. Soft membership is
/// checked before domain, and Technical is the fallback for everything else.
pub struct SkillTaxonomy {
    entries: Vec<SkillEntry>,
}

impl SkillTaxonomy {
    /// Build a taxonomy from an ordered name list plus soft/domain sets.
    /// Names absent from both sets are Technical.
    pub fn new<S: AsRef<str>>(ordered: &[S], soft: &[S], domain: &[S]) -> Result<Self, VitaeError> {
        let soft: Vec<String> = soft.iter().map(|s| s.as_ref().to_lowercase()).collect();
        let domain: Vec<String> = domain.iter().map(|s| s.as_ref().to_lowercase()).collect();

        let mut entries = Vec::with_capacity(ordered.len());
        for name in ordered {
            let name = name.as_ref();
            let lower = name.to_lowercase();
            let category = if soft.iter().any(|s| *s == lower) {
                SkillCategory::Soft
            } else if domain.iter().any(|d| *d == lower) {
                SkillCategory::Domain
            } else {
                SkillCategory::Technical
            };
            let word_re = Regex::new(&format!(r"\b{}\b", regex::escape(&lower)))
                .map_err(|e| VitaeError::Pattern(e.to_string()))?;
            entries.push(SkillEntry {
                name: name.to_string(),
                lower,
                category,
                word_re,
            });
        }
        Ok(Self { entries })
    }

    pub(crate) fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        // Built-in names are escaped literals; compilation cannot fail.
        Self::new(SKILL_NAMES, SOFT_SKILLS, DOMAIN_SKILLS)
            .expect("built-in skill taxonomy compiles")
    }
}
