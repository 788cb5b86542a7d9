//! Windowed pattern extraction of skills, education, and experience from
//! resume text. No I/O, no persistence; raw text in, plain data out.

mod education;
mod experience;
mod normalizer;
mod parser;
mod patterns;
mod skills;
mod taxonomy;

pub use education::EducationExtractor;
pub use experience::ExperienceExtractor;
pub use normalizer::Normalizer;
pub use parser::ResumeParser;
pub use skills::SkillExtractor;
pub use taxonomy::SkillTaxonomy;
