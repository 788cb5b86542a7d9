use crate::patterns::{self, context_window, split_date_range};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use vitae_core::{ExperienceEntry, VitaeError};

/// Job-title patterns: seniority-prefixed engineering/analyst roles, PM
/// variants, and executive titles. Tried independently and in order.
const TITLE_PATTERNS: &[&str] = &[
    r"(?i)(?:Senior|Junior|Lead|Principal)?\s*(?:Software|Systems|Data|Full Stack|Frontend|Backend|Web|Mobile|Cloud|DevOps|QA|Test)\s*(?:Engineer|Developer|Architect|Analyst|Scientist)",
    r"(?i)(?:Project|Product|Program)\s*Manager",
    r"(?i)(?:Director|VP|CTO|CEO|CIO|COO)",
];

/// Company is a `(at|for|with) <words>` capture near the title.
static COMPANY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:at|for|with) ([\w\s]+)").expect("company pattern compiles"));

/// Bullet fragments: a bullet glyph, asterisk, hyphen, or `N.` marker
/// followed by plain text. Deliberately unanchored.
static RESPONSIBILITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:•|\*|\-|\d+\.)\s*([\w\s\.,;:]+)").expect("responsibility pattern compiles")
});

const COMPANY_BEFORE: usize = 50;
const COMPANY_AFTER: usize = 100;
const DATE_BEFORE: usize = 100;
const DATE_AFTER: usize = 100;
const DESCRIPTION_BEFORE: usize = 50;
const DESCRIPTION_AFTER: usize = 200;
const RESPONSIBILITY_SPAN: usize = 500;

/// Extracts experience entries with the same windowed-association strategy as
/// education: each title match opens fixed-size windows searched for a
/// company, a date range, a description snippet, and bullet responsibilities.
/// `location` is never populated (documented gap, kept for schema stability).
pub struct ExperienceExtractor {
    patterns: Vec<Regex>,
}

impl ExperienceExtractor {
    /// Extractor with the built-in title patterns.
    pub fn new() -> Self {
        // Built-in patterns are covered by tests; compilation cannot fail.
        Self::with_patterns(TITLE_PATTERNS).expect("built-in experience patterns compile")
    }

    /// Extractor with caller-supplied title patterns.
    pub fn with_patterns<S: AsRef<str>>(title_patterns: &[S]) -> Result<Self, VitaeError> {
        let patterns = title_patterns
            .iter()
            .map(|p| Regex::new(p.as_ref()).map_err(|e| VitaeError::Pattern(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn extract(&self, text: &str) -> Vec<ExperienceEntry> {
        let mut entries = Vec::new();
        for (i, pattern) in self.patterns.iter().enumerate() {
            let before = entries.len();
            for m in pattern.find_iter(text) {
                entries.push(self.entry_for_match(text, m.start(), m.end(), m.as_str()));
            }
            trace!(
                "experience pattern {} matched {} time(s)",
                i,
                entries.len() - before
            );
        }
        debug!("experience extraction: {} entries", entries.len());
        entries
    }

    fn entry_for_match(
        &self,
        text: &str,
        start: usize,
        end: usize,
        position: &str,
    ) -> ExperienceEntry {
        let mut entry = ExperienceEntry {
            position: position.to_string(),
            ..Default::default()
        };

        let company_window = context_window(text, start, end, COMPANY_BEFORE, COMPANY_AFTER);
        if let Some(caps) = COMPANY_RE.captures(company_window) {
            if let Some(company) = caps.get(1) {
                entry.company = company.as_str().to_string();
            }
        }

        let date_window = context_window(text, start, end, DATE_BEFORE, DATE_AFTER);
        if let Some(range) = patterns::DATE_RANGE_RE.find(date_window) {
            if let Some((start_date, end_date)) = split_date_range(range.as_str()) {
                entry.start_date = start_date;
                entry.end_date = end_date;
            }
        }

        entry.description =
            context_window(text, start, end, DESCRIPTION_BEFORE, DESCRIPTION_AFTER)
                .trim()
                .to_string();

        let bullet_span = context_window(text, start, start, 0, RESPONSIBILITY_SPAN);
        let fragments: Vec<&str> = RESPONSIBILITY_RE
            .captures_iter(bullet_span)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();
        if !fragments.is_empty() {
            entry.responsibilities = fragments.join("; ");
        }

        entry
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}
