use crate::patterns::{self, context_window, split_date_range};
use log::{debug, trace};
use regex::Regex;
use vitae_core::{EducationEntry, VitaeError};

/// Institution-identifying patterns, tried independently and in order against
/// the raw, case-preserved text. A single institution can be recorded more
/// than once when several patterns fire; that is expected.
const INSTITUTION_PATTERNS: &[&str] = &[
    patterns::DEGREE,
    r"(?i)(?:University|College|Institute|School) of [\w\s]+",
    r"(?i)(?:FAST|FAST-NUCES|National University of Computer and Emerging Sciences)(?:[- ](?:Islamabad|Lahore|Karachi|Peshawar|Chiniot-Faisalabad|Faisalabad))?",
    r"(?i)Foundation for Advancement of Science and Technology",
    r"(?i)(?:High School|Secondary School|School) of [\w\s]+",
];

/// Bytes of context searched on each side of an institution match.
const WINDOW: usize = 100;

/// Extracts education entries by windowed field association: every
/// institution match opens a ±100-char window that is independently searched
/// for a degree phrase, a date range, and a GPA expression. Fields with no
/// hit in the window stay empty; that is not an error.
pub struct EducationExtractor {
    patterns: Vec<Regex>,
}

impl EducationExtractor {
    /// Extractor with the built-in institution patterns.
    pub fn new() -> Self {
        // Built-in patterns are covered by tests; compilation cannot fail.
        Self::with_patterns(INSTITUTION_PATTERNS).expect("built-in education patterns compile")
    }

    /// Extractor with caller-supplied institution patterns.
    pub fn with_patterns<S: AsRef<str>>(institution_patterns: &[S]) -> Result<Self, VitaeError> {
        let patterns = institution_patterns
            .iter()
            .map(|p| Regex::new(p.as_ref()).map_err(|e| VitaeError::Pattern(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Run every pattern over the raw text and build one entry per match,
    /// using the match's own offsets for its context window (repeated
    /// institution strings each get their own window).
    pub fn extract(&self, text: &str) -> Vec<EducationEntry> {
        let mut entries = Vec::new();
        for (i, pattern) in self.patterns.iter().enumerate() {
            let before = entries.len();
            for m in pattern.find_iter(text) {
                entries.push(self.entry_for_match(text, m.start(), m.end(), m.as_str()));
            }
            trace!(
                "education pattern {} matched {} time(s)",
                i,
                entries.len() - before
            );
        }
        debug!("education extraction: {} entries", entries.len());
        entries
    }

    fn entry_for_match(
        &self,
        text: &str,
        start: usize,
        end: usize,
        institution: &str,
    ) -> EducationEntry {
        let window = context_window(text, start, end, WINDOW, WINDOW);

        let mut entry = EducationEntry {
            institution: institution.to_string(),
            ..Default::default()
        };

        if let Some(degree) = patterns::DEGREE_RE.find(window) {
            entry.degree = degree.as_str().to_string();
        }

        if let Some(range) = patterns::DATE_RANGE_RE.find(window) {
            if let Some((start_date, end_date)) = split_date_range(range.as_str()) {
                entry.start_date = start_date;
                entry.end_date = end_date;
            }
        }

        if let Some(gpa) = patterns::GPA_RE.find(window) {
            if let Some(value) = patterns::DECIMAL_RE.find(gpa.as_str()) {
                entry.gpa = value.as_str().parse().ok();
            }
        }

        entry
    }
}

impl Default for EducationExtractor {
    fn default() -> Self {
        Self::new()
    }
}
