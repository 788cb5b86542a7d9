use crate::taxonomy::SkillTaxonomy;
use log::debug;
use std::collections::HashSet;
use vitae_core::SkillMatch;

/// Matches the skill taxonomy against a normalized token set and the
/// lowercased full text.
///
/// A skill is present when its lowercase name is a member of the token set or
/// a whole-word match is found anywhere in the lowercased text. The second
/// test is what catches multi-word skills ("Machine Learning") that never
/// appear as single tokens. Output order follows taxonomy order, not text
/// order; taxonomy entries are unique so no deduplication is needed.
pub struct SkillExtractor {
    taxonomy: SkillTaxonomy,
}

impl SkillExtractor {
    pub fn new(taxonomy: SkillTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Emit one `SkillMatch` (relevance 0) per taxonomy entry present in the
    /// resume. `lower_text` must already be lowercased by the caller.
    pub fn extract(&self, tokens: &HashSet<String>, lower_text: &str) -> Vec<SkillMatch> {
        let matches: Vec<SkillMatch> = self
            .taxonomy
            .entries()
            .iter()
            .filter(|entry| tokens.contains(&entry.lower) || entry.word_re.is_match(lower_text))
            .map(|entry| SkillMatch::new(entry.name.clone(), entry.category))
            .collect();
        debug!(
            "skill extraction: {} of {} taxonomy entries matched",
            matches.len(),
            self.taxonomy.len()
        );
        matches
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(SkillTaxonomy::default())
    }
}
