use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use vitae_core::{JobProfile, ParseResult, SkillMatch};

/// Points per extracted skill in unweighted mode (16 skills reach the cap).
const SKILL_POINTS: f64 = 2.5;
/// Skills sub-score cap, both modes.
const SKILLS_CAP: f64 = 40.0;
/// Points per education entry (3 entries reach the cap).
const EDUCATION_POINTS: f64 = 10.0;
const EDUCATION_CAP: f64 = 30.0;
const EXPERIENCE_CAP: f64 = 30.0;
/// Weighted mode: required-coverage worth 30 points, preferred 10.
const REQUIRED_WEIGHT: f64 = 30.0;
const PREFERRED_WEIGHT: f64 = 10.0;
/// Fixed denominator of the final scaling. Not derived from the sub-score
/// caps; with the caps summing to 100 the scaling is the identity, and it is
/// kept that way for output compatibility.
const MAX_SCORE: f64 = 100.0;

/// Points per experience entry (6 entries reach the cap). An alternate
/// deployment used 10 with the same cap; the weight is a constructor
/// parameter so both behaviors stay testable.
pub const DEFAULT_EXPERIENCE_WEIGHT: f64 = 5.0;

/// Per-section sub-scores plus the combined ATS score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills_score: f64,
    pub education_score: f64,
    pub experience_score: f64,
    pub ats_score: f64,
}

/// Reduces a parse result (optionally against a job profile) to an ATS score
/// and, in weighted mode, annotates every skill with a relevance level.
pub struct ScoringEngine {
    experience_weight: f64,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            experience_weight: DEFAULT_EXPERIENCE_WEIGHT,
        }
    }

    /// Override the per-entry experience weight. The cap stays at 30.
    pub fn experience_weight(mut self, weight: f64) -> Self {
        self.experience_weight = weight;
        self
    }

    /// Score the parse result. With a profile, skills are scored by
    /// required/preferred coverage and every `SkillMatch` receives a
    /// relevance level exactly once; without one, skills score by count and
    /// relevance levels stay at 0.
    pub fn score(&self, result: &mut ParseResult, profile: Option<&JobProfile>) -> f64 {
        self.score_with_breakdown(result, profile).ats_score
    }

    /// Like [`score`](Self::score) but returns the per-section sub-scores.
    pub fn score_with_breakdown(
        &self,
        result: &mut ParseResult,
        profile: Option<&JobProfile>,
    ) -> ScoreBreakdown {
        let skills_score = match profile {
            Some(profile) => self.weighted_skills_score(result, profile),
            None => (result.skills.len() as f64 * SKILL_POINTS).min(SKILLS_CAP),
        };
        let education_score = (result.education.len() as f64 * EDUCATION_POINTS).min(EDUCATION_CAP);
        let experience_score =
            (result.experience.len() as f64 * self.experience_weight).min(EXPERIENCE_CAP);

        let total = skills_score + education_score + experience_score;
        // Identity by construction (MAX_SCORE is fixed at 100); preserved for
        // output compatibility.
        let ats_score = (total / MAX_SCORE) * 100.0;

        debug!(
            "ats score {ats_score:.2} (skills {skills_score:.1}, education {education_score:.1}, experience {experience_score:.1})"
        );
        ScoreBreakdown {
            skills_score,
            education_score,
            experience_score,
            ats_score,
        }
    }

    /// Weighted mode: coverage percentages over the requirement lists, plus
    /// the in-place relevance pass.
    fn weighted_skills_score(&self, result: &mut ParseResult, profile: &JobProfile) -> f64 {
        let required = &profile.required_skills;
        let preferred = &profile.preferred_skills;

        // One compiled matcher per requirement, reused across every skill
        // name below.
        let required_matchers = word_matchers(required);
        let preferred_matchers = word_matchers(preferred);

        let required_matches = count_covered(&required_matchers, &result.skills);
        let preferred_matches = count_covered(&preferred_matchers, &result.skills);

        // An empty requirement list grants full credit rather than dividing
        // by zero.
        let required_pct = if required.is_empty() {
            1.0
        } else {
            required_matches as f64 / required.len() as f64
        };
        let preferred_pct = if preferred.is_empty() {
            1.0
        } else {
            preferred_matches as f64 / preferred.len() as f64
        };

        for skill in &mut result.skills {
            // one matcher per skill name, tried against both lists
            skill.relevance_score = match word_matcher(&skill.name) {
                Some(re) if required.iter().any(|r| re.is_match(r)) => {
                    SkillMatch::RELEVANCE_REQUIRED
                }
                Some(re) if preferred.iter().any(|p| re.is_match(p)) => {
                    SkillMatch::RELEVANCE_PREFERRED
                }
                _ => SkillMatch::RELEVANCE_LOW,
            };
        }

        (required_pct * REQUIRED_WEIGHT + preferred_pct * PREFERRED_WEIGHT).min(SKILLS_CAP)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// How many requirement matchers hit at least one extracted skill name.
fn count_covered(matchers: &[Regex], skills: &[SkillMatch]) -> usize {
    matchers
        .iter()
        .filter(|re| skills.iter().any(|s| re.is_match(&s.name)))
        .count()
}

/// Case-insensitive whole-word matcher for one requirement or skill name.
/// The needle is escaped, so compilation cannot fail; a failure degrades to
/// "no match" rather than an error.
fn word_matcher(needle: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(needle))).ok()
}

/// One matcher per list entry, compiled up front. An entry whose matcher
/// failed to compile counts as unmatched.
fn word_matchers(list: &[String]) -> Vec<Regex> {
    list.iter().filter_map(|s| word_matcher(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_core::{EducationEntry, ExperienceEntry, SkillCategory};

    fn result_with(skills: usize, education: usize, experience: usize) -> ParseResult {
        ParseResult {
            skills: (0..skills)
                .map(|i| SkillMatch::new(format!("Skill{i}"), SkillCategory::Technical))
                .collect(),
            education: (0..education).map(|_| EducationEntry::default()).collect(),
            experience: (0..experience)
                .map(|_| ExperienceEntry::default())
                .collect(),
        }
    }

    fn named_skills(names: &[&str]) -> ParseResult {
        ParseResult {
            skills: names
                .iter()
                .map(|n| SkillMatch::new(*n, SkillCategory::Technical))
                .collect(),
            ..Default::default()
        }
    }

    // --- unweighted mode ---

    #[test]
    fn empty_result_scores_zero() {
        let mut result = ParseResult::default();
        let score = ScoringEngine::new().score(&mut result, None);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn two_skills_score_five() {
        let mut result = result_with(2, 0, 0);
        let score = ScoringEngine::new().score(&mut result, None);
        assert_eq!(score, 5.0);
    }

    #[test]
    fn skills_cap_at_forty() {
        let mut result = result_with(100, 0, 0);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut result, None);
        assert_eq!(breakdown.skills_score, 40.0);
    }

    #[test]
    fn education_cap_at_thirty() {
        let mut result = result_with(0, 10, 0);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut result, None);
        assert_eq!(breakdown.education_score, 30.0);
    }

    #[test]
    fn experience_default_weight_is_five_per_entry() {
        let mut result = result_with(0, 0, 3);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut result, None);
        assert_eq!(breakdown.experience_score, 15.0);
    }

    #[test]
    fn experience_weight_is_configurable_and_capped() {
        for weight in [5.0, 10.0] {
            let engine = ScoringEngine::new().experience_weight(weight);

            let mut three = result_with(0, 0, 3);
            let breakdown = engine.score_with_breakdown(&mut three, None);
            assert_eq!(breakdown.experience_score, (3.0 * weight).min(30.0));

            let mut many = result_with(0, 0, 12);
            let breakdown = engine.score_with_breakdown(&mut many, None);
            assert_eq!(breakdown.experience_score, 30.0);
        }
    }

    #[test]
    fn full_result_hits_one_hundred() {
        let mut result = result_with(16, 3, 6);
        let score = ScoringEngine::new().score(&mut result, None);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn score_is_bounded() {
        let mut result = result_with(500, 500, 500);
        let score = ScoringEngine::new().score(&mut result, None);
        assert!((0.0..=100.0).contains(&score));
        assert!(!score.is_nan());
    }

    #[test]
    fn adding_a_skill_never_decreases_skills_score() {
        let engine = ScoringEngine::new();
        let mut prev = 0.0;
        for n in 0..30 {
            let mut result = result_with(n, 0, 0);
            let breakdown = engine.score_with_breakdown(&mut result, None);
            assert!(breakdown.skills_score >= prev);
            prev = breakdown.skills_score;
        }
    }

    #[test]
    fn zero_entities_mean_zero_sub_scores() {
        let mut result = result_with(5, 0, 0);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut result, None);
        assert_eq!(breakdown.education_score, 0.0);
        assert_eq!(breakdown.experience_score, 0.0);
    }

    #[test]
    fn unweighted_mode_leaves_relevance_unscored() {
        let mut result = named_skills(&["Python"]);
        ScoringEngine::new().score(&mut result, None);
        assert_eq!(result.skills[0].relevance_score, SkillMatch::RELEVANCE_UNSCORED);
    }

    // --- weighted mode ---

    #[test]
    fn empty_requirement_lists_grant_full_skills_credit() {
        let profile = JobProfile::default();
        let mut result = named_skills(&[]);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut result, Some(&profile));
        // required_pct = preferred_pct = 1.0 -> min(30 + 10, 40) = 40
        assert_eq!(breakdown.skills_score, 40.0);
    }

    #[test]
    fn half_required_coverage() {
        let profile = JobProfile::from_comma_lists("T", "C", "Python,SQL", "");
        let mut result = named_skills(&["Python"]);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut result, Some(&profile));
        // required_pct 0.5 * 30 + preferred_pct 1.0 * 10 = 25
        assert_eq!(breakdown.skills_score, 25.0);
        assert_eq!(result.skills[0].relevance_score, SkillMatch::RELEVANCE_REQUIRED);
    }

    #[test]
    fn relevance_levels_assigned_once_per_call() {
        let profile = JobProfile::from_comma_lists("T", "C", "Python", "Docker");
        let mut result = named_skills(&["Python", "Docker", "Git"]);
        ScoringEngine::new().score(&mut result, Some(&profile));
        assert_eq!(result.skills[0].relevance_score, SkillMatch::RELEVANCE_REQUIRED);
        assert_eq!(result.skills[1].relevance_score, SkillMatch::RELEVANCE_PREFERRED);
        assert_eq!(result.skills[2].relevance_score, SkillMatch::RELEVANCE_LOW);
    }

    #[test]
    fn requirement_matching_is_case_insensitive() {
        let profile = JobProfile::from_comma_lists("T", "C", "python", "");
        let mut result = named_skills(&["Python"]);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut result, Some(&profile));
        assert_eq!(breakdown.skills_score, 40.0);
    }

    #[test]
    fn requirement_matching_respects_word_boundaries() {
        let profile = JobProfile::from_comma_lists("T", "C", "Java", "");
        let mut result = named_skills(&["Javascript"]);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut result, Some(&profile));
        // "Java" is not a whole word inside "Javascript"
        assert_eq!(breakdown.skills_score, 10.0);
        assert_eq!(result.skills[0].relevance_score, SkillMatch::RELEVANCE_LOW);
    }

    #[test]
    fn coverage_and_relevance_agree_over_larger_lists() {
        let names: Vec<String> = (0..20).map(|i| format!("Skill{i}")).collect();
        let required = names[..10].join(",");
        let profile = JobProfile::from_comma_lists("T", "C", &required, "");

        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut result = named_skills(&name_refs);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut result, Some(&profile));

        // 10/10 required covered (30) + empty preferred (10)
        assert_eq!(breakdown.skills_score, 40.0);
        assert!(
            result.skills[..10]
                .iter()
                .all(|s| s.relevance_score == SkillMatch::RELEVANCE_REQUIRED)
        );
        assert!(
            result.skills[10..]
                .iter()
                .all(|s| s.relevance_score == SkillMatch::RELEVANCE_LOW)
        );
    }

    #[test]
    fn regex_metacharacters_in_requirements_stay_literal() {
        let profile = JobProfile::from_comma_lists("T", "C", "Node.js", "");

        let mut miss = named_skills(&["Nodexjs"]);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut miss, Some(&profile));
        // the '.' must not act as a wildcard
        assert_eq!(breakdown.skills_score, 10.0);

        let mut hit = named_skills(&["Node.js"]);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut hit, Some(&profile));
        assert_eq!(breakdown.skills_score, 40.0);
        assert_eq!(hit.skills[0].relevance_score, SkillMatch::RELEVANCE_REQUIRED);
    }

    #[test]
    fn weighted_education_and_experience_unchanged() {
        let profile = JobProfile::default();
        let mut result = result_with(0, 2, 4);
        let breakdown = ScoringEngine::new().score_with_breakdown(&mut result, Some(&profile));
        assert_eq!(breakdown.education_score, 20.0);
        assert_eq!(breakdown.experience_score, 20.0);
    }

    #[test]
    fn weighted_score_is_bounded() {
        let profile = JobProfile::from_comma_lists("T", "C", "a,b,c", "d,e");
        let mut result = result_with(50, 50, 50);
        let score = ScoringEngine::new().score(&mut result, Some(&profile));
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn scoring_twice_is_idempotent() {
        let profile = JobProfile::from_comma_lists("T", "C", "Python", "");
        let mut a = named_skills(&["Python", "Git"]);
        let mut b = a.clone();
        let engine = ScoringEngine::new();
        let score_a = engine.score(&mut a, Some(&profile));
        let score_b = engine.score(&mut b, Some(&profile));
        assert_eq!(score_a, score_b);
        assert_eq!(a, b);
    }
}
