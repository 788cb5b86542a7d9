use anyhow::{Context, Result};
use clap::ValueEnum;
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;
use vitae_core::{Analysis, JobProfile};
use vitae_extract::ResumeParser;
use vitae_render::{JsonWriter, TextWriter};
use vitae_score::ScoringEngine;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Format {
    Text,
    Json,
}

pub fn run(
    file: &Path,
    job_title: Option<&str>,
    company: Option<&str>,
    required: Option<&str>,
    preferred: Option<&str>,
    format: Format,
    pretty: bool,
) -> Result<()> {
    let bytes = fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    // Resume exports are not always clean UTF-8; stray bytes become U+FFFD
    let text = String::from_utf8_lossy(&bytes);

    let profile = build_profile(job_title, company, required, preferred);
    if let Some(p) = &profile {
        info!(
            "weighted scoring against profile: {} required, {} preferred",
            p.required_skills.len(),
            p.preferred_skills.len()
        );
    }

    let parser = ResumeParser::new();
    let mut result = parser.parse(&text);
    let ats_score = ScoringEngine::new().score(&mut result, profile.as_ref());
    let analysis = Analysis { result, ats_score };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Text => TextWriter::new().write_to(&mut out, &analysis)?,
        Format::Json => JsonWriter::new().pretty(pretty).write_to(&mut out, &analysis)?,
    }
    out.flush()?;
    Ok(())
}

/// A profile exists as soon as any profile flag was given; `--required` or
/// `--preferred` alone is enough to switch to weighted scoring.
fn build_profile(
    job_title: Option<&str>,
    company: Option<&str>,
    required: Option<&str>,
    preferred: Option<&str>,
) -> Option<JobProfile> {
    if job_title.is_none() && company.is_none() && required.is_none() && preferred.is_none() {
        return None;
    }
    Some(JobProfile::from_comma_lists(
        job_title.unwrap_or_default(),
        company.unwrap_or_default(),
        required.unwrap_or_default(),
        preferred.unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_no_profile() {
        assert!(build_profile(None, None, None, None).is_none());
    }

    #[test]
    fn required_alone_builds_a_profile() {
        let profile = build_profile(None, None, Some("Python,SQL"), None).unwrap();
        assert_eq!(profile.required_skills, vec!["Python", "SQL"]);
        assert!(profile.preferred_skills.is_empty());
        assert!(profile.title.is_empty());
    }

    #[test]
    fn title_alone_builds_an_empty_skill_profile() {
        let profile = build_profile(Some("SRE"), None, None, None).unwrap();
        assert_eq!(profile.title, "SRE");
        assert!(profile.required_skills.is_empty());
    }
}
