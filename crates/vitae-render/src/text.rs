use std::io::Write;
use vitae_core::{Analysis, SkillMatch};

/// Writes an analysis as a human-readable report: score header, then the
/// skills, education, and experience sections (headers always present, even
/// when a section is empty).
pub struct TextWriter;

impl TextWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the report as a string.
    pub fn render(&self, analysis: &Analysis) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, analysis)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write the report to a writer.
    pub fn write_to(&self, writer: &mut dyn Write, analysis: &Analysis) -> anyhow::Result<()> {
        writeln!(writer, "ATS Score: {:.2}%", analysis.ats_score)?;
        writeln!(writer)?;

        writeln!(writer, "Skills Found:")?;
        for skill in &analysis.result.skills {
            writeln!(
                writer,
                "- {} [{}]{}",
                skill.name,
                skill.category,
                relevance_suffix(skill.relevance_score)
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Education:")?;
        for edu in &analysis.result.education {
            let mut line = format!("- {}", edu.institution);
            if !edu.degree.is_empty() {
                line.push_str(&format!(", {}", edu.degree));
            }
            if !edu.start_date.is_empty() || !edu.end_date.is_empty() {
                line.push_str(&format!(" ({} - {})", edu.start_date, edu.end_date));
            }
            if let Some(gpa) = edu.gpa {
                line.push_str(&format!(", GPA: {gpa}"));
            }
            writeln!(writer, "{line}")?;
        }

        writeln!(writer)?;
        writeln!(writer, "Experience:")?;
        for exp in &analysis.result.experience {
            let mut line = format!("- {}", exp.position);
            if !exp.company.is_empty() {
                line.push_str(&format!(" at {}", exp.company));
            }
            if !exp.start_date.is_empty() || !exp.end_date.is_empty() {
                line.push_str(&format!(" ({} - {})", exp.start_date, exp.end_date));
            }
            writeln!(writer, "{line}")?;
            if !exp.responsibilities.is_empty() {
                writeln!(writer, "  Responsibilities: {}", exp.responsibilities)?;
            }
        }

        Ok(())
    }
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn relevance_suffix(relevance: u8) -> &'static str {
    match relevance {
        SkillMatch::RELEVANCE_REQUIRED => " (High Relevance)",
        SkillMatch::RELEVANCE_PREFERRED => " (Medium Relevance)",
        _ => "",
    }
}
