use std::io::Write;
use vitae_core::Analysis;

/// Writes an analysis as a single JSON document: the flat record a
/// persistence collaborator stores, keyed by whatever identifier the caller
/// owns.
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Emit human-indented JSON instead of the compact form.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn render(&self, analysis: &Analysis) -> anyhow::Result<String> {
        let out = if self.pretty {
            serde_json::to_string_pretty(analysis)?
        } else {
            serde_json::to_string(analysis)?
        };
        Ok(out)
    }

    pub fn write_to(&self, writer: &mut dyn Write, analysis: &Analysis) -> anyhow::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, analysis)?;
        } else {
            serde_json::to_writer(&mut *writer, analysis)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
