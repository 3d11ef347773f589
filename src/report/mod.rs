pub mod json;
pub mod md;
pub mod sarif;

use crate::error::{PylintMdError, Result};
use crate::types::report::RunReport;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

impl OutputFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Md => "markdown",
            Self::Sarif => "sarif",
        }
    }
}

pub fn render(report: &RunReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PylintMdError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(PylintMdError::Json),
    }
}

/// Writes the rendered report, replacing whatever was at `path`.
pub fn write_report(path: &Path, rendered: &str) -> Result<()> {
    std::fs::write(path, rendered)?;
    tracing::debug!("wrote {} bytes to {}", rendered.len(), path.display());
    Ok(())
}
