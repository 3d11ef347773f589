use super::Analyzer;
use crate::error::{PylintMdError, Result};
use crate::types::config::AnalyzerConfig;
use crate::types::finding::Finding;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs pylint (or a compatible program) once per file and reads its JSON
/// report from stdout.
#[derive(Debug, Clone)]
pub struct PylintAnalyzer {
    program: String,
    args: Vec<String>,
}

impl PylintAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }
}

impl Analyzer for PylintAnalyzer {
    fn invoke(&self, file: &Path) -> Result<Vec<Finding>> {
        tracing::debug!(
            "running {} {} {}",
            self.program,
            file.display(),
            self.args.join(" ")
        );

        let output = Command::new(&self.program)
            .arg(file)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| PylintMdError::AnalyzerSpawn {
                program: self.program.clone(),
                source,
            })?;

        // pylint packs message classes into its exit status; only stdout matters.
        tracing::debug!("{} exited with {}", self.program, output.status);
        parse_output(file, &output.stdout)
    }
}

/// Empty or whitespace-only output is a clean file, anything else must be a
/// JSON array of records.
pub fn parse_output(file: &Path, stdout: &[u8]) -> Result<Vec<Finding>> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(stdout).map_err(|source| PylintMdError::MalformedOutput {
        path: file.to_path_buf(),
        source,
    })
}
