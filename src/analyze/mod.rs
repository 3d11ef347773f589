pub mod pylint;

use crate::error::Result;
use crate::types::finding::Finding;
use crate::types::report::{FileReport, RunReport, Tally};
use std::path::{Path, PathBuf};

/// Produces the findings for a single source file.
pub trait Analyzer {
    fn invoke(&self, file: &Path) -> Result<Vec<Finding>>;
}

/// Analyses `files` in order, tallying each one and folding it into the
/// run-wide totals. The first analyzer error aborts the run.
pub fn run(root: &Path, files: &[PathBuf], analyzer: &dyn Analyzer) -> Result<RunReport> {
    let mut totals = Tally::default();
    let mut reports = Vec::with_capacity(files.len());

    for path in files {
        tracing::info!("processing file {}", path.display());
        let findings = analyzer.invoke(path)?;
        let tally = Tally::from_findings(&findings);
        totals += tally;
        reports.push(FileReport {
            path: path.clone(),
            tally,
            findings,
        });
    }

    tracing::info!(
        files = reports.len(),
        errors = totals.error,
        warnings = totals.warning,
        refactors = totals.refactor,
        conventions = totals.convention,
        "analysis complete"
    );

    Ok(RunReport {
        root: root.to_path_buf(),
        files_processed: reports.len(),
        totals,
        files: reports,
    })
}


#[cfg(test)]
mod tests {
    use super::fake::FakeAnalyzer;
    use super::*;
    use crate::error::PylintMdError;
    use crate::types::finding::Category;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|name| PathBuf::from("src").join(name)).collect()
    }

    #[test]
    fn run_sums_per_file_tallies_into_totals() {
        let analyzer = FakeAnalyzer::default()
            .with(
                "b.py",
                vec![
                    Finding::new("error", 2, "Undefined variable 'y'", "E0602", "b"),
                    Finding::new("convention", 1, "Missing module docstring", "C0114", "b"),
                ],
            )
            .with(
                "c.py",
                vec![
                    Finding::new("warning", 7, "Unused import os", "W0611", "c"),
                    Finding::new("convention", 1, "Missing module docstring", "C0114", "c"),
                    Finding::new("info", 1, "Locally disabling", "I0011", "c"),
                ],
            );

        let report = run(Path::new("src"), &paths(&["a.py", "b.py", "c.py"]), &analyzer)
            .expect("run should succeed");

        assert_eq!(report.files_processed, 3);
        assert_eq!(report.files[0].tally, Tally::default());
        assert!(report.files[0].findings.is_empty());
        assert_eq!(report.files[2].findings.len(), 3);
        for category in Category::ALL {
            let sum: usize = report.files.iter().map(|file| file.tally.get(category)).sum();
            assert_eq!(report.totals.get(category), sum);
        }
        assert_eq!(report.totals.error, 1);
        assert_eq!(report.totals.warning, 1);
        assert_eq!(report.totals.refactor, 0);
        assert_eq!(report.totals.convention, 2);
    }

    #[test]
    fn run_over_no_files_reports_zero_everywhere() {
        let report = run(Path::new("empty"), &[], &FakeAnalyzer::default())
            .expect("run should succeed");
        assert_eq!(report.files_processed, 0);
        assert_eq!(report.totals, Tally::default());
        assert!(report.files.is_empty());
    }

    #[test]
    fn run_aborts_on_malformed_output() {
        let analyzer = FakeAnalyzer::default().broken("b.py");
        let result = run(Path::new("src"), &paths(&["a.py", "b.py", "c.py"]), &analyzer);
        assert!(matches!(result, Err(PylintMdError::MalformedOutput { .. })));
    }
}
