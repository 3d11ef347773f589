use crate::analyze::Analyzer;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed { expected: usize, found: usize },
    Errored(String),
}

#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, Outcome::Passed)
    }
}

/// Asserts that each file has zero findings. Every file is its own case, so
/// an analyzer failure on one never stops the rest.
pub fn check_files(files: &[PathBuf], analyzer: &dyn Analyzer) -> Vec<CaseOutcome> {
    files
        .iter()
        .map(|path| CaseOutcome {
            path: path.clone(),
            outcome: check_file(path, analyzer),
        })
        .collect()
}

fn check_file(path: &Path, analyzer: &dyn Analyzer) -> Outcome {
    tracing::info!("creating test for file {}", path.display());
    match analyzer.invoke(path) {
        Ok(findings) if findings.is_empty() => Outcome::Passed,
        Ok(findings) => Outcome::Failed {
            expected: 0,
            found: findings.len(),
        },
        Err(err) => Outcome::Errored(err.to_string()),
    }
}

/// Prints the cases the way a test runner would and returns the failure count.
pub fn print_summary(outcomes: &[CaseOutcome], quiet: bool) -> usize {
    print!("{}", format_summary(outcomes, quiet));
    outcomes.iter().filter(|case| !case.passed()).count()
}

/// Under `quiet` only the failure details are kept.
pub fn format_summary(outcomes: &[CaseOutcome], quiet: bool) -> String {
    let mut output = String::new();
    if !quiet {
        for case in outcomes {
            let status = if case.passed() { "ok" } else { "FAILED" };
            output.push_str(&format!("test {} ... {}\n", case.path.display(), status));
        }
    }

    let failures: Vec<&CaseOutcome> = outcomes.iter().filter(|case| !case.passed()).collect();
    if !failures.is_empty() {
        if !quiet {
            output.push('\n');
        }
        output.push_str("failures:\n");
        for case in &failures {
            match &case.outcome {
                Outcome::Failed { expected, found } => output.push_str(&format!(
                    "    {}: assertion failed: {} != {}\n",
                    case.path.display(),
                    expected,
                    found
                )),
                Outcome::Errored(message) => {
                    output.push_str(&format!("    {}: {}\n", case.path.display(), message))
                }
                Outcome::Passed => {}
            }
        }
    }

    if !quiet {
        output.push_str(&format!(
            "\ntest result: {}. {} passed; {} failed\n",
            if failures.is_empty() { "ok" } else { "FAILED" },
            outcomes.len() - failures.len(),
            failures.len()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::fake::FakeAnalyzer;
    use crate::types::finding::Finding;

    #[test]
    fn check_files_isolates_each_case() {
        let analyzer = FakeAnalyzer::default()
            .with(
                "dirty.py",
                vec![Finding::new("refactor", 12, "Too many branches", "R0912", "dirty")],
            )
            .broken("broken.py");
        let files = vec![
            PathBuf::from("broken.py"),
            PathBuf::from("clean.py"),
            PathBuf::from("dirty.py"),
        ];

        let outcomes = check_files(&files, &analyzer);
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0].outcome, Outcome::Errored(_)));
        assert_eq!(outcomes[1].outcome, Outcome::Passed);
        assert_eq!(
            outcomes[2].outcome,
            Outcome::Failed {
                expected: 0,
                found: 1
            }
        );
        assert_eq!(print_summary(&outcomes, false), 2);
    }

    #[test]
    fn uncounted_categories_still_fail_the_case() {
        let analyzer = FakeAnalyzer::default().with(
            "fatal.py",
            vec![Finding::new("fatal", 1, "Parsing failed", "F0001", "fatal")],
        );
        let outcomes = check_files(&[PathBuf::from("fatal.py")], &analyzer);
        assert!(!outcomes[0].passed());
    }

    #[test]
    fn no_files_means_no_cases() {
        let outcomes = check_files(&[], &FakeAnalyzer::default());
        assert!(outcomes.is_empty());
        assert_eq!(print_summary(&outcomes, false), 0);
    }

    #[test]
    fn quiet_summary_keeps_only_failure_details() {
        let analyzer = FakeAnalyzer::default().with(
            "dirty.py",
            vec![Finding::new("error", 3, "Undefined variable 'y'", "E0602", "dirty")],
        );
        let outcomes = check_files(
            &[PathBuf::from("clean.py"), PathBuf::from("dirty.py")],
            &analyzer,
        );

        let quiet = format_summary(&outcomes, true);
        assert_eq!(quiet, "failures:\n    dirty.py: assertion failed: 0 != 1\n");

        let verbose = format_summary(&outcomes, false);
        assert!(verbose.contains("test clean.py ... ok\n"));
        assert!(verbose.contains("test result: FAILED. 1 passed; 1 failed\n"));
    }

    #[test]
    fn quiet_summary_of_clean_run_is_empty() {
        let outcomes = check_files(&[PathBuf::from("clean.py")], &FakeAnalyzer::default());
        assert!(format_summary(&outcomes, true).is_empty());
        assert_eq!(print_summary(&outcomes, true), 0);
    }
}
