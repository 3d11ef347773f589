use crate::types::finding::{Category, Finding};
use serde::Serialize;
use std::ops::AddAssign;
use std::path::PathBuf;

/// Per-category finding counts, either for one file or for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub error: usize,
    pub warning: usize,
    pub refactor: usize,
    pub convention: usize,
}

impl Tally {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut tally = Self::default();
        for category in findings.iter().filter_map(Finding::category) {
            tally.record(category);
        }
        tally
    }

    pub fn record(&mut self, category: Category) {
        *self.slot(category) += 1;
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Error => self.error,
            Category::Warning => self.warning,
            Category::Refactor => self.refactor,
            Category::Convention => self.convention,
        }
    }

    fn slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Error => &mut self.error,
            Category::Warning => &mut self.warning,
            Category::Refactor => &mut self.refactor,
            Category::Convention => &mut self.convention,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        for category in Category::ALL {
            *self.slot(category) += other.get(category);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub tally: Tally,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub files_processed: usize,
    pub totals: Tally,
    pub files: Vec<FileReport>,
}
