use crate::types::finding::{Category, Finding};
use crate::types::report::{FileReport, RunReport};

pub fn to_markdown(report: &RunReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Analysis of folder {}\n", report.root.display()));
    output.push_str("|Item|Number|\n|-|-|\n");
    output.push_str(&format!("|files processed|{}|\n", report.files_processed));
    for category in Category::ALL {
        output.push_str(&format!(
            "|{}|{}|\n",
            category.plural(),
            report.totals.get(category)
        ));
    }
    output.push_str("---\n");

    for file in &report.files {
        push_file_section(&mut output, file);
    }

    output
}

fn push_file_section(output: &mut String, file: &FileReport) {
    output.push_str(&format!("## {}\n", file.path.display()));
    output.push_str("### Summary\n");
    output.push_str("|Type|Number|\n|-|-|\n");
    for category in Category::ALL {
        output.push_str(&format!(
            "|{}|{}|\n",
            category.as_str(),
            file.tally.get(category)
        ));
    }

    output.push_str("\n### Pylint messages\n\n");
    if file.findings.is_empty() {
        output.push_str("* No issues found\n");
    } else {
        for finding in &file.findings {
            output.push_str(&bullet(finding));
            output.push('\n');
        }
    }
    output.push_str("---\n");
}

fn bullet(finding: &Finding) -> String {
    format!(
        "* Line: {} is {}[{}] in {}.py",
        finding.line, finding.message, finding.message_id, finding.module
    )
}
