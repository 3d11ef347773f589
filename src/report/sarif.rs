use crate::types::finding::{Category, Finding};
use crate::types::report::RunReport;
use serde_json::json;
use std::path::Path;

pub fn to_sarif(report: &RunReport) -> Result<String, serde_json::Error> {
    let results: Vec<_> = report
        .files
        .iter()
        .flat_map(|file| {
            file.findings
                .iter()
                .map(move |finding| sarif_result(&file.path, finding))
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "pylint"
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}

fn sarif_result(path: &Path, finding: &Finding) -> serde_json::Value {
    json!({
        "ruleId": finding.message_id,
        "level": level(finding.category()),
        "message": { "text": finding.message },
        "locations": [{
            "physicalLocation": {
                "artifactLocation": { "uri": path.display().to_string() },
                // SARIF lines are 1-based; pylint uses 0 for some module-level messages.
                "region": { "startLine": finding.line.max(1) }
            }
        }]
    })
}

fn level(category: Option<Category>) -> &'static str {
    match category {
        Some(Category::Error) => "error",
        Some(Category::Warning) => "warning",
        _ => "note",
    }
}
