use crate::batch::BatchReport;
use crate::types::report::{AssessmentResult, GrammarError};
use serde_json::{json, Value};

fn sarif_level(error: &GrammarError) -> &'static str {
    match error.severity {
        5..=u8::MAX => "error",
        4 => "warning",
        _ => "note",
    }
}

fn finding(error: &GrammarError, artifact: Option<&str>) -> Value {
    let mut result = json!({
        "ruleId": error.id,
        "level": sarif_level(error),
        "message": { "text": format!("{} (\"{}\")", error.description, error.excerpt) },
        "properties": { "cefrLevel": error.level, "severity": error.severity },
    });
    if let Some(uri) = artifact {
        result["locations"] = json!([{
            "physicalLocation": { "artifactLocation": { "uri": uri } }
        }]);
    }
    result
}

fn envelope(results: Vec<Value>) -> Result<String, serde_json::Error> {
    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "proficiency",
                    "version": env!("CARGO_PKG_VERSION")
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}

pub fn to_sarif(result: &AssessmentResult) -> Result<String, serde_json::Error> {
    let results = result
        .grammar_errors
        .iter()
        .map(|error| finding(error, None))
        .collect();
    envelope(results)
}

pub fn batch_to_sarif(report: &BatchReport) -> Result<String, serde_json::Error> {
    let results = report
        .entries
        .iter()
        .flat_map(|entry| {
            entry
                .result
                .grammar_errors
                .iter()
                .map(move |error| finding(error, Some(entry.path.as_str())))
        })
        .collect();
    envelope(results)
}
