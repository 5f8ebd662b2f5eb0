use crate::batch::BatchReport;
use crate::types::report::AssessmentResult;

pub fn to_json(result: &AssessmentResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn batch_to_json(report: &BatchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
