pub mod json;
pub mod md;
pub mod sarif;

use crate::batch::BatchReport;
use crate::error::AssessError;
use crate::types::report::AssessmentResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

pub fn render(result: &AssessmentResult, format: OutputFormat) -> Result<String, AssessError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(AssessError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
        OutputFormat::Sarif => sarif::to_sarif(result).map_err(AssessError::Json),
    }
}

pub fn render_batch(report: &BatchReport, format: OutputFormat) -> Result<String, AssessError> {
    match format {
        OutputFormat::Json => json::batch_to_json(report).map_err(AssessError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(report)),
        OutputFormat::Sarif => sarif::batch_to_sarif(report).map_err(AssessError::Json),
    }
}
