pub mod assess;
pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod types;

pub use assess::{assess, assess_text};
pub use error::{AssessError, Result};
pub use types::level::CefrLevel;
pub use types::report::{AssessmentResult, GrammarError};
pub use types::scoring::{ScoringProfile, ScoringVariant, SubScores};
