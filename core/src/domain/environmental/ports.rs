use crate::domain::{
    common::entities::app_errors::CoreError, environmental::entities::EnvironmentalReport,
};

/// Local environmental impact scoring of an ingredient list.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentalScorer: Send + Sync {
    fn score_ingredients(&self, ingredients: &[String]) -> Result<EnvironmentalReport, CoreError>;
}
