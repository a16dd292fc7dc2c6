use crate::domain::{
    common::entities::app_errors::CoreError,
    environmental::{entities::EnvironmentalReport, get_environmental_data, ports::EnvironmentalScorer},
};

/// Scores against the built-in ingredient heuristics table.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEnvironmentalScorer;

impl EnvironmentalScorer for HeuristicEnvironmentalScorer {
    fn score_ingredients(&self, ingredients: &[String]) -> Result<EnvironmentalReport, CoreError> {
        get_environmental_data(ingredients)
    }
}
