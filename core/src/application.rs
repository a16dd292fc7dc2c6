use crate::{
    domain::common::{ScanConfig, services::Service},
    infrastructure::{
        analyzer::StaticIngredientAnalyzer, clock::SystemClock,
        scorer::HeuristicEnvironmentalScorer,
    },
};

pub type LabelScanService =
    Service<StaticIngredientAnalyzer, HeuristicEnvironmentalScorer, SystemClock>;

pub fn create_service(config: ScanConfig) -> LabelScanService {
    tracing::debug!(
        max_ingredients = config.max_ingredients,
        max_ingredient_length = config.max_ingredient_length,
        "creating scan service"
    );

    Service::new(
        config,
        StaticIngredientAnalyzer,
        HeuristicEnvironmentalScorer,
        SystemClock,
    )
}
