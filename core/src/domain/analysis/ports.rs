use std::future::Future;

use crate::domain::{
    analysis::{entities::IngredientAnalysis, value_objects::AnalyzeProductInput},
    common::entities::app_errors::CoreError,
    formatting::entities::FormattedAnalysis,
};

/// External model that assesses ingredients for health and environmental impact.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientAnalyzer: Send + Sync {
    fn analyze_ingredients(
        &self,
        ingredients: Vec<String>,
    ) -> impl Future<Output = Result<IngredientAnalysis, CoreError>> + Send;
}

/// Service trait for the full product scan pipeline
#[cfg_attr(test, mockall::automock)]
pub trait ProductAnalysisService: Send + Sync {
    fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> impl Future<Output = Result<FormattedAnalysis, CoreError>> + Send;
}
