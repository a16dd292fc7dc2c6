use std::sync::Arc;

use crate::domain::{
    analysis::ports::IngredientAnalyzer, common::ScanConfig,
    environmental::ports::EnvironmentalScorer,
};

use super::ports::Clock;

/// Shared service container; the domain service traits are implemented on it.
pub struct Service<A, E, C>
where
    A: IngredientAnalyzer,
    E: EnvironmentalScorer,
    C: Clock,
{
    pub(crate) config: ScanConfig,
    pub(crate) ingredient_analyzer: Arc<A>,
    pub(crate) environmental_scorer: Arc<E>,
    pub(crate) clock: Arc<C>,
}

impl<A, E, C> Service<A, E, C>
where
    A: IngredientAnalyzer,
    E: EnvironmentalScorer,
    C: Clock,
{
    pub fn new(
        config: ScanConfig,
        ingredient_analyzer: A,
        environmental_scorer: E,
        clock: C,
    ) -> Self {
        Self {
            config,
            ingredient_analyzer: Arc::new(ingredient_analyzer),
            environmental_scorer: Arc::new(environmental_scorer),
            clock: Arc::new(clock),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}

impl<A, E, C> Clone for Service<A, E, C>
where
    A: IngredientAnalyzer,
    E: EnvironmentalScorer,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            ingredient_analyzer: Arc::clone(&self.ingredient_analyzer),
            environmental_scorer: Arc::clone(&self.environmental_scorer),
            clock: Arc::clone(&self.clock),
        }
    }
}
