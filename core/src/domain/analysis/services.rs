use crate::domain::{
    allergen::check_allergens,
    analysis::{
        entities::{EnvironmentalAnalysis, IngredientAnalysis},
        helpers::{categorize_ingredients, weighted_environmental_score, weighted_health_score},
        ports::{IngredientAnalyzer, ProductAnalysisService},
        value_objects::AnalyzeProductInput,
    },
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    environmental::ports::EnvironmentalScorer,
    formatting::{FormatAnalysisInput, entities::FormattedAnalysis, format_analysis_data},
};

impl<A, E, C> Service<A, E, C>
where
    A: IngredientAnalyzer,
    E: EnvironmentalScorer,
    C: Clock,
{
    /// Analyzer result stamped with the clock, or the unavailable stand-in on error.
    async fn analysis_or_fallback(&self, ingredients: &[String]) -> IngredientAnalysis {
        match self
            .ingredient_analyzer
            .analyze_ingredients(ingredients.to_vec())
            .await
        {
            Ok(mut analysis) => {
                analysis.timestamp.get_or_insert_with(|| self.clock.now());
                analysis
            }
            Err(e) => {
                tracing::error!("Error analyzing ingredients: {}", e);
                IngredientAnalysis::unavailable(ingredients.len(), self.clock.now())
            }
        }
    }
}

impl<A, E, C> ProductAnalysisService for Service<A, E, C>
where
    A: IngredientAnalyzer,
    E: EnvironmentalScorer,
    C: Clock,
{
    #[tracing::instrument(skip_all, fields(ingredient_count = input.ingredients.len()))]
    async fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> Result<FormattedAnalysis, CoreError> {
        // 1. Validate input
        input.validate(&self.config)?;
        let AnalyzeProductInput {
            ingredients,
            user_profile,
        } = input;

        // 2. Check allergens
        tracing::debug!(progress = 20, "checking allergens");
        let allergens = check_allergens(&ingredients, &user_profile.allergies);

        // 3. Ask the external analyzer, falling back to the unavailable stand-in
        tracing::debug!(progress = 40, "analyzing ingredients");
        let analysis = self.analysis_or_fallback(&ingredients).await;

        let categories = categorize_ingredients(&ingredients, Some(&analysis));
        tracing::debug!(
            safe = categories.safe.len(),
            concerning = categories.concerning.len(),
            eco_friendly = categories.eco_friendly.len(),
            eco_concerning = categories.eco_concerning.len(),
            weighted_health = weighted_health_score(Some(&analysis.health)),
            "ingredients categorized"
        );

        // 4. Score environmental impact locally
        tracing::debug!(progress = 60, "scoring environmental impact");
        let report = self.environmental_scorer.score_ingredients(&ingredients)?;
        let environmental = EnvironmentalAnalysis::from(&report);
        tracing::debug!(
            weighted_environmental = weighted_environmental_score(Some(&environmental)),
            "environmental impact scored"
        );

        // 5. Format and combine
        tracing::debug!(progress = 80, "formatting results");
        let formatted = format_analysis_data(
            self.clock.as_ref(),
            &FormatAnalysisInput {
                ingredients,
                allergens: Some(allergens),
                health: Some(analysis.health),
                environmental: Some(environmental),
                user_profile: Some(user_profile),
            },
        );

        tracing::info!(
            progress = 100,
            score = formatted.summary.score,
            rating = %formatted.summary.rating,
            "product analysis complete"
        );

        Ok(formatted)
    }
}
