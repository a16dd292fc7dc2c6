use crate::domain::{
    analysis::{
        entities::{EnvironmentalAnalysis, HealthAnalysis, IngredientAnalysis},
        ports::IngredientAnalyzer,
    },
    common::entities::app_errors::CoreError,
};

/// Offline analyzer returning a fixed sample assessment, for demos and local runs
/// without access to a hosted model.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticIngredientAnalyzer;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl StaticIngredientAnalyzer {
    pub fn sample(ingredients_analyzed: usize) -> IngredientAnalysis {
        IngredientAnalysis {
            health: HealthAnalysis {
                score: Some(75.0),
                allergens: strings(&["soy", "wheat"]),
                benefits: strings(&[
                    "Contains essential vitamins",
                    "Good source of fiber",
                    "Rich in antioxidants",
                ]),
                concerns: strings(&[
                    "Contains artificial preservatives",
                    "High sodium content",
                    "Added sugars",
                ]),
                recommendations: strings(&[
                    "Consider natural alternatives",
                    "Look for low-sodium options",
                    "Check for organic variants",
                ]),
                nutritional_score: None,
                safety_score: None,
            },
            environmental: EnvironmentalAnalysis {
                score: Some(65.0),
                positives: strings(&[
                    "Uses recyclable packaging",
                    "Sustainably sourced ingredients",
                    "Local production",
                ]),
                concerns: strings(&[
                    "Plastic packaging components",
                    "Non-renewable resources used",
                    "High water usage in production",
                ]),
                recommendations: strings(&[
                    "Look for eco-friendly packaging",
                    "Choose locally sourced products",
                    "Support sustainable brands",
                ]),
                ..Default::default()
            },
            timestamp: None,
            ingredients_analyzed,
            error: false,
            message: None,
        }
    }
}

impl IngredientAnalyzer for StaticIngredientAnalyzer {
    async fn analyze_ingredients(
        &self,
        ingredients: Vec<String>,
    ) -> Result<IngredientAnalysis, CoreError> {
        tracing::debug!(
            ingredient_count = ingredients.len(),
            "returning static sample analysis"
        );
        Ok(Self::sample(ingredients.len()))
    }
}
