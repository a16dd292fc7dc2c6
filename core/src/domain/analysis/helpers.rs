use crate::domain::{
    analysis::entities::{EnvironmentalAnalysis, HealthAnalysis, IngredientAnalysis, IngredientCategories},
    formatting::entities::FormattedAnalysis,
};

/// Cap on the merged health + environmental recommendation list shown to the user.
pub const MAX_DISPLAY_RECOMMENDATIONS: usize = 5;

/// Sort ingredients into safe/concerning and eco buckets by looking for them
/// inside the analyzer's free-text concerns and positives.
pub fn categorize_ingredients<S: AsRef<str>>(
    ingredients: &[S],
    analysis: Option<&IngredientAnalysis>,
) -> IngredientCategories {
    let Some(analysis) = analysis else {
        return IngredientCategories::default();
    };

    let mut categories = IngredientCategories {
        allergens: analysis.health.allergens.clone(),
        ..Default::default()
    };

    let health_concerns = lowercase_all(&analysis.health.concerns);
    let eco_positives = lowercase_all(&analysis.environmental.positives);
    let eco_concerns = lowercase_all(&analysis.environmental.concerns);

    for ingredient in ingredients {
        let ingredient = ingredient.as_ref();
        let needle = ingredient.to_lowercase();
        let mentioned_in = |texts: &[String]| texts.iter().any(|t| t.contains(&needle));

        if mentioned_in(&health_concerns) {
            categories.concerning.push(ingredient.to_string());
        } else {
            categories.safe.push(ingredient.to_string());
        }

        if mentioned_in(&eco_positives) {
            categories.eco_friendly.push(ingredient.to_string());
        } else if mentioned_in(&eco_concerns) {
            categories.eco_concerning.push(ingredient.to_string());
        }
    }

    categories
}

/// 40% nutrition, 30% safety, 30% allergen load (10 points per listed allergen).
pub fn weighted_health_score(health: Option<&HealthAnalysis>) -> f64 {
    let Some(health) = health else {
        return 0.0;
    };

    let nutritional = health.nutritional_score.unwrap_or(0.0);
    let safety = health.safety_score.unwrap_or(0.0);
    let allergens = 100.0 - health.allergens.len() as f64 * 10.0;

    nutritional * 0.4 + safety * 0.3 + allergens * 0.3
}

/// 40% sustainability, 30% packaging, 30% carbon footprint.
pub fn weighted_environmental_score(environmental: Option<&EnvironmentalAnalysis>) -> f64 {
    let Some(environmental) = environmental else {
        return 0.0;
    };

    let sustainability = environmental
        .sustainability
        .as_ref()
        .and_then(|s| s.score)
        .unwrap_or(0.0);
    let packaging = environmental
        .packaging
        .as_ref()
        .and_then(|s| s.score)
        .unwrap_or(0.0);
    let carbon_footprint = environmental
        .carbon_footprint
        .as_ref()
        .and_then(|s| s.score)
        .unwrap_or(0.0);

    sustainability * 0.4 + packaging * 0.3 + carbon_footprint * 0.3
}

/// Health then environmental recommendation texts, capped for display.
pub fn display_recommendations(analysis: &FormattedAnalysis) -> Vec<String> {
    analysis
        .health
        .recommendations
        .iter()
        .chain(analysis.environmental.recommendations.iter())
        .map(|r| r.text.clone())
        .filter(|text| !text.is_empty())
        .take(MAX_DISPLAY_RECOMMENDATIONS)
        .collect()
}

fn lowercase_all(texts: &[String]) -> Vec<String> {
    texts.iter().map(|t| t.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            analysis::{
                entities::{SubScoreAnalysis, SustainabilityAnalysis},
                ports::IngredientAnalyzer,
            },
            environmental::get_environmental_data,
            formatting::{FormatAnalysisInput, format_analysis_data},
        },
        infrastructure::{analyzer::StaticIngredientAnalyzer, clock::FixedClock},
    };
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn sample_analysis() -> IngredientAnalysis {
        IngredientAnalysis {
            health: HealthAnalysis {
                allergens: vec!["soy".into()],
                concerns: vec!["Contains artificial preservatives like Sodium Benzoate".into()],
                ..Default::default()
            },
            environmental: EnvironmentalAnalysis {
                positives: vec!["Aloe vera is sustainably sourced".into()],
                concerns: vec!["Palm oil drives deforestation".into()],
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_categorize_ingredients() {
        let analysis = sample_analysis();
        let categories = categorize_ingredients(
            &["sodium benzoate", "Aloe Vera", "palm oil", "water"],
            Some(&analysis),
        );

        assert_eq!(categories.allergens, vec!["soy"]);
        assert_eq!(categories.concerning, vec!["sodium benzoate"]);
        assert_eq!(categories.safe, vec!["Aloe Vera", "palm oil", "water"]);
        assert_eq!(categories.eco_friendly, vec!["Aloe Vera"]);
        assert_eq!(categories.eco_concerning, vec!["palm oil"]);
    }

    #[test]
    fn test_categorize_without_analysis_is_empty() {
        let categories = categorize_ingredients(&["water"], None);
        assert_eq!(categories, IngredientCategories::default());
    }

    #[test]
    fn test_weighted_health_score() {
        let health = HealthAnalysis {
            nutritional_score: Some(80.0),
            safety_score: Some(60.0),
            allergens: vec!["soy".into(), "wheat".into()],
            ..Default::default()
        };

        // 32 + 18 + 24
        assert_relative_eq!(weighted_health_score(Some(&health)), 74.0);
        assert_relative_eq!(weighted_health_score(None), 0.0);
    }

    #[test]
    fn test_weighted_environmental_score_uses_sub_scores() {
        let report = get_environmental_data(&["aloe vera"]).unwrap();
        let environmental = EnvironmentalAnalysis::from(&report);

        // packaging and carbon footprint are placeholders at 0
        assert_relative_eq!(weighted_environmental_score(Some(&environmental)), 40.0);

        let environmental = EnvironmentalAnalysis {
            sustainability: Some(SustainabilityAnalysis {
                score: Some(50.0),
                rating: None,
            }),
            packaging: Some(SubScoreAnalysis { score: Some(100.0) }),
            carbon_footprint: None,
            ..Default::default()
        };
        assert_relative_eq!(weighted_environmental_score(Some(&environmental)), 50.0);
    }

    #[tokio::test]
    async fn test_display_recommendations_capped_at_five() {
        let ingredients = vec!["sls".to_string(), "aloe vera".to_string()];
        let analysis = StaticIngredientAnalyzer
            .analyze_ingredients(ingredients.clone())
            .await
            .unwrap();
        let environmental = get_environmental_data(&ingredients).unwrap();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

        let formatted = format_analysis_data(
            &clock,
            &FormatAnalysisInput {
                ingredients,
                health: Some(analysis.health),
                environmental: Some(EnvironmentalAnalysis::from(&environmental)),
                ..Default::default()
            },
        );

        let recommendations = display_recommendations(&formatted);

        assert_eq!(recommendations.len(), MAX_DISPLAY_RECOMMENDATIONS);
        assert_eq!(recommendations[0], "Consider natural alternatives");
        assert_eq!(
            recommendations[3],
            "Consider alternatives to synthetic preservatives"
        );
    }
}
