use crate::domain::{
    allergen::entities::{AllergenCategory, AllergenReport},
    analysis::entities::{EnvironmentalAnalysis, HealthAnalysis},
    common::{normalize_text, ports::Clock, value_objects::ScoreRating},
    formatting::{
        classifiers::{
            categorize_benefit, categorize_concern_severity, categorize_environmental_impact,
            categorize_environmental_severity, categorize_recommendation_type,
        },
        entities::{
            AnalysisSummary, Benefit, Concern, EnvironmentalPositive, FormattedAllergens,
            FormattedAnalysis, FormattedEnvironmental, FormattedHealth, FormattedSustainability,
            Recommendation,
        },
        helpers::{format_health_score, format_ingredient_list, sanitize_score},
        value_objects::FormatAnalysisInput,
    },
};

const NOT_RATED: &str = "Not Rated";

const EXCELLENT_SUMMARY: &str = "This product shows excellent overall qualities.";
const GOOD_SUMMARY: &str = "This product has good qualities with some considerations.";
const CAUTION_SUMMARY: &str =
    "This product contains potential allergens and should be used with caution.";
const IMPROVEMENT_SUMMARY: &str = "This product has several aspects that could be improved.";

const ALLERGEN_RECOMMENDATION: &str = "Check ingredient list carefully for allergens";
const HEALTH_RECOMMENDATION: &str = "Consider alternatives with fewer synthetic ingredients";
const ENVIRONMENTAL_RECOMMENDATION: &str = "Look for more environmentally sustainable options";

/// Merge detector, scorer and analyzer output into one presentation record.
///
/// Never fails: absent sections render as empty lists and zero scores.
pub fn format_analysis_data<C: Clock + ?Sized>(
    clock: &C,
    input: &FormatAnalysisInput,
) -> FormattedAnalysis {
    let health = input.health.as_ref();
    let environmental = input.environmental.as_ref();
    let allergies = input
        .user_profile
        .as_ref()
        .map(|p| p.allergies.as_slice())
        .unwrap_or_default();

    let health_score = sanitize_score(health.and_then(|h| h.score));
    let environmental_score = sanitize_score(environmental.and_then(|e| e.score));
    let allergen_count = input
        .allergens
        .as_ref()
        .map(|a| a.detected.len())
        .unwrap_or(0);

    FormattedAnalysis {
        timestamp: clock.now(),
        ingredients: format_ingredient_list(&input.ingredients),
        health: format_health(health, input.allergens.as_ref(), allergies),
        environmental: format_environmental(environmental),
        summary: generate_summary(health_score, environmental_score, allergen_count),
    }
}

fn format_health(
    health: Option<&HealthAnalysis>,
    allergens: Option<&AllergenReport>,
    allergies: &[String],
) -> FormattedHealth {
    let Some(health) = health else {
        return FormattedHealth {
            score: 0,
            benefits: Vec::new(),
            concerns: Vec::new(),
            recommendations: Vec::new(),
            allergens: format_allergen_data(allergens, allergies),
        };
    };

    FormattedHealth {
        score: format_health_score(health.score),
        benefits: non_empty(&health.benefits)
            .map(|text| Benefit {
                text: text.to_string(),
                category: categorize_benefit(text),
            })
            .collect(),
        concerns: non_empty(&health.concerns)
            .map(|text| Concern {
                text: text.to_string(),
                severity: categorize_concern_severity(text),
            })
            .collect(),
        recommendations: format_recommendations(&health.recommendations),
        allergens: format_allergen_data(allergens, allergies),
    }
}

fn format_environmental(environmental: Option<&EnvironmentalAnalysis>) -> FormattedEnvironmental {
    let Some(environmental) = environmental else {
        return FormattedEnvironmental {
            score: 0,
            positives: Vec::new(),
            concerns: Vec::new(),
            recommendations: Vec::new(),
            sustainability: FormattedSustainability {
                score: 0,
                rating: NOT_RATED.to_string(),
            },
        };
    };

    let sustainability = environmental.sustainability.as_ref();

    FormattedEnvironmental {
        score: format_health_score(environmental.score),
        positives: non_empty(&environmental.positives)
            .map(|text| EnvironmentalPositive {
                text: text.to_string(),
                impact: categorize_environmental_impact(text),
            })
            .collect(),
        concerns: non_empty(&environmental.concerns)
            .map(|text| Concern {
                text: text.to_string(),
                severity: categorize_environmental_severity(text),
            })
            .collect(),
        recommendations: format_recommendations(&environmental.recommendations),
        sustainability: FormattedSustainability {
            score: format_health_score(sustainability.and_then(|s| s.score)),
            rating: sustainability
                .and_then(|s| s.rating.clone())
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| NOT_RATED.to_string()),
        },
    }
}

fn format_recommendations(recommendations: &[String]) -> Vec<Recommendation> {
    non_empty(recommendations)
        .map(|text| Recommendation {
            text: text.to_string(),
            recommendation_type: categorize_recommendation_type(text),
        })
        .collect()
}

fn format_allergen_data(report: Option<&AllergenReport>, allergies: &[String]) -> FormattedAllergens {
    let Some(report) = report else {
        return FormattedAllergens {
            detected: Vec::new(),
            warnings: Vec::new(),
            user_allergens: Vec::new(),
            safety_score: 100,
        };
    };

    let user_allergens = user_allergens(&report.detected, allergies);

    let alerted = report.user_alert_categories();
    if user_allergens != alerted {
        tracing::warn!(
            user_allergens = ?user_allergens,
            alerted = ?alerted,
            "user allergens disagree with allergen report alerts"
        );
    }

    FormattedAllergens {
        detected: report.detected.clone(),
        warnings: report.warnings.clone(),
        user_allergens,
        safety_score: report.safety_score,
    }
}

/// Detected categories the user's allergy list names, by category or variant.
pub fn user_allergens(detected: &[AllergenCategory], allergies: &[String]) -> Vec<AllergenCategory> {
    let normalized: Vec<String> = allergies.iter().map(|a| normalize_text(a)).collect();

    detected
        .iter()
        .copied()
        .filter(|category| category.is_named_by(&normalized))
        .collect()
}

fn generate_summary(
    health_score: f64,
    environmental_score: f64,
    allergen_count: usize,
) -> AnalysisSummary {
    let overall = ((health_score + environmental_score) / 2.0).round();

    AnalysisSummary {
        score: overall as u8,
        rating: ScoreRating::from_score(overall),
        short_summary: short_summary(overall, allergen_count).to_string(),
        recommendations: top_recommendations(health_score, environmental_score, allergen_count),
    }
}

fn short_summary(score: f64, allergen_count: usize) -> &'static str {
    if score >= 80.0 {
        EXCELLENT_SUMMARY
    } else if score >= 60.0 {
        GOOD_SUMMARY
    } else if allergen_count > 0 {
        CAUTION_SUMMARY
    } else {
        IMPROVEMENT_SUMMARY
    }
}

fn top_recommendations(
    health_score: f64,
    environmental_score: f64,
    allergen_count: usize,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if allergen_count > 0 {
        recommendations.push(ALLERGEN_RECOMMENDATION.to_string());
    }
    if health_score < 60.0 {
        recommendations.push(HEALTH_RECOMMENDATION.to_string());
    }
    if environmental_score < 60.0 {
        recommendations.push(ENVIRONMENTAL_RECOMMENDATION.to_string());
    }

    recommendations
}

fn non_empty(items: &[String]) -> impl Iterator<Item = &str> {
    items.iter().map(String::as_str).filter(|s| !s.is_empty())
}
