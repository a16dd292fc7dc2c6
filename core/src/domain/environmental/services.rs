use crate::domain::{
    common::{
        entities::app_errors::CoreError, normalize_text, round_score,
        value_objects::ScoreRating,
    },
    environmental::{
        entities::{EnvironmentalReport, Impact, PlaceholderScore, SustainabilityScore},
        heuristics,
    },
};

pub const ENVIRONMENTAL_FAILURE_MESSAGE: &str = "Failed to analyze environmental impact";

const CONCERN_RECOMMENDATIONS: [&str; 2] = [
    "Consider alternatives to synthetic preservatives",
    "Look for products with natural, biodegradable ingredients",
];

const POSITIVE_RECOMMENDATIONS: [&str; 2] = [
    "Continue choosing products with natural, sustainable ingredients",
    "Support brands that prioritize environmental responsibility",
];

const GENERAL_RECOMMENDATIONS: [&str; 2] = [
    "Check for eco-friendly packaging options",
    "Research brand sustainability practices",
];

/// Score ingredients against the environmental heuristic table.
///
/// The raw sum is normalized with `(raw + 50) * 2` and clamped, so a neutral
/// list scores 100 and only a clear majority of high-impact ingredients pulls
/// it down.
#[tracing::instrument(skip_all, fields(ingredient_count = ingredients.len()))]
pub fn get_environmental_data<S: AsRef<str>>(
    ingredients: &[S],
) -> Result<EnvironmentalReport, CoreError> {
    let mut raw_score: i32 = 0;
    let mut concerns = Vec::new();
    let mut positives = Vec::new();

    for ingredient in ingredients {
        let ingredient = ingredient.as_ref();
        let Some(entry) = heuristics::lookup(&normalize_text(ingredient)) else {
            continue;
        };

        raw_score = accumulate(raw_score, entry.impact)?;

        if let Some(concern) = entry.concern {
            concerns.push(format!("{}: {}", ingredient, concern));
        }
        if let Some(positive) = entry.positive {
            positives.push(format!("{}: {}", ingredient, positive));
        }
    }

    let normalized = normalize_raw_score(raw_score);
    let score = round_score(normalized);
    let recommendations = generate_recommendations(&concerns, &positives);

    tracing::debug!(raw_score, score, "environmental scoring complete");

    Ok(EnvironmentalReport {
        score,
        positives,
        concerns,
        recommendations,
        sustainability: SustainabilityScore {
            score,
            rating: ScoreRating::from_score(normalized),
        },
        packaging: PlaceholderScore::default(),
        carbon_footprint: PlaceholderScore::default(),
    })
}

/// Adds one ingredient's impact to the running raw score.
fn accumulate(raw_score: i32, impact: Impact) -> Result<i32, CoreError> {
    raw_score.checked_add(impact.score()).ok_or_else(|| {
        tracing::error!(raw_score, "Error analyzing environmental impact: raw score overflow");
        CoreError::AnalysisFailed(ENVIRONMENTAL_FAILURE_MESSAGE.to_string())
    })
}

fn normalize_raw_score(raw_score: i32) -> f64 {
    ((i64::from(raw_score) + 50) * 2).clamp(0, 100) as f64
}

fn generate_recommendations(concerns: &[String], positives: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !concerns.is_empty() {
        recommendations.extend(CONCERN_RECOMMENDATIONS.iter().map(|r| r.to_string()));
    }
    if !positives.is_empty() {
        recommendations.extend(POSITIVE_RECOMMENDATIONS.iter().map(|r| r.to_string()));
    }
    recommendations.extend(GENERAL_RECOMMENDATIONS.iter().map(|r| r.to_string()));

    recommendations
}
