use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::environmental::entities::EnvironmentalReport;

/// Accepts any JSON value for a score; anything but a number becomes `None`.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthAnalysis {
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub nutritional_score: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub safety_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SustainabilityAnalysis {
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default)]
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubScoreAnalysis {
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalAnalysis {
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default)]
    pub positives: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability: Option<SustainabilityAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<SubScoreAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_footprint: Option<SubScoreAnalysis>,
}

impl From<&EnvironmentalReport> for EnvironmentalAnalysis {
    fn from(report: &EnvironmentalReport) -> Self {
        Self {
            score: Some(f64::from(report.score)),
            positives: report.positives.clone(),
            concerns: report.concerns.clone(),
            recommendations: report.recommendations.clone(),
            sustainability: Some(SustainabilityAnalysis {
                score: Some(f64::from(report.sustainability.score)),
                rating: Some(report.sustainability.rating.to_string()),
            }),
            packaging: Some(SubScoreAnalysis {
                score: Some(f64::from(report.packaging.score)),
            }),
            carbon_footprint: Some(SubScoreAnalysis {
                score: Some(f64::from(report.carbon_footprint.score)),
            }),
        }
    }
}

/// Health and environmental assessment returned by the external ingredient analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAnalysis {
    #[serde(default)]
    pub health: HealthAnalysis,
    #[serde(default)]
    pub environmental: EnvironmentalAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ingredients_analyzed: usize,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IngredientAnalysis {
    /// Stand-in used when the analyzer fails, so the scan still renders.
    pub fn unavailable(ingredients_analyzed: usize, timestamp: DateTime<Utc>) -> Self {
        Self {
            health: HealthAnalysis {
                score: Some(0.0),
                allergens: Vec::new(),
                benefits: vec!["Analysis unavailable".to_string()],
                concerns: vec!["Could not analyze ingredients".to_string()],
                recommendations: vec![
                    "Please try again or check ingredient list manually".to_string(),
                ],
                nutritional_score: None,
                safety_score: None,
            },
            environmental: EnvironmentalAnalysis {
                score: Some(0.0),
                positives: Vec::new(),
                concerns: vec!["Analysis unavailable".to_string()],
                recommendations: vec!["Please try again".to_string()],
                ..Default::default()
            },
            timestamp: Some(timestamp),
            ingredients_analyzed,
            error: true,
            message: Some("Failed to analyze ingredients".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[serde(default)]
    pub allergies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientCategories {
    pub safe: Vec<String>,
    pub concerning: Vec<String>,
    pub allergens: Vec<String>,
    pub eco_friendly: Vec<String>,
    pub eco_concerning: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_numeric_scores_deserialize_as_none() {
        let health: HealthAnalysis = serde_json::from_value(json!({
            "score": "eighty",
            "benefits": ["Rich in vitamin C"],
        }))
        .unwrap();

        assert_eq!(health.score, None);
        assert_eq!(health.benefits, vec!["Rich in vitamin C"]);
        assert!(health.concerns.is_empty());
    }

    #[test]
    fn test_analyzer_payload_deserializes() {
        let analysis: IngredientAnalysis = serde_json::from_value(json!({
            "health": {
                "score": 72.5,
                "allergens": ["soy"],
                "benefits": [],
                "concerns": ["High sugar"],
                "recommendations": ["Avoid daily use"]
            },
            "environmental": {
                "score": 61,
                "positives": ["Recyclable"],
                "concerns": [],
                "recommendations": []
            },
            "ingredientsAnalyzed": 3
        }))
        .unwrap();

        assert_eq!(analysis.health.score, Some(72.5));
        assert_eq!(analysis.environmental.score, Some(61.0));
        assert_eq!(analysis.ingredients_analyzed, 3);
        assert!(!analysis.error);
    }

    #[test]
    fn test_unavailable_analysis() {
        let now = Utc::now();
        let analysis = IngredientAnalysis::unavailable(4, now);

        assert!(analysis.error);
        assert_eq!(analysis.ingredients_analyzed, 4);
        assert_eq!(analysis.health.score, Some(0.0));
        assert_eq!(analysis.environmental.concerns, vec!["Analysis unavailable"]);
        assert_eq!(analysis.timestamp, Some(now));
    }
}
