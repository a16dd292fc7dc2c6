use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    allergen::entities::{AllergenCategory, AllergenWarning},
    common::value_objects::ScoreRating,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BenefitCategory {
    Nutritional,
    Cosmetic,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Warning,
    Suggestion,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattedIngredient {
    pub name: String,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Benefit {
    pub text: String,
    pub category: BenefitCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Concern {
    pub text: String,
    pub severity: Level,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub text: String,
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EnvironmentalPositive {
    pub text: String,
    pub impact: Level,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAllergens {
    pub detected: Vec<AllergenCategory>,
    pub warnings: Vec<AllergenWarning>,
    pub user_allergens: Vec<AllergenCategory>,
    pub safety_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattedHealth {
    pub score: u8,
    pub benefits: Vec<Benefit>,
    pub concerns: Vec<Concern>,
    pub recommendations: Vec<Recommendation>,
    pub allergens: FormattedAllergens,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattedSustainability {
    pub score: u8,
    pub rating: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattedEnvironmental {
    pub score: u8,
    pub positives: Vec<EnvironmentalPositive>,
    pub concerns: Vec<Concern>,
    pub recommendations: Vec<Recommendation>,
    pub sustainability: FormattedSustainability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub score: u8,
    pub rating: ScoreRating,
    pub short_summary: String,
    pub recommendations: Vec<String>,
}

/// Presentation-ready record for one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormattedAnalysis {
    pub timestamp: DateTime<Utc>,
    pub ingredients: Vec<FormattedIngredient>,
    pub health: FormattedHealth,
    pub environmental: FormattedEnvironmental,
    pub summary: AnalysisSummary,
}
