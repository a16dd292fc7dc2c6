use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::value_objects::ScoreRating;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    /// Contribution to the raw sustainability score.
    pub fn score(&self) -> i32 {
        match self {
            Impact::Low => 10,
            Impact::Medium => 5,
            Impact::High => -5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentalEntry {
    pub impact: Impact,
    pub concern: Option<&'static str>,
    pub positive: Option<&'static str>,
}

impl EnvironmentalEntry {
    pub const fn concern(impact: Impact, concern: &'static str) -> Self {
        Self {
            impact,
            concern: Some(concern),
            positive: None,
        }
    }

    pub const fn positive(impact: Impact, positive: &'static str) -> Self {
        Self {
            impact,
            concern: None,
            positive: Some(positive),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SustainabilityScore {
    pub score: u8,
    pub rating: ScoreRating,
}

/// Sub-score not computed yet; always zero with no recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlaceholderScore {
    pub score: u8,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalReport {
    pub score: u8,
    pub positives: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
    pub sustainability: SustainabilityScore,
    pub packaging: PlaceholderScore,
    pub carbon_footprint: PlaceholderScore,
}
