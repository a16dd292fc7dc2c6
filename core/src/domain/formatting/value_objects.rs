use crate::domain::{
    allergen::entities::AllergenReport,
    analysis::entities::{EnvironmentalAnalysis, HealthAnalysis, UserProfile},
};

/// Everything the formatter merges for one scan. Absent parts render as empty or zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatAnalysisInput {
    pub ingredients: Vec<String>,
    pub allergens: Option<AllergenReport>,
    pub health: Option<HealthAnalysis>,
    pub environmental: Option<EnvironmentalAnalysis>,
    pub user_profile: Option<UserProfile>,
}
