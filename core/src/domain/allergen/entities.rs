use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::allergen::value_objects::{
    BASE_SAFETY_SCORE, COMMON_ALLERGEN_PENALTY, CROSS_CONTAMINATION_PENALTY,
    USER_ALLERGEN_PENALTY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AllergenCategory {
    #[serde(rename = "milk")]
    Milk,
    #[serde(rename = "eggs")]
    Eggs,
    #[serde(rename = "peanuts")]
    Peanuts,
    #[serde(rename = "tree nuts")]
    TreeNuts,
    #[serde(rename = "soy")]
    Soy,
    #[serde(rename = "wheat")]
    Wheat,
    #[serde(rename = "fish")]
    Fish,
    #[serde(rename = "shellfish")]
    Shellfish,
    #[serde(rename = "sesame")]
    Sesame,
    #[serde(rename = "sulfites")]
    Sulfites,
}

impl AllergenCategory {
    /// Every category, in lexicon scan order.
    pub const ALL: [AllergenCategory; 10] = [
        AllergenCategory::Milk,
        AllergenCategory::Eggs,
        AllergenCategory::Peanuts,
        AllergenCategory::TreeNuts,
        AllergenCategory::Soy,
        AllergenCategory::Wheat,
        AllergenCategory::Fish,
        AllergenCategory::Shellfish,
        AllergenCategory::Sesame,
        AllergenCategory::Sulfites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AllergenCategory::Milk => "milk",
            AllergenCategory::Eggs => "eggs",
            AllergenCategory::Peanuts => "peanuts",
            AllergenCategory::TreeNuts => "tree nuts",
            AllergenCategory::Soy => "soy",
            AllergenCategory::Wheat => "wheat",
            AllergenCategory::Fish => "fish",
            AllergenCategory::Shellfish => "shellfish",
            AllergenCategory::Sesame => "sesame",
            AllergenCategory::Sulfites => "sulfites",
        }
    }
}

impl fmt::Display for AllergenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WarningType {
    /// A category the user declared an allergy to.
    High,
    /// Cross-contamination phrase, no specific category attached.
    Warning,
    /// A common allergen the user did not declare.
    Info,
}

impl WarningType {
    pub fn penalty(&self) -> i32 {
        match self {
            WarningType::High => USER_ALLERGEN_PENALTY,
            WarningType::Warning => CROSS_CONTAMINATION_PENALTY,
            WarningType::Info => COMMON_ALLERGEN_PENALTY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllergenWarning {
    #[serde(rename = "type")]
    pub warning_type: WarningType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergen: Option<AllergenCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,
    pub message: String,
}

impl AllergenWarning {
    pub fn user_allergen(category: AllergenCategory, ingredient: String) -> Self {
        Self {
            warning_type: WarningType::High,
            allergen: Some(category),
            ingredient: Some(ingredient),
            message: format!("Contains {} - User Allergen Alert!", category),
        }
    }

    pub fn common_allergen(category: AllergenCategory, ingredient: String) -> Self {
        Self {
            warning_type: WarningType::Info,
            allergen: Some(category),
            ingredient: Some(ingredient),
            message: format!("Contains {}", category),
        }
    }

    pub fn cross_contamination(message: &str) -> Self {
        Self {
            warning_type: WarningType::Warning,
            allergen: None,
            ingredient: None,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllergenReport {
    /// Duplicate-free, in first-detection order.
    pub detected: Vec<AllergenCategory>,
    pub warnings: Vec<AllergenWarning>,
    pub has_user_allergens: bool,
    pub safety_score: u8,
}

impl AllergenReport {
    pub fn new(detected: Vec<AllergenCategory>, warnings: Vec<AllergenWarning>) -> Self {
        let has_user_allergens = warnings
            .iter()
            .any(|w| w.warning_type == WarningType::High);
        let safety_score = calculate_safety_score(&warnings);

        Self {
            detected,
            warnings,
            has_user_allergens,
            safety_score,
        }
    }

    /// Categories carried by `high` warnings, duplicate-free, in warning order.
    pub fn user_alert_categories(&self) -> Vec<AllergenCategory> {
        let mut categories = Vec::new();
        for warning in &self.warnings {
            if warning.warning_type != WarningType::High {
                continue;
            }
            if let Some(category) = warning.allergen
                && !categories.contains(&category)
            {
                categories.push(category);
            }
        }
        categories
    }
}

impl Default for AllergenReport {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

pub fn calculate_safety_score(warnings: &[AllergenWarning]) -> u8 {
    let deductions: i32 = warnings
        .iter()
        .map(|w| w.warning_type.penalty())
        .fold(0, i32::saturating_add);

    BASE_SAFETY_SCORE
        .saturating_sub(deductions)
        .clamp(0, BASE_SAFETY_SCORE) as u8
}
