pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub const DEFAULT_MAX_INGREDIENTS: usize = 200;
pub const DEFAULT_MAX_INGREDIENT_LENGTH: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    pub max_ingredients: usize,
    pub max_ingredient_length: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_ingredients: DEFAULT_MAX_INGREDIENTS,
            max_ingredient_length: DEFAULT_MAX_INGREDIENT_LENGTH,
        }
    }
}

/// Lower-cases and trims an ingredient or allergy name before comparison.
pub fn normalize_text(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

/// Clamps a score to [0, 100]. Non-finite values collapse to 0.
pub fn clamp_score(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

/// Clamps and rounds a score for external exposure.
pub fn round_score(score: f64) -> u8 {
    clamp_score(score).round() as u8
}
