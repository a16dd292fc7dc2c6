use crate::domain::{
    common::{clamp_score, round_score},
    formatting::entities::FormattedIngredient,
};

/// Non-numeric scores count as 0; the rest are clamped to [0, 100].
pub fn sanitize_score(score: Option<f64>) -> f64 {
    score.map(clamp_score).unwrap_or(0.0)
}

pub fn format_health_score(score: Option<f64>) -> u8 {
    round_score(sanitize_score(score))
}

pub fn format_percentage(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{:.*}%", decimals, value),
        _ => "0%".to_string(),
    }
}

pub fn format_ingredient_list<S: AsRef<str>>(ingredients: &[S]) -> Vec<FormattedIngredient> {
    ingredients
        .iter()
        .map(|i| i.as_ref().trim())
        .filter(|i| !i.is_empty())
        .map(|name| FormattedIngredient {
            name: name.to_string(),
            formatted: capitalize_first(name),
        })
        .collect()
}

/// Upper-cases the first character and lower-cases the remainder.
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
