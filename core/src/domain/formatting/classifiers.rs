use crate::domain::formatting::entities::{BenefitCategory, Level, RecommendationType};

/// Ordered keyword rules; the first rule with a keyword found in the text wins.
type Rules<T> = &'static [(&'static [&'static str], T)];

const BENEFIT_RULES: Rules<BenefitCategory> = &[
    (&["nutrient", "vitamin"], BenefitCategory::Nutritional),
    (&["skin", "hair"], BenefitCategory::Cosmetic),
];

const HEALTH_CONCERN_RULES: Rules<Level> = &[
    (&["high", "severe"], Level::High),
    (&["moderate"], Level::Medium),
];

const RECOMMENDATION_RULES: Rules<RecommendationType> = &[
    (&["avoid", "stop"], RecommendationType::Warning),
    (&["consider", "try"], RecommendationType::Suggestion),
];

const ENVIRONMENTAL_POSITIVE_RULES: Rules<Level> = &[
    (&["renewable", "sustainable"], Level::High),
    (&["biodegradable"], Level::Medium),
];

const ENVIRONMENTAL_CONCERN_RULES: Rules<Level> = &[
    (&["toxic", "pollutant"], Level::High),
    (&["non-renewable", "waste"], Level::Medium),
];

fn classify<T: Copy>(text: &str, rules: Rules<T>, fallback: T) -> T {
    let text = text.to_lowercase();

    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(_, label)| *label)
        .unwrap_or(fallback)
}

pub fn categorize_benefit(benefit: &str) -> BenefitCategory {
    classify(benefit, BENEFIT_RULES, BenefitCategory::General)
}

pub fn categorize_concern_severity(concern: &str) -> Level {
    classify(concern, HEALTH_CONCERN_RULES, Level::Low)
}

pub fn categorize_recommendation_type(recommendation: &str) -> RecommendationType {
    classify(recommendation, RECOMMENDATION_RULES, RecommendationType::Info)
}

pub fn categorize_environmental_impact(positive: &str) -> Level {
    classify(positive, ENVIRONMENTAL_POSITIVE_RULES, Level::Low)
}

pub fn categorize_environmental_severity(concern: &str) -> Level {
    classify(concern, ENVIRONMENTAL_CONCERN_RULES, Level::Low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benefit_categories() {
        assert_eq!(
            categorize_benefit("Contains essential VITAMINS"),
            BenefitCategory::Nutritional
        );
        assert_eq!(
            categorize_benefit("Soothes dry skin"),
            BenefitCategory::Cosmetic
        );
        assert_eq!(
            categorize_benefit("Good source of fiber"),
            BenefitCategory::General
        );
    }

    #[test]
    fn test_first_rule_wins() {
        // Both "nutrient" and "hair" appear; the nutritional rule is listed first.
        assert_eq!(
            categorize_benefit("Nutrient boost for hair"),
            BenefitCategory::Nutritional
        );
        assert_eq!(
            categorize_recommendation_type("Consider whether to stop using it"),
            RecommendationType::Warning
        );
    }

    #[test]
    fn test_concern_severity() {
        assert_eq!(categorize_concern_severity("High sodium content"), Level::High);
        assert_eq!(categorize_concern_severity("Severe irritant"), Level::High);
        assert_eq!(
            categorize_concern_severity("Moderate sugar levels"),
            Level::Medium
        );
        assert_eq!(categorize_concern_severity("Added sugars"), Level::Low);
    }

    #[test]
    fn test_recommendation_types() {
        assert_eq!(
            categorize_recommendation_type("Avoid if pregnant"),
            RecommendationType::Warning
        );
        assert_eq!(
            categorize_recommendation_type("Try a fragrance-free variant"),
            RecommendationType::Suggestion
        );
        assert_eq!(
            categorize_recommendation_type("Check for organic variants"),
            RecommendationType::Info
        );
    }

    #[test]
    fn test_environmental_positive_impact() {
        assert_eq!(
            categorize_environmental_impact("Sustainable sourcing"),
            Level::High
        );
        assert_eq!(
            categorize_environmental_impact("Renewable inputs"),
            Level::High
        );
        // substring match: "sustainably" does not contain "sustainable"
        assert_eq!(
            categorize_environmental_impact("Sustainably sourced ingredients"),
            Level::Low
        );
        assert_eq!(
            categorize_environmental_impact("Biodegradable formula"),
            Level::Medium
        );
        assert_eq!(
            categorize_environmental_impact("Local production"),
            Level::Low
        );
    }

    #[test]
    fn test_environmental_concern_severity() {
        assert_eq!(
            categorize_environmental_severity("sls: aquatic toxicity"),
            Level::High
        );
        assert_eq!(
            categorize_environmental_severity("Non-renewable resources used"),
            Level::Medium
        );
        assert_eq!(
            categorize_environmental_severity("Plastic packaging components"),
            Level::Low
        );
    }
}
