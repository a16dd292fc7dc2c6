use crate::domain::{
    allergen::{
        entities::{AllergenCategory, AllergenReport, AllergenWarning},
        value_objects::{CROSS_CONTAMINATION_MESSAGE, CROSS_CONTAMINATION_PHRASES},
    },
    common::normalize_text,
};

/// Scan ingredients against the allergen lexicon and the cross-contamination phrases.
///
/// Ingredient warnings keep ingredient order, then lexicon order within an
/// ingredient. Cross-contamination warnings follow, one per phrase found in
/// the space-joined text.
pub fn check_allergens<S, U>(ingredients: &[S], user_allergens: &[U]) -> AllergenReport
where
    S: AsRef<str>,
    U: AsRef<str>,
{
    let normalized_allergies: Vec<String> = user_allergens
        .iter()
        .map(|a| normalize_text(a.as_ref()))
        .collect();

    let mut detected: Vec<AllergenCategory> = Vec::new();
    let mut warnings: Vec<AllergenWarning> = Vec::new();

    for ingredient in ingredients {
        let normalized = normalize_text(ingredient.as_ref());

        for category in AllergenCategory::ALL {
            if !category.matches(&normalized) {
                continue;
            }

            if !detected.contains(&category) {
                detected.push(category);
            }

            let warning = if category.is_named_by(&normalized_allergies) {
                AllergenWarning::user_allergen(category, normalized.clone())
            } else {
                AllergenWarning::common_allergen(category, normalized.clone())
            };
            warnings.push(warning);
        }
    }

    let joined = ingredients
        .iter()
        .map(|i| i.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase();

    for phrase in CROSS_CONTAMINATION_PHRASES {
        if joined.contains(phrase) {
            warnings.push(AllergenWarning::cross_contamination(
                CROSS_CONTAMINATION_MESSAGE,
            ));
        }
    }

    let report = AllergenReport::new(detected, warnings);

    tracing::debug!(
        detected = report.detected.len(),
        warnings = report.warnings.len(),
        safety_score = report.safety_score,
        "allergen check complete"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allergen::entities::WarningType;

    fn check(ingredients: &[&str], allergies: &[&str]) -> AllergenReport {
        check_allergens(ingredients, allergies)
    }

    #[test]
    fn test_user_allergen_is_high_warning() {
        let report = check(&["whey protein"], &["milk"]);

        assert_eq!(report.detected, vec![AllergenCategory::Milk]);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].warning_type, WarningType::High);
        assert_eq!(
            report.warnings[0].message,
            "Contains milk - User Allergen Alert!"
        );
        assert_eq!(report.warnings[0].ingredient.as_deref(), Some("whey protein"));
        assert!(report.has_user_allergens);
        assert_eq!(report.safety_score, 70);
    }

    #[test]
    fn test_no_matches_yields_full_score() {
        let report = check(&["water"], &[]);

        assert!(report.detected.is_empty());
        assert!(report.warnings.is_empty());
        assert!(!report.has_user_allergens);
        assert_eq!(report.safety_score, 100);
    }

    #[test]
    fn test_cross_contamination_is_separate_warning() {
        let report = check(&["may contain peanuts"], &[]);

        assert_eq!(report.detected, vec![AllergenCategory::Peanuts]);
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.warnings[0].warning_type, WarningType::Info);
        assert_eq!(report.warnings[0].message, "Contains peanuts");
        assert_eq!(report.warnings[1].warning_type, WarningType::Warning);
        assert_eq!(report.warnings[1].allergen, None);
        assert_eq!(report.warnings[1].ingredient, None);
        assert_eq!(report.safety_score, 85);
    }

    #[test]
    fn test_cross_contamination_counted_once_per_phrase() {
        let report = check(
            &["may contain milk", "MAY CONTAIN soy", "traces of sesame"],
            &[],
        );

        let cross: Vec<_> = report
            .warnings
            .iter()
            .filter(|w| w.warning_type == WarningType::Warning)
            .collect();
        assert_eq!(cross.len(), 2);
    }

    #[test]
    fn test_phrase_spanning_two_ingredients() {
        // The joined text is "processed in a facility" even though no single entry holds it.
        let report = check(&["sugar, processed in", "a facility with eggs"], &[]);

        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.warning_type == WarningType::Warning)
        );
    }

    #[test]
    fn test_detected_is_a_set_while_warnings_repeat() {
        let report = check(&["milk", "skim milk powder", "butter"], &[]);

        assert_eq!(report.detected, vec![AllergenCategory::Milk]);
        assert_eq!(report.warnings.len(), 3);
        assert_eq!(report.safety_score, 85);
    }

    #[test]
    fn test_user_allergen_named_by_variant() {
        let report = check(&["Cheddar Cheese"], &["  LACTOSE "]);

        assert_eq!(report.warnings[0].warning_type, WarningType::High);
        assert_eq!(report.warnings[0].ingredient.as_deref(), Some("cheddar cheese"));
        assert!(report.has_user_allergens);
    }

    #[test]
    fn test_one_ingredient_can_hit_several_categories() {
        let report = check(&["peanut butter"], &["peanuts"]);

        assert_eq!(
            report.detected,
            vec![AllergenCategory::Milk, AllergenCategory::Peanuts]
        );
        assert_eq!(report.warnings[0].warning_type, WarningType::Info);
        assert_eq!(report.warnings[1].warning_type, WarningType::High);
        assert_eq!(report.safety_score, 65);
    }

    #[test]
    fn test_warnings_follow_ingredient_order() {
        let report = check(&["salmon", "tofu", "egg yolk"], &[]);

        let order: Vec<_> = report.warnings.iter().filter_map(|w| w.allergen).collect();
        assert_eq!(
            order,
            vec![
                AllergenCategory::Fish,
                AllergenCategory::Soy,
                AllergenCategory::Eggs
            ]
        );
    }

    #[test]
    fn test_safety_score_never_negative() {
        let ingredients = vec!["milk"; 10];
        let report = check(&ingredients, &["milk"]);

        assert_eq!(report.warnings.len(), 10);
        assert_eq!(report.safety_score, 0);
    }

    #[test]
    fn test_safety_score_within_bounds() {
        let cases: Vec<Vec<&str>> = vec![
            vec![],
            vec!["water", "sugar"],
            vec!["may contain traces of nuts", "processed in a facility with wheat"],
            vec!["shrimp", "crab", "tuna", "cod", "sesame oil", "sulfite", "soy"],
        ];

        for ingredients in cases {
            for allergies in [vec![], vec!["fish", "soy"]] {
                let report = check(&ingredients, &allergies);
                assert!(report.safety_score <= 100);
            }
        }
    }

    #[test]
    fn test_report_serializes_with_camel_case_fields() {
        let report = check(&["whey"], &["milk"]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["detected"][0], "milk");
        assert_eq!(json["hasUserAllergens"], true);
        assert_eq!(json["safetyScore"], 70);
        assert_eq!(json["warnings"][0]["type"], "high");
    }
}
