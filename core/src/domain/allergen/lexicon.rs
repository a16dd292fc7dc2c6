use crate::domain::allergen::entities::AllergenCategory;

const MILK: &[&str] = &[
    "milk", "dairy", "whey", "casein", "lactose", "cream", "butter", "cheese", "yogurt",
];
const EGGS: &[&str] = &["egg", "albumin", "globulin", "lecithin", "livetin", "lysozyme"];
const PEANUTS: &[&str] = &["peanut", "arachis", "nuts", "goober", "groundnut"];
const TREE_NUTS: &[&str] = &[
    "almond",
    "cashew",
    "walnut",
    "pecan",
    "pistachio",
    "macadamia",
    "hazelnut",
    "brazil nut",
];
const SOY: &[&str] = &["soy", "soya", "glycine", "edamame", "tofu", "tempeh"];
const WHEAT: &[&str] = &[
    "wheat", "flour", "gluten", "spelt", "durum", "kamut", "semolina",
];
const FISH: &[&str] = &[
    "fish", "cod", "salmon", "tuna", "tilapia", "bass", "anchovy",
];
const SHELLFISH: &[&str] = &[
    "shellfish", "crab", "lobster", "shrimp", "prawn", "crayfish", "oyster", "mussel", "clam",
];
const SESAME: &[&str] = &["sesame", "tahini", "sesamol", "gingelly"];
const SULFITES: &[&str] = &[
    "sulfite",
    "sulphite",
    "sulfur dioxide",
    "metabisulfite",
    "metabisulphite",
];

impl AllergenCategory {
    /// Name variants that identify this category inside an ingredient.
    pub fn variants(&self) -> &'static [&'static str] {
        match self {
            AllergenCategory::Milk => MILK,
            AllergenCategory::Eggs => EGGS,
            AllergenCategory::Peanuts => PEANUTS,
            AllergenCategory::TreeNuts => TREE_NUTS,
            AllergenCategory::Soy => SOY,
            AllergenCategory::Wheat => WHEAT,
            AllergenCategory::Fish => FISH,
            AllergenCategory::Shellfish => SHELLFISH,
            AllergenCategory::Sesame => SESAME,
            AllergenCategory::Sulfites => SULFITES,
        }
    }

    /// Substring match of any variant against an already-normalized ingredient.
    pub fn matches(&self, normalized_ingredient: &str) -> bool {
        self.variants()
            .iter()
            .any(|variant| normalized_ingredient.contains(variant))
    }

    /// True when a normalized allergy list names this category directly or by one of its variants.
    pub fn is_named_by<S: AsRef<str>>(&self, normalized_allergies: &[S]) -> bool {
        normalized_allergies.iter().any(|allergy| {
            let allergy = allergy.as_ref();
            allergy == self.as_str() || self.variants().iter().any(|v| *v == allergy)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_variants() {
        for category in AllergenCategory::ALL {
            assert!(!category.variants().is_empty(), "{category} has no variants");
        }
    }

    #[test]
    fn test_matches_is_substring_based() {
        assert!(AllergenCategory::Milk.matches("whey protein concentrate"));
        assert!(AllergenCategory::Wheat.matches("enriched wheat flour"));
        assert!(AllergenCategory::TreeNuts.matches("roasted brazil nuts"));
        assert!(!AllergenCategory::Sesame.matches("sunflower oil"));
    }

    #[test]
    fn test_nut_variant_overlap() {
        // "nuts" is a peanut variant, so tree nut products also flag peanuts.
        assert!(AllergenCategory::Peanuts.matches("mixed tree nuts"));
    }

    #[test]
    fn test_is_named_by_category_or_variant() {
        assert!(AllergenCategory::Milk.is_named_by(&["milk"]));
        assert!(AllergenCategory::Milk.is_named_by(&["lactose"]));
        assert!(AllergenCategory::TreeNuts.is_named_by(&["tree nuts"]));
        assert!(!AllergenCategory::Milk.is_named_by(&["whey protein"]));
        assert!(!AllergenCategory::Fish.is_named_by(&[] as &[&str]));
    }
}
