use crate::domain::environmental::entities::{EnvironmentalEntry, Impact};

/// Exact-match lookup on a normalized ingredient name.
pub fn lookup(normalized_ingredient: &str) -> Option<EnvironmentalEntry> {
    let entry = match normalized_ingredient {
        // preservatives and synthetics
        "sodium benzoate" => EnvironmentalEntry::concern(Impact::High, "synthetic preservative"),
        "bht" => EnvironmentalEntry::concern(Impact::High, "synthetic antioxidant"),
        "parabens" => EnvironmentalEntry::concern(Impact::High, "synthetic preservative"),

        // plant-based
        "aloe vera" => EnvironmentalEntry::positive(Impact::Low, "sustainable plant-based"),
        "coconut oil" => EnvironmentalEntry::positive(Impact::Medium, "renewable resource"),
        "shea butter" => EnvironmentalEntry::positive(Impact::Low, "sustainable harvesting"),

        "sls" => EnvironmentalEntry::concern(Impact::High, "aquatic toxicity"),
        "petroleum" => EnvironmentalEntry::concern(Impact::High, "non-renewable resource"),
        "microbeads" => EnvironmentalEntry::concern(Impact::High, "plastic pollution"),
        _ => return None,
    };

    Some(entry)
}
