use chrono::{DateTime, Utc};
use clap::{Args as ClapArgs, Parser};
use labelscan_core::domain::{
    analysis::entities::UserProfile,
    common::{DEFAULT_MAX_INGREDIENT_LENGTH, DEFAULT_MAX_INGREDIENTS, ScanConfig},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "labelscan", version, about = "Scan a product ingredient list")]
pub struct Args {
    /// Ingredient as printed on the label (repeatable)
    #[arg(short, long = "ingredient")]
    pub ingredient: Vec<String>,

    /// Comma-separated ingredient list, appended after --ingredient values
    #[arg(long, env = "LABELSCAN_INGREDIENTS")]
    pub ingredients: Option<String>,

    /// Declared allergy, by category or variant name (repeatable)
    #[arg(short, long = "allergy")]
    pub allergy: Vec<String>,

    /// Comma-separated allergy list
    #[arg(long, env = "LABELSCAN_ALLERGIES")]
    pub allergies: Option<String>,

    /// Pin the result timestamp (RFC 3339) for reproducible output
    #[arg(long)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ScanArgs {
    #[arg(
        long = "max-ingredients",
        env = "LABELSCAN_MAX_INGREDIENTS",
        default_value_t = DEFAULT_MAX_INGREDIENTS
    )]
    pub max_ingredients: usize,

    #[arg(
        long = "max-ingredient-length",
        env = "LABELSCAN_MAX_INGREDIENT_LENGTH",
        default_value_t = DEFAULT_MAX_INGREDIENT_LENGTH
    )]
    pub max_ingredient_length: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Default filter when RUST_LOG is unset
    #[arg(long = "log-filter", env = "LABELSCAN_LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LABELSCAN_LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl Args {
    pub fn ingredient_list(&self) -> Vec<String> {
        merge_lists(&self.ingredient, self.ingredients.as_deref())
    }

    pub fn user_profile(&self) -> UserProfile {
        UserProfile {
            allergies: merge_lists(&self.allergy, self.allergies.as_deref()),
        }
    }
}

impl From<ScanArgs> for ScanConfig {
    fn from(args: ScanArgs) -> Self {
        ScanConfig {
            max_ingredients: args.max_ingredients,
            max_ingredient_length: args.max_ingredient_length,
        }
    }
}

fn merge_lists(repeated: &[String], joined: Option<&str>) -> Vec<String> {
    let mut items = repeated.to_vec();

    if let Some(joined) = joined {
        items.extend(
            joined
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from),
        );
    }

    items
}
