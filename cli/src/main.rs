mod args;

use anyhow::{Context, Result, bail};
use clap::Parser;
use labelscan_core::{
    application::create_service,
    domain::{
        analysis::{
            AnalyzeProductInput,
            helpers::display_recommendations,
            ports::{IngredientAnalyzer, ProductAnalysisService},
        },
        common::{ScanConfig, ports::Clock, services::Service},
        environmental::ports::EnvironmentalScorer,
        formatting::entities::FormattedAnalysis,
    },
    infrastructure::{
        analyzer::StaticIngredientAnalyzer, clock::FixedClock,
        scorer::HeuristicEnvironmentalScorer,
    },
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use args::{Args, LogArgs};

/// Printed result: the formatted analysis plus the capped recommendation list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanOutput {
    #[serde(flatten)]
    analysis: FormattedAnalysis,
    top_recommendations: Vec<String>,
}

impl From<FormattedAnalysis> for ScanOutput {
    fn from(analysis: FormattedAnalysis) -> Self {
        let top_recommendations = display_recommendations(&analysis);
        Self {
            analysis,
            top_recommendations,
        }
    }
}

fn init_logger(log: &LogArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    // stdout carries the JSON result
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn scan<A, E, C>(
    service: &Service<A, E, C>,
    input: AnalyzeProductInput,
) -> Result<FormattedAnalysis>
where
    A: IngredientAnalyzer,
    E: EnvironmentalScorer,
    C: Clock,
{
    tracing::info!(
        ingredient_count = input.ingredients.len(),
        allergy_count = input.user_profile.allergies.len(),
        "scanning product"
    );

    match service.analyze_product(input).await {
        Ok(formatted) => Ok(formatted),
        Err(e) => {
            tracing::error!("Product analysis failed: {}", e);
            Err(e).context("product analysis failed")
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_logger(&args.log);

    let ingredients = args.ingredient_list();
    if ingredients.is_empty() {
        bail!("no ingredients given; pass --ingredient or --ingredients");
    }

    let input = AnalyzeProductInput::new(ingredients, args.user_profile());
    let config = ScanConfig::from(args.scan.clone());

    let formatted = match args.timestamp {
        Some(instant) => {
            let service = Service::new(
                config,
                StaticIngredientAnalyzer,
                HeuristicEnvironmentalScorer,
                FixedClock::new(instant),
            );
            scan(&service, input).await?
        }
        None => scan(&create_service(config), input).await?,
    };

    let output = ScanOutput::from(formatted);
    let output = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use labelscan_core::domain::analysis::entities::UserProfile;

    #[tokio::test]
    async fn test_output_carries_capped_recommendations() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let service = Service::new(
            ScanConfig::default(),
            StaticIngredientAnalyzer,
            HeuristicEnvironmentalScorer,
            FixedClock::new(instant),
        );
        let input = AnalyzeProductInput::new(
            vec!["sls".to_string(), "aloe vera".to_string()],
            UserProfile::default(),
        );

        let output = ScanOutput::from(scan(&service, input).await.unwrap());
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(output.top_recommendations.len(), 5);
        assert_eq!(json["topRecommendations"][0], "Consider natural alternatives");
        assert_eq!(json["timestamp"], "2024-05-01T12:00:00Z");
        assert_eq!(json["environmental"]["score"], 100);
    }
}
