pub mod static_analyzer;

pub use static_analyzer::StaticIngredientAnalyzer;
