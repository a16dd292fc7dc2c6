pub mod classifiers;
pub mod entities;
pub mod helpers;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use helpers::{format_health_score, format_ingredient_list, format_percentage};
pub use services::format_analysis_data;
pub use value_objects::FormatAnalysisInput;
