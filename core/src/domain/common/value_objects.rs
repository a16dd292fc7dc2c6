use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Step rating shared by the sustainability sub-score and the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreRating::Excellent
        } else if score >= 60.0 {
            ScoreRating::Good
        } else if score >= 40.0 {
            ScoreRating::Fair
        } else {
            ScoreRating::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreRating::Excellent => "Excellent",
            ScoreRating::Good => "Good",
            ScoreRating::Fair => "Fair",
            ScoreRating::Poor => "Poor",
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
