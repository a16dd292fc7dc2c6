/// Label phrases signalling shared-equipment risk, matched against the joined ingredient text.
pub const CROSS_CONTAMINATION_PHRASES: [&str; 4] = [
    "may contain",
    "processed in a facility",
    "manufactured on shared equipment",
    "traces of",
];

pub const CROSS_CONTAMINATION_MESSAGE: &str = "Potential cross-contamination warning detected";

pub const BASE_SAFETY_SCORE: i32 = 100;
pub const USER_ALLERGEN_PENALTY: i32 = 30;
pub const CROSS_CONTAMINATION_PENALTY: i32 = 10;
pub const COMMON_ALLERGEN_PENALTY: i32 = 5;
