pub mod allergen;
pub mod analysis;
pub mod common;
pub mod environmental;
pub mod formatting;
