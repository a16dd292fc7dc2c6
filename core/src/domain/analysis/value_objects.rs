use crate::domain::{
    analysis::entities::UserProfile,
    common::{ScanConfig, entities::app_errors::CoreError},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeProductInput {
    pub ingredients: Vec<String>,
    pub user_profile: UserProfile,
}

impl AnalyzeProductInput {
    pub fn new(ingredients: Vec<String>, user_profile: UserProfile) -> Self {
        Self {
            ingredients,
            user_profile,
        }
    }

    pub fn validate(&self, config: &ScanConfig) -> Result<(), CoreError> {
        if self.ingredients.len() > config.max_ingredients {
            return Err(CoreError::InvalidInput(format!(
                "at most {} ingredients are accepted, got {}",
                config.max_ingredients,
                self.ingredients.len()
            )));
        }

        if let Some(too_long) = self
            .ingredients
            .iter()
            .find(|i| i.chars().count() > config.max_ingredient_length)
        {
            return Err(CoreError::InvalidInput(format!(
                "ingredient exceeds {} characters: {:.40}...",
                config.max_ingredient_length, too_long
            )));
        }

        Ok(())
    }
}
