pub mod entities;
pub mod lexicon;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::check_allergens;
