pub mod entities;
pub mod heuristics;
pub mod ports;
pub mod services;

pub use entities::*;
pub use services::get_environmental_data;
