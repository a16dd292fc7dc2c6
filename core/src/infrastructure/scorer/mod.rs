pub mod heuristic_scorer;

pub use heuristic_scorer::HeuristicEnvironmentalScorer;
