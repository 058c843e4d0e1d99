//! Portfolio-level change statistics.

pub mod performance_calculator;
pub mod performance_model;


pub use performance_calculator::calculate_performance;
pub use performance_model::PortfolioPerformance;
