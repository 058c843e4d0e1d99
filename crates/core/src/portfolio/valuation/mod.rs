//! Portfolio value series derivation.

pub mod valuation_calculator;
pub mod valuation_model;


pub use valuation_calculator::calculate_portfolio_series;
pub use valuation_model::PortfolioValuePoint;
