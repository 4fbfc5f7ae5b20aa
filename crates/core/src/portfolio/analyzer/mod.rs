//! Pipeline orchestration.

mod analyzer_service;


pub use analyzer_service::PortfolioAnalyzer;
