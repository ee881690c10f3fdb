pub mod error;
pub mod policies;
pub mod registry;
pub mod service;
pub mod stat;

pub use error::AnalysisError;
pub use policies::{BonusFn, RevenueFn};
pub use registry::PolicyRegistry;
pub use service::{analyze, AnalysisOptions, SellerPerformanceAnalyzer};
pub use stat::SellerStat;
