pub mod contract;
pub mod error;
pub mod level;
pub mod text;

pub use contract::ContractType;
pub use error::AnalysisError;
pub use level::{OverallRiskLevel, RiskLevel};
pub use text::{context_window, title_case, truncate_chars};
