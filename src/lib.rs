pub mod category;
pub mod checker;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod persist;
pub mod report;

pub use category::Category;
pub use checker::DataChecker;
pub use error::{CheckError, Result};
pub use models::{AggregateResult, CheckResult};
