pub mod args;
pub mod calculator;
pub mod config;
pub mod estimate;
pub mod provider;
pub mod ranking;
pub mod report;
pub mod sqlite;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use calculator::StatsCalculator;
pub use config::CalculatorConfig;
pub use provider::{DataProvider, MemoryProvider};
pub use report::{build_report, Report};
pub use sqlite::SqliteProvider;
pub use stats::{OriginData, OriginStats, OriginVisitData};
