//! 实验编排与结果输出
//!
//! 在仿真核心之上的薄层：参数扫描（多组参数、多次重复）以及 CSV 追加写入。

pub mod csv;
pub mod sweep;

pub use self::csv::CsvReporter;
pub use sweep::{LoadSpec, SweepRun, SweepSpec, run_sweep};

use crate::sim::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("serde error")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid sweep: {0}")]
    InvalidSweep(String),
}
