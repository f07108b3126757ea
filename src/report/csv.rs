//! CSV 报告
//!
//! 每次运行追加一行；文件不存在或为空时先写表头。

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ReportError;
use crate::net::RunReport;

pub const CSV_HEADER: &str = "ticks,Tx,Rx,lost,lambda,K,rho,E[N],E[T],P_IDLE,P_LOSS";

#[derive(Debug, Clone)]
pub struct CsvReporter {
    path: PathBuf,
}

impl CsvReporter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 追加一行报告
    pub fn append(&self, report: &RunReport) -> Result<(), ReportError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if file.metadata()?.len() == 0 {
            debug!(path = %self.path.display(), "写入 CSV 表头");
            writeln!(file, "{CSV_HEADER}")?;
        }
        writeln!(file, "{}", format_row(report))?;
        Ok(())
    }
}

/// 与 `CSV_HEADER` 列顺序一致的一行
pub fn format_row(r: &RunReport) -> String {
    format!(
        "{:.6},{},{},{},{:.6},{},{:.6},{:e},{:.6},{:.6},{:.6}",
        r.ticks,
        r.transmitted,
        r.received,
        r.lost,
        r.lambda,
        i64::from(r.buffer),
        r.rho,
        r.mean_queue_len,
        r.mean_sojourn_secs,
        r.p_idle,
        r.p_loss,
    )
}
