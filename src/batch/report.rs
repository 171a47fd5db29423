//! # 批量结果报告
//!
//! 运行结束后的汇总输出与可选的 CSV 报告。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/runner.rs` 的 BatchResult
//! - 使用 `tabled` 显示失败列表，`csv` + `serde` 写入报告

use crate::batch::runner::BatchResult;
use crate::error::{BatchError, Result};
use crate::utils::output;

use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 失败列表的表格行
#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Exit")]
    exit: String,
    #[tabled(rename = "Attempts")]
    attempts: u32,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// CSV 报告行
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    source: &'a str,
    destination: &'a str,
    status: String,
    exit_code: Option<i32>,
    attempts: u32,
    message: &'a str,
}

/// 打印汇总信息（失败任务以表格列出）
pub fn print_summary(result: &BatchResult, output_dir: &Path) {
    if result.failed > 0 {
        let rows: Vec<FailureRow> = result
            .failures()
            .map(|r| FailureRow {
                source: r.job.source_name.clone(),
                exit: r
                    .exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                attempts: r.attempts,
                reason: r.message.clone(),
            })
            .collect();

        output::print_header(&format!("{} Failed Conversion(s)", rows.len()));
        println!("{}", Table::new(&rows));
        println!();
    }

    output::print_done(&format!(
        "Converted {} of {} file(s) into '{}' ({} failed, {} skipped)",
        result.converted,
        result.total(),
        output_dir.display(),
        result.failed,
        result.skipped
    ));
}

/// CSV 报告写入器
///
/// 在批量运行之前创建，报告路径不可写时尽早失败。
pub struct ReportWriter {
    wtr: csv::Writer<File>,
    path: PathBuf,
}

impl ReportWriter {
    /// 创建（或截断）报告文件
    pub fn create(path: &Path) -> Result<Self> {
        let wtr = csv::Writer::from_path(path)?;
        Ok(Self {
            wtr,
            path: path.to_path_buf(),
        })
    }

    /// 写入全部记录
    pub fn write(mut self, result: &BatchResult) -> Result<()> {
        for record in &result.records {
            self.wtr.serialize(ReportRow {
                source: &record.job.source_name,
                destination: &record.job.destination_name,
                status: record.status.to_string(),
                exit_code: record.exit_code,
                attempts: record.attempts,
                message: &record.message,
            })?;
        }

        self.wtr.flush().map_err(|e| BatchError::FileWriteError {
            path: self.path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::job::{ConversionJob, ExtensionPair};
    use crate::batch::runner::{JobRecord, JobStatus};
    use std::fs;
    use tempfile::tempdir;

    fn record(name: &str, status: JobStatus, exit_code: Option<i32>, message: &str) -> JobRecord {
        let job = ConversionJob::from_name(
            name,
            Path::new("in"),
            Path::new("out"),
            &ExtensionPair::default(),
        )
        .unwrap();
        JobRecord {
            job,
            status,
            exit_code,
            attempts: if status == JobStatus::Skipped { 0 } else { 1 },
            message: message.to_string(),
        }
    }

    #[test]
    fn test_write_report() {
        let mut result = BatchResult::default();
        result.merge(record("a.fbx", JobStatus::Converted, Some(0), ""));
        result.merge(record("b.fbx", JobStatus::Failed, Some(2), "exit code 2, bad file"));
        result.merge(record("c.fbx", JobStatus::Skipped, None, "destination exists"));

        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");
        ReportWriter::create(&path).unwrap().write(&result).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "source,destination,status,exit_code,attempts,message"
        );
        assert_eq!(lines[1], "a.fbx,a.json,converted,0,1,");
        assert_eq!(lines[2], "b.fbx,b.json,failed,2,1,\"exit code 2, bad file\"");
        assert_eq!(lines[3], "c.fbx,c.json,skipped,,0,destination exists");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_create_fails_for_missing_parent() {
        let dir = tempdir().unwrap();
        let err = ReportWriter::create(&dir.path().join("missing").join("report.csv"));
        assert!(matches!(err, Err(BatchError::CsvError(_))));
    }
}
