//! # 统一错误处理模块
//!
//! 定义 modelbatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! 致命错误（目录无法读取/创建、参数非法）会终止整个运行；
//! 单个转换任务的错误在 `batch::runner` 中转为 `JobOutcome`，
//! 只有在失败策略要求时才会以 `ConversionsFailed` 上抛。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// modelbatch 统一错误类型
#[derive(Error, Debug)]
pub enum BatchError {
    // ─────────────────────────────────────────────────────────────
    // 目录错误（致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to read directory: {path}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory: {path}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 报告输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 外部转换器错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to launch converter '{command}': {reason}")]
    ConverterLaunch { command: String, reason: String },

    #[error("Converter '{command}' exited with {status}\n{stderr}")]
    ConverterFailed {
        command: String,
        status: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to build worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{failed} of {total} conversion(s) failed")]
    ConversionsFailed { failed: usize, total: usize },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_csv_error_reason_only_in_source() {
        let dir = tempfile::tempdir().unwrap();
        let csv_err = csv::Writer::from_path(dir.path().join("missing").join("r.csv"))
            .err()
            .expect("parent directory is missing");
        let err = BatchError::from(csv_err);

        assert_eq!(err.to_string(), "CSV error");
        let cause = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(!cause.is_empty());
        assert!(!err.to_string().contains(&cause));
    }
}
