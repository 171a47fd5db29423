//! # convert 子命令 CLI 定义
//!
//! 调用外部转换器把输入目录中的模型文件批量转换为 JSON。
//! 所有路径均可通过命令行或环境变量提供。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/list.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::batch::job::ExtensionPair;
use crate::batch::runner::MAX_RETRIES;
use crate::error::Result;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 单个转换失败时的处理策略
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the failure and keep going; exit successfully
    Continue,
    /// Keep going, but exit with an error if any conversion failed
    Fail,
    /// Stop starting new conversions after the first failure
    Abort,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::Continue => write!(f, "continue"),
            FailurePolicy::Fail => write!(f, "fail"),
            FailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

/// 源/目标扩展名参数
#[derive(Args, Debug, Clone)]
pub struct ExtensionArgs {
    /// Extension of the input files (case-sensitive suffix match)
    #[arg(long, default_value = ".fbx", env = "MODELBATCH_SOURCE_EXT")]
    pub source_ext: String,

    /// Extension given to the converted files
    #[arg(long, default_value = ".json", env = "MODELBATCH_DEST_EXT")]
    pub dest_ext: String,
}

impl ExtensionArgs {
    /// 校验并规范化扩展名
    pub fn resolve(&self) -> Result<ExtensionPair> {
        ExtensionPair::new(&self.source_ext, &self.dest_ext)
    }
}

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the external converter executable (e.g. assimp2json)
    #[arg(short, long, env = "MODELBATCH_CONVERTER")]
    pub converter: PathBuf,

    /// Input directory containing model files
    #[arg(short, long, env = "MODELBATCH_INPUT_DIR")]
    pub input: PathBuf,

    /// Output directory for converted files (created if missing)
    #[arg(short, long, env = "MODELBATCH_OUTPUT_DIR")]
    pub output: PathBuf,

    #[command(flatten)]
    pub extensions: ExtensionArgs,

    /// What to do when a conversion fails
    #[arg(long, value_enum, default_value = "continue", env = "MODELBATCH_ON_FAILURE")]
    pub on_failure: FailurePolicy,

    /// Re-run a failed conversion up to N more times (at most 100)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(..=MAX_RETRIES as i64))]
    pub retries: u32,

    /// Number of parallel conversions (0 = one per CPU)
    #[arg(short, long, default_value_t = 1, env = "MODELBATCH_JOBS")]
    pub jobs: usize,

    /// Do not convert files whose output already exists
    #[arg(long, default_value_t = false)]
    pub skip_existing: bool,

    /// Write a per-file CSV report
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Show a progress bar on stderr
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Only print the per-file completion lines
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
