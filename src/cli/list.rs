//! # list 子命令 CLI 定义
//!
//! 只列出将要执行的转换，不创建目录、不调用转换器
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/list.rs`

use super::convert::ExtensionArgs;
use clap::Args;
use std::path::PathBuf;

/// list 子命令参数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Input directory containing model files
    #[arg(short, long, env = "MODELBATCH_INPUT_DIR")]
    pub input: PathBuf,

    /// Output directory the converted files would be written to
    #[arg(short, long, env = "MODELBATCH_OUTPUT_DIR", default_value = ".")]
    pub output: PathBuf,

    #[command(flatten)]
    pub extensions: ExtensionArgs,
}
