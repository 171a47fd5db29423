//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 调用外部转换器批量转换
//! - `list`: 列出计划中的转换
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, list

pub mod convert;
pub mod list;

use clap::{Parser, Subcommand};

/// modelbatch - 3D 模型批量转换工具
#[derive(Parser)]
#[command(name = "modelbatch")]
#[command(version)]
#[command(about = "Batch-convert 3D model files to JSON with an external converter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert every matching file in a directory with the external converter
    Convert(convert::ConvertArgs),

    /// Show which files would be converted and where the output would go
    List(list::ListArgs),
}
