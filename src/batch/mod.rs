//! # 批量转换模块
//!
//! 枚举输入目录、构建转换任务、调用外部转换器并汇总结果。
//!
//! ## 功能
//! - 非递归收集匹配扩展名的文件
//! - 由文件名推导目标路径
//! - 串行或有界并行地调用外部转换器
//! - 结果汇总与 CSV 报告
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod converter;
pub mod job;
pub mod report;
pub mod runner;

pub use collector::FileCollector;
pub use converter::ExternalConverter;
pub use runner::{BatchResult, BatchRunner};
