//! # 文件收集器
//!
//! 列出输入目录下（不递归）文件名以源扩展名结尾的条目。
//!
//! ## 功能
//! - 保持文件系统的列举顺序，不排序
//! - 精确、区分大小写的后缀匹配
//! - 跳过子目录和非 UTF-8 文件名
//! - 目录无法打开或读取时立即报错
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs`, `commands/list.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::batch::job::{ConversionJob, ExtensionPair};
use crate::error::{BatchError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 源扩展名
    extension: String,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            input: input.into(),
            extension: extension.to_string(),
        }
    }

    /// 收集所有匹配的文件名（列举顺序）
    pub fn collect(&self) -> Result<Vec<String>> {
        if !self.input.exists() {
            return Err(BatchError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }
        if !self.input.is_dir() {
            return Err(BatchError::InvalidArgument(format!(
                "'{}' is not a directory",
                self.input.display()
            )));
        }

        let walker = WalkDir::new(&self.input).min_depth(1).max_depth(1);

        let mut names = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| BatchError::DirectoryRead {
                path: self.input.display().to_string(),
                source: e.into(),
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(self.extension.as_str()) {
                    names.push(name.to_string());
                }
            }
        }

        Ok(names)
    }

    /// 收集并构建转换任务
    pub fn plan(&self, output_dir: &Path, extensions: &ExtensionPair) -> Result<Vec<ConversionJob>> {
        let jobs = self
            .collect()?
            .iter()
            .filter_map(|name| ConversionJob::from_name(name, &self.input, output_dir, extensions))
            .collect();
        Ok(jobs)
    }
}
