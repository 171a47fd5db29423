//! # 转换任务
//!
//! 由输入文件名推导出一次转换所需的源路径与目标路径。
//!
//! ## 规则
//! - 扩展名匹配为精确的、区分大小写的后缀匹配
//! - 目标文件名 = 源文件名去掉末尾源扩展名后拼接目标扩展名
//! - 目标文件名只依赖文件名，与文件内容无关
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs`, `batch/runner.rs`, `commands/` 使用

use crate::error::{BatchError, Result};

use std::path::{Path, PathBuf};

/// 源/目标扩展名对（均以 `.` 开头）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPair {
    pub source: String,
    pub destination: String,
}

impl ExtensionPair {
    /// 创建扩展名对，缺少前导 `.` 时自动补齐
    pub fn new(source: &str, destination: &str) -> Result<Self> {
        Ok(Self {
            source: normalize_extension(source)?,
            destination: normalize_extension(destination)?,
        })
    }
}

impl Default for ExtensionPair {
    fn default() -> Self {
        Self {
            source: ".fbx".to_string(),
            destination: ".json".to_string(),
        }
    }
}

/// 规范化扩展名：`fbx` -> `.fbx`，空值报错
pub fn normalize_extension(ext: &str) -> Result<String> {
    let ext = ext.trim();
    if ext.is_empty() || ext == "." {
        return Err(BatchError::InvalidArgument(
            "extension must not be empty".to_string(),
        ));
    }
    if ext.contains('/') || ext.contains('\\') {
        return Err(BatchError::InvalidArgument(format!(
            "extension '{}' must not contain a path separator",
            ext
        )));
    }

    if ext.starts_with('.') {
        Ok(ext.to_string())
    } else {
        Ok(format!(".{}", ext))
    }
}

/// 计算目标文件名；文件名不以源扩展名结尾时返回 `None`
pub fn destination_name(name: &str, extensions: &ExtensionPair) -> Option<String> {
    name.strip_suffix(extensions.source.as_str())
        .map(|stem| format!("{}{}", stem, extensions.destination))
}

/// 单个转换任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// 源文件名（不含目录）
    pub source_name: String,
    /// 目标文件名（不含目录）
    pub destination_name: String,
    /// inputDir/source_name
    pub source_path: PathBuf,
    /// outputDir/destination_name
    pub destination_path: PathBuf,
}

impl ConversionJob {
    /// 由目录项名称构建任务，不匹配源扩展名时返回 `None`
    pub fn from_name(
        name: &str,
        input_dir: &Path,
        output_dir: &Path,
        extensions: &ExtensionPair,
    ) -> Option<Self> {
        let destination_name = destination_name(name, extensions)?;

        Some(Self {
            source_name: name.to_string(),
            source_path: input_dir.join(name),
            destination_path: output_dir.join(&destination_name),
            destination_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_name_swaps_extension() {
        let ext = ExtensionPair::default();
        assert_eq!(destination_name("a.fbx", &ext).as_deref(), Some("a.json"));
        assert_eq!(
            destination_name("building_A.fbx", &ext).as_deref(),
            Some("building_A.json")
        );
        // 只替换末尾的扩展名
        assert_eq!(
            destination_name("road.fbx.fbx", &ext).as_deref(),
            Some("road.fbx.json")
        );
        assert_eq!(
            destination_name("car.v2.fbx", &ext).as_deref(),
            Some("car.v2.json")
        );
    }

    #[test]
    fn test_destination_name_rejects_non_matching() {
        let ext = ExtensionPair::default();
        assert_eq!(destination_name("notes.txt", &ext), None);
        assert_eq!(destination_name("a.fbx.bak", &ext), None);
        assert_eq!(destination_name("fbx", &ext), None);
        // 区分大小写
        assert_eq!(destination_name("A.FBX", &ext), None);
        assert_eq!(destination_name("a.Fbx", &ext), None);
    }

    #[test]
    fn test_destination_name_custom_pair() {
        let ext = ExtensionPair::new("obj", ".assbin.json").unwrap();
        assert_eq!(ext.source, ".obj");
        assert_eq!(
            destination_name("tree.obj", &ext).as_deref(),
            Some("tree.assbin.json")
        );
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("fbx").unwrap(), ".fbx");
        assert_eq!(normalize_extension(".fbx").unwrap(), ".fbx");
        assert_eq!(normalize_extension(" .glb ").unwrap(), ".glb");
        assert!(normalize_extension("").is_err());
        assert!(normalize_extension(".").is_err());
        assert!(normalize_extension("a/b").is_err());
    }

    #[test]
    fn test_job_paths() {
        let ext = ExtensionPair::default();
        let job =
            ConversionJob::from_name("a.fbx", Path::new("in"), Path::new("out/json"), &ext)
                .unwrap();

        assert_eq!(job.source_name, "a.fbx");
        assert_eq!(job.destination_name, "a.json");
        assert_eq!(job.source_path, Path::new("in").join("a.fbx"));
        assert_eq!(job.destination_path, Path::new("out/json").join("a.json"));

        assert!(
            ConversionJob::from_name("notes.txt", Path::new("in"), Path::new("out"), &ext)
                .is_none()
        );
    }
}
