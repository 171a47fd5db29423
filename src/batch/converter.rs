//! # 外部转换器调用
//!
//! 以 `converter <source> <destination>` 的形式调用外部转换程序
//! （如 `assimp2json`），阻塞等待其退出。
//!
//! 转换器的格式语义、JSON 结构和退出码约定均不在本工具的职责内：
//! 这里只区分"无法启动"与"非零退出"，不检查输出文件是否生成。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `batch/job.rs` 的 ConversionJob

use crate::batch::job::ConversionJob;
use crate::error::{BatchError, Result};

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// 外部转换器
#[derive(Debug, Clone)]
pub struct ExternalConverter {
    program: PathBuf,
}

impl ExternalConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// 执行一次转换，捕获子进程的 stdout/stderr
    pub fn convert(&self, job: &ConversionJob) -> Result<()> {
        let output = Command::new(&self.program)
            .arg(&job.source_path)
            .arg(&job.destination_path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| BatchError::ConverterLaunch {
                command: self.program.display().to_string(),
                reason: e.to_string(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(BatchError::ConverterFailed {
                command: self.program.display().to_string(),
                status: describe_status(&output.status),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// 退出状态的可读描述（被信号终止时没有退出码）
fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::batch::job::ExtensionPair;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    // 以 /bin/sh 充当转换器：源文件本身就是脚本，$1 是目标路径
    fn job_with_script(dir: &Path, script: &str) -> ConversionJob {
        fs::write(dir.join("model.fbx"), script).unwrap();
        ConversionJob::from_name("model.fbx", dir, dir, &ExtensionPair::default()).unwrap()
    }

    #[test]
    fn test_convert_success_passes_two_arguments() {
        let dir = tempdir().unwrap();
        let job = job_with_script(dir.path(), "printf '%s' \"$#\" > \"$1\"\n");

        ExternalConverter::new("/bin/sh").convert(&job).unwrap();

        // sh 把源文件当作 $0，剩下一个参数即目标路径
        let written = fs::read_to_string(&job.destination_path).unwrap();
        assert_eq!(written, "1");
    }

    #[test]
    fn test_convert_non_zero_exit() {
        let dir = tempdir().unwrap();
        let job = job_with_script(dir.path(), "echo 'bad header' >&2\nexit 3\n");

        let err = ExternalConverter::new("/bin/sh").convert(&job).unwrap_err();
        match err {
            BatchError::ConverterFailed {
                code, stderr, status, ..
            } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "bad header");
                assert_eq!(status, "exit code 3");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!job.destination_path.exists());
    }

    #[test]
    fn test_convert_missing_executable() {
        let dir = tempdir().unwrap();
        let job = job_with_script(dir.path(), "exit 0\n");

        let converter = ExternalConverter::new(dir.path().join("no-such-converter"));
        let err = converter.convert(&job).unwrap_err();
        assert!(matches!(err, BatchError::ConverterLaunch { .. }));
    }
}
