//! # 批量执行器
//!
//! 逐个（或在有界线程池中）执行转换任务，并收集每个任务的结果。
//!
//! ## 功能
//! - `jobs == 1` 时严格按列举顺序串行执行
//! - `jobs > 1` 时基于 rayon 的有界线程池并行执行
//! - 失败重试与失败策略（continue / fail / abort）
//! - 每个任务输出一行完成信息，失败时额外输出警告
//! - 结果按任务顺序汇总
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行调度

use crate::batch::job::ConversionJob;
use crate::cli::convert::FailurePolicy;
use crate::error::{BatchError, Result};
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// 重试次数上限
pub const MAX_RETRIES: u32 = 100;

/// 逐行输出目标（完成行、失败警告）
pub type LineSink = Box<dyn Fn(&str) + Send + Sync>;

/// 单个任务的最终状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Converted,
    Failed,
    Skipped,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Converted => write!(f, "converted"),
            JobStatus::Failed => write!(f, "failed"),
            JobStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// 单个任务的处理记录
#[derive(Debug, Clone)]
pub struct JobRecord {
    pub job: ConversionJob,
    pub status: JobStatus,
    /// 转换器退出码（无法启动或被信号终止时为空）
    pub exit_code: Option<i32>,
    /// 调用转换器的次数
    pub attempts: u32,
    /// 失败或跳过原因
    pub message: String,
}

impl JobRecord {
    fn converted(job: &ConversionJob, attempts: u32) -> Self {
        Self {
            job: job.clone(),
            status: JobStatus::Converted,
            exit_code: Some(0),
            attempts,
            message: String::new(),
        }
    }

    fn failed(job: &ConversionJob, error: &BatchError, attempts: u32) -> Self {
        let (exit_code, message) = match error {
            BatchError::ConverterFailed {
                status,
                code,
                stderr,
                ..
            } => {
                let first_line = stderr.lines().next().unwrap_or_default();
                let message = if first_line.is_empty() {
                    status.clone()
                } else {
                    format!("{}: {}", status, first_line)
                };
                (*code, message)
            }
            other => (None, other.to_string()),
        };

        Self {
            job: job.clone(),
            status: JobStatus::Failed,
            exit_code,
            attempts,
            message,
        }
    }

    fn skipped(job: &ConversionJob, reason: &str) -> Self {
        Self {
            job: job.clone(),
            status: JobStatus::Skipped,
            exit_code: None,
            attempts: 0,
            message: reason.to_string(),
        }
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub converted: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 所有记录（任务顺序）
    pub records: Vec<JobRecord>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, record: JobRecord) {
        match record.status {
            JobStatus::Converted => self.converted += 1,
            JobStatus::Skipped => self.skipped += 1,
            JobStatus::Failed => self.failed += 1,
        }
        self.records.push(record);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }

    /// 失败记录
    pub fn failures(&self) -> impl Iterator<Item = &JobRecord> {
        self.records
            .iter()
            .filter(|r| r.status == JobStatus::Failed)
    }

    /// 按失败策略决定整个运行是否失败
    pub fn check(&self, policy: FailurePolicy) -> Result<()> {
        match policy {
            FailurePolicy::Continue => Ok(()),
            FailurePolicy::Fail | FailurePolicy::Abort if self.failed > 0 => {
                Err(BatchError::ConversionsFailed {
                    failed: self.failed,
                    total: self.total(),
                })
            }
            FailurePolicy::Fail | FailurePolicy::Abort => Ok(()),
        }
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
    /// 失败后的额外重试次数
    retries: u32,
    policy: FailurePolicy,
    skip_existing: bool,
    show_progress: bool,
    quiet: bool,
    /// 默认写到 stdout
    completion: LineSink,
    /// 默认以 `[WARN]` 写到 stderr
    warning: LineSink,
}

impl BatchRunner {
    /// 创建新的批量执行器（0 = 每个 CPU 一个线程）
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            retries: 0,
            policy: FailurePolicy::Continue,
            skip_existing: false,
            show_progress: false,
            quiet: false,
            completion: Box::new(|line: &str| println!("{}", line)),
            warning: Box::new(output::print_warning),
        }
    }

    /// 失败后的额外重试次数（不超过 `MAX_RETRIES`）
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries.min(MAX_RETRIES);
        self
    }

    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 目标文件已存在时跳过
    pub fn skip_existing(mut self, skip: bool) -> Self {
        self.skip_existing = skip;
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// 替换完成行的输出目标
    pub fn on_completion<S>(mut self, sink: S) -> Self
    where
        S: Fn(&str) + Send + Sync + 'static,
    {
        self.completion = Box::new(sink);
        self
    }

    /// 替换失败警告的输出目标
    pub fn on_warning<S>(mut self, sink: S) -> Self
    where
        S: Fn(&str) + Send + Sync + 'static,
    {
        self.warning = Box::new(sink);
        self
    }

    /// 执行全部任务
    pub fn run<F>(&self, jobs: Vec<ConversionJob>, convert: F) -> Result<BatchResult>
    where
        F: Fn(&ConversionJob) -> Result<()> + Sync + Send,
    {
        let pb = progress::create_progress_bar(jobs.len() as u64, "Converting", self.show_progress);
        let abort = AtomicBool::new(false);

        let records: Vec<JobRecord> = if self.jobs <= 1 {
            jobs.iter()
                .map(|job| self.process(job, &convert, &abort, &pb))
                .collect()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.jobs)
                .build()?;

            pool.install(|| {
                jobs.par_iter()
                    .map(|job| self.process(job, &convert, &abort, &pb))
                    .collect()
            })
        };

        pb.finish_and_clear();

        // 汇总结果
        let mut batch_result = BatchResult::default();
        for record in records {
            batch_result.merge(record);
        }

        Ok(batch_result)
    }

    /// 处理单个任务：跳过检查 -> 调用（含重试）-> 输出完成行
    fn process<F>(
        &self,
        job: &ConversionJob,
        convert: &F,
        abort: &AtomicBool,
        pb: &ProgressBar,
    ) -> JobRecord
    where
        F: Fn(&ConversionJob) -> Result<()>,
    {
        if abort.load(Ordering::SeqCst) {
            pb.inc(1);
            return JobRecord::skipped(job, "not attempted after an earlier failure");
        }

        if self.skip_existing && job.destination_path.exists() {
            if !self.quiet {
                pb.suspend(|| {
                    output::print_skip(&format!(
                        "{} -> {} (destination exists)",
                        job.source_name, job.destination_name
                    ));
                });
            }
            pb.inc(1);
            return JobRecord::skipped(job, "destination exists");
        }

        let mut attempts = 0;
        let result = loop {
            attempts += 1;
            match convert(job) {
                Ok(()) => break Ok(()),
                Err(_) if attempts <= self.retries => continue,
                Err(e) => break Err(e),
            }
        };

        let record = match result {
            Ok(()) => JobRecord::converted(job, attempts),
            Err(e) => {
                if self.policy == FailurePolicy::Abort {
                    abort.store(true, Ordering::SeqCst);
                }
                JobRecord::failed(job, &e, attempts)
            }
        };

        pb.suspend(|| {
            (self.completion)(&output::completion_line(
                &job.source_name,
                &job.destination_name,
            ));
            // 失败警告写到 stderr，--quiet 下同样输出
            if record.status == JobStatus::Failed {
                (self.warning)(&format!(
                    "{}: {} (after {} attempt(s))",
                    job.source_name, record.message, record.attempts
                ));
            }
        });
        pb.inc(1);

        record
    }
}
