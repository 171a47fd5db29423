//! # convert 命令实现
//!
//! 对输入目录中每个匹配扩展名的文件调用一次外部转换器。
//!
//! ## 流程
//! 1. 创建输出目录（递归，幂等），失败即终止
//! 2. 非递归列出输入目录，失败即终止
//! 3. 逐个调用转换器，每个文件输出一行完成信息
//! 4. 汇总结果，按失败策略决定退出状态
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/` 的收集器、转换器、执行器与报告
//! - 使用 `utils/output.rs`

use crate::batch::report::{self, ReportWriter};
use crate::batch::{BatchResult, BatchRunner, ExternalConverter, FileCollector};
use crate::cli::convert::ConvertArgs;
use crate::error::{BatchError, Result};
use crate::utils::output;

use std::fs;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let result = run(&args)?;
    result.check(args.on_failure)
}

/// 执行转换并返回汇总结果（不应用失败策略的退出判定）
pub fn run(args: &ConvertArgs) -> Result<BatchResult> {
    run_with(args, |line: &str| println!("{}", line))
}

/// 同 `run`，完成行写入 `completion`
pub fn run_with<S>(args: &ConvertArgs, completion: S) -> Result<BatchResult>
where
    S: Fn(&str) + Send + Sync + 'static,
{
    let extensions = args.extensions.resolve()?;

    if !args.quiet {
        output::print_header(&format!(
            "Converting {} -> {} with {}",
            extensions.source,
            extensions.destination,
            args.converter.display()
        ));
    }

    // 创建输出目录
    fs::create_dir_all(&args.output).map_err(|e| BatchError::DirectoryCreate {
        path: args.output.display().to_string(),
        source: e,
    })?;

    // 报告文件在转换前打开，路径错误不会浪费整批转换
    let report_writer = match args.report {
        Some(ref path) => Some(ReportWriter::create(path)?),
        None => None,
    };

    // 收集输入文件
    let jobs = FileCollector::new(&args.input, &extensions.source).plan(&args.output, &extensions)?;

    if !args.quiet {
        if jobs.is_empty() {
            output::print_warning(&format!(
                "No files ending in '{}' under {}",
                extensions.source,
                args.input.display()
            ));
        } else {
            output::print_info(&format!(
                "Found {} file(s) to convert (jobs: {}, on failure: {})",
                jobs.len(),
                args.jobs,
                args.on_failure
            ));
        }
    }

    let converter = ExternalConverter::new(&args.converter);
    let result = BatchRunner::new(args.jobs)
        .retries(args.retries)
        .policy(args.on_failure)
        .skip_existing(args.skip_existing)
        .show_progress(args.progress)
        .quiet(args.quiet)
        .on_completion(completion)
        .run(jobs, |job| converter.convert(job))?;

    if !args.quiet {
        report::print_summary(&result, &args.output);
    }

    if let (Some(writer), Some(report_path)) = (report_writer, &args.report) {
        writer.write(&result)?;
        if !args.quiet {
            output::print_success(&format!("Report saved to '{}'", report_path.display()));
        }
    }

    Ok(result)
}
