//! # list 命令实现
//!
//! 列出输入目录中将被转换的文件及其目标路径，不产生任何副作用。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `batch/collector.rs`
//! - 使用 `utils/output.rs`

use crate::batch::FileCollector;
use crate::cli::list::ListArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    let extensions = args.extensions.resolve()?;
    let jobs = FileCollector::new(&args.input, &extensions.source).plan(&args.output, &extensions)?;

    for job in &jobs {
        output::print_planned(
            &job.source_path.display().to_string(),
            &job.destination_path.display().to_string(),
        );
    }

    output::print_info(&format!(
        "{} file(s) ending in '{}' under {}",
        jobs.len(),
        extensions.source,
        args.input.display()
    ));

    Ok(())
}
