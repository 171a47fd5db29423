//! # modelbatch - 3D 模型批量转换工具
//!
//! 对目录中的每个模型文件（默认 `.fbx`）调用一次外部转换器
//! （如 `assimp2json`），把结果写入输出目录中同名的 `.json` 文件。
//!
//! ## 子命令
//! - `convert` - 批量调用外部转换器
//! - `list`    - 仅列出计划中的转换
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     └── batch/     (收集、调用、汇总)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        // 附带底层原因（如 "Permission denied"）
        let mut msg = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        utils::output::print_error(&msg);
        std::process::exit(1);
    }
}
