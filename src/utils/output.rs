//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! 每个转换任务的完成行是约定格式的纯文本，不加颜色，
//! 便于下游脚本按行解析。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 完成行文本
pub fn completion_line(from: &str, to: &str) -> String {
    format!("Conversion completed: {} -> {}", from, to)
}

/// 打印计划中的转换
pub fn print_planned(from: &str, to: &str) {
    println!("{} {} {}", from, "->".cyan(), to);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_line() {
        assert_eq!(
            completion_line("a.fbx", "a.json"),
            "Conversion completed: a.fbx -> a.json"
        );
    }
}
