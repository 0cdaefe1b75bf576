//! # objpath - CNC 程序文件路径批量替换工具
//!
//! 在目录树中查找 `.hop` / `.ganx` 文件，将 `<ObjFullPath>` 标签的内容
//! 替换为新路径，并把每个文件的处理结果写入 CSV 报告。
//!
//! ## 子命令
//! - `run`         - 批量替换并写出报告
//! - `check`       - 只读检查当前标签内容
//! - `interactive` - 交互式输入目录和新路径
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (文件收集与批处理)
//!   │     ├── tag/     (标签重写)
//!   │     ├── report/  (CSV 报告)
//!   │     └── models/  (数据模型)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod report;
mod tag;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    utils::logging::init(cli.verbose, !cli.no_color);
    utils::interrupt::install();

    if let Err(e) = commands::run(cli.command, cli.verbose > 0) {
        utils::output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
