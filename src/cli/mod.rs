//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 批量重写 `<ObjFullPath>` 并写出 CSV 报告
//! - `check`: 只读检查，列出每个文件的当前标签内容
//! - `interactive`: 两步交互式输入（根目录、新路径）后执行批处理
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run, check, interactive

pub mod check;
pub mod interactive;
pub mod run;

use clap::{ArgAction, Parser, Subcommand};

/// objpath - CNC 程序文件路径批量替换工具
#[derive(Parser)]
#[command(name = "objpath")]
#[command(version)]
#[command(
    about = "Rewrite the <ObjFullPath> tag of CNC program files and log the outcome to a CSV report",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase diagnostic log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Replace the tag content in every matching file under a directory
    Run(run::RunArgs),

    /// List matching files and their current tag content without writing
    Check(check::CheckArgs),

    /// Ask for the directory and the new path interactively, then run
    Interactive(interactive::InteractiveArgs),
}
