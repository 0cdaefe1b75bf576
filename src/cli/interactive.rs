//! # interactive 子命令 CLI 定义
//!
//! 根目录和新路径通过两步提示输入；其余参数同 `run`。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/interactive.rs`

use super::run::{FilterArgs, ReportArgs};
use clap::Args;

/// interactive 子命令参数
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}
