//! # check 子命令 CLI 定义
//!
//! 只读检查，不修改任何文件，也不写报告。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/check.rs`

use super::run::FilterArgs;
use clap::Args;
use std::path::PathBuf;

/// check 子命令参数
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Root directory to search recursively
    pub root: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Only list files that do not contain the tag
    #[arg(long, default_value_t = false)]
    pub missing_only: bool,
}
