//! # run 子命令 CLI 定义
//!
//! 非交互式批处理：根目录和新路径都由参数给出。
//! 这里也定义了 `check` 和 `interactive` 共用的过滤与报告参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs`, `cli/check.rs`, `cli/interactive.rs` 使用
//! - 参数传递给 `commands/run.rs`

use crate::models::batch::DEFAULT_EXTENSIONS;
use crate::report::DEFAULT_PREFIX;
use crate::tag::DEFAULT_TAG;

use clap::Args;
use std::path::PathBuf;

/// 文件过滤参数
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// File name suffix to process (case-sensitive, repeatable)
    #[arg(short, long = "ext", value_name = "SUFFIX", default_values_t = DEFAULT_EXTENSIONS.map(String::from))]
    pub extensions: Vec<String>,

    /// Name of the tag whose content is replaced
    #[arg(long, default_value = DEFAULT_TAG)]
    pub tag: String,
}

/// 报告参数
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Directory for the CSV report (default: desktop, then home directory)
    #[arg(long, env = "OBJPATH_REPORT_DIR")]
    pub report_dir: Option<PathBuf>,

    /// File name prefix of the CSV report
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub report_prefix: String,

    /// Do not write a CSV report
    #[arg(long, default_value_t = false)]
    pub no_report: bool,
}

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Root directory to search recursively
    pub root: PathBuf,

    /// New content for the tag (inserted verbatim)
    #[arg(short, long)]
    pub replacement: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}
