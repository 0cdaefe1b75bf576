//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `report/`, `models/`, `utils/`
//! - 子模块: batch, check, interactive, run

pub mod batch;
pub mod check;
pub mod interactive;
pub mod run;

use crate::cli::Commands;

/// 执行命令
pub fn run(cmd: Commands, verbose: bool) -> anyhow::Result<()> {
    match cmd {
        Commands::Run(args) => run::execute(args, verbose)?,
        Commands::Check(args) => check::execute(args)?,
        Commands::Interactive(args) => interactive::execute(args, verbose)?,
    }
    Ok(())
}
