//! # run 命令实现
//!
//! 校验参数后执行批处理。
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `commands/batch.rs`

use crate::cli::run::RunArgs;
use crate::commands::batch::execute_batch;
use crate::error::Result;
use crate::models::BatchRequest;
use crate::tag::TagRewriter;
use crate::utils::output;

/// 执行 run 命令
pub fn execute(args: RunArgs, verbose: bool) -> Result<()> {
    output::print_header(&format!("Rewriting <{}>", args.filter.tag));

    let rewriter = TagRewriter::new(&args.filter.tag)?;
    let request = BatchRequest::new(&args.root, args.filter.extensions, args.replacement)?;

    execute_batch(&request, rewriter, &args.report, verbose);
    Ok(())
}
