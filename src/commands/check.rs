//! # check 命令实现
//!
//! 列出匹配的文件及其当前标签内容，不写回，不生成报告。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `batch/runner.rs` 的只读检查
//! - 使用 `utils/output.rs`

use crate::batch::BatchRunner;
use crate::cli::check::CheckArgs;
use crate::error::{ObjPathError, Result};
use crate::models::batch::normalize_extensions;
use crate::tag::TagRewriter;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 检查结果行
#[derive(Debug, Clone, Tabled)]
struct CheckRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Tag")]
    found: String,
    #[tabled(rename = "Current value")]
    value: String,
}

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    output::print_header(&format!("Checking <{}>", args.filter.tag));

    if !args.root.is_dir() {
        return Err(ObjPathError::InvalidRoot {
            path: args.root.display().to_string(),
        });
    }

    let rewriter = TagRewriter::new(&args.filter.tag)?;
    let extensions = normalize_extensions(args.filter.extensions)?;

    let inspections = BatchRunner::new(rewriter).inspect(&args.root, &extensions);
    if inspections.is_empty() {
        output::print_warning(&format!(
            "No files matching {} under {}",
            extensions.join(", "),
            args.root.display()
        ));
        return Ok(());
    }

    let total = inspections.len();
    let found = inspections.iter().filter(|i| i.entry.tag_found()).count();

    let rows: Vec<CheckRow> = inspections
        .iter()
        .filter(|i| !args.missing_only || !i.entry.tag_found())
        .map(|i| {
            let found = match i.entry.failure() {
                Some(_) => "error",
                None if i.entry.tag_found() => "yes",
                None => "no",
            };
            let value = match i.entry.failure() {
                Some(failure) => failure.to_string(),
                None => i.values.join("; "),
            };
            CheckRow {
                file: i.entry.file_path().display().to_string(),
                found: found.to_string(),
                value,
            }
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }

    output::print_done(&format!(
        "{} of {} files contain <{}>",
        found,
        total,
        args.filter.tag
    ));

    Ok(())
}
