//! # 批处理执行与汇总
//!
//! `run` 和 `interactive` 共用：执行批处理、写报告、打印汇总。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/interactive.rs` 调用
//! - 使用 `batch/`, `report/`, `utils/output.rs`, `utils/progress.rs`

use crate::batch::BatchRunner;
use crate::cli::run::ReportArgs;
use crate::error::ObjPathError;
use crate::models::{BatchOutcome, BatchRequest, BatchResult, LogEntry};
use crate::report::ReportWriter;
use crate::tag::TagRewriter;
use crate::utils::output;
use crate::utils::progress::ProgressObserver;

use std::error::Error as _;
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 汇总表
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Files")]
    files: usize,
    #[tabled(rename = "Tag found")]
    found: usize,
    #[tabled(rename = "Updated")]
    updated: usize,
    #[tabled(rename = "Failed")]
    failed: usize,
}

/// 执行批处理、写出报告并打印汇总
///
/// 没有匹配文件时只打印警告，不写报告。
pub fn execute_batch(
    request: &BatchRequest,
    rewriter: TagRewriter,
    report: &ReportArgs,
    verbose: bool,
) {
    output::print_info(&format!(
        "Searching '{}' for {} files...",
        request.root_directory().display(),
        request.extensions().join(", ")
    ));

    let tag = rewriter.tag().to_string();
    let runner = BatchRunner::new(rewriter);
    let mut observer = ProgressObserver::new(&format!("Rewriting <{}>", tag), verbose);

    let (entries, cancelled) = match runner.run(request, &mut observer) {
        BatchOutcome::NoMatchingFiles => {
            output::print_warning("No matching files found.");
            return;
        }
        BatchOutcome::Completed { entries, cancelled } => (entries, cancelled),
    };

    if cancelled {
        output::print_warning(&format!(
            "Interrupted after {} files; remaining files were not touched.",
            entries.len()
        ));
    }

    let report_path = if report.no_report {
        None
    } else {
        write_report(report, &entries)
    };

    let result = BatchResult {
        entries,
        report_path,
    };
    print_summary(&result);

    match &result.report_path {
        Some(path) => output::print_done(&format!("Finished. Report: {}", path.display())),
        None if report.no_report => output::print_done("Finished."),
        None => output::print_warning("Finished, but the report could not be written."),
    }
}

/// 写报告；失败时打印原因并返回 `None`
fn write_report(report: &ReportArgs, entries: &[LogEntry]) -> Option<PathBuf> {
    let writer = match &report.report_dir {
        Some(dir) => Ok(ReportWriter::new(dir)),
        None => ReportWriter::default_location(),
    };

    match writer.and_then(|w| w.with_prefix(&report.report_prefix).write(entries)) {
        Ok(path) => Some(path),
        Err(e) => {
            output::print_error(&describe(&e));
            None
        }
    }
}

fn describe(e: &ObjPathError) -> String {
    match e.source() {
        Some(source) => format!("{}: {}", e, source),
        None => e.to_string(),
    }
}

fn print_summary(result: &BatchResult) {
    let row = SummaryRow {
        files: result.entries.len(),
        found: result.found_count(),
        updated: result.updated_count(),
        failed: result.failed_count(),
    };
    println!("{}", Table::new([row]));

    let missing = result.entries.len() - result.found_count();
    if missing > 0 {
        output::print_info(&format!("{} files did not contain the tag.", missing));
    }
}
