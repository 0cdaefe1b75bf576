//! # 统一错误处理模块
//!
//! 定义 objpath 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的读写失败不会出现在这里：它们记录在 `LogEntry` 中，
//! 不会越过批处理边界。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::path::PathBuf;
use thiserror::Error;

/// objpath 统一错误类型
#[derive(Error, Debug)]
pub enum ObjPathError {
    // ─────────────────────────────────────────────────────────────
    // 输入校验错误（在处理任何文件之前拒绝）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid root directory: {path} (does not exist or is not a directory)")]
    InvalidRoot { path: String },

    #[error("Replacement value must not be empty")]
    EmptyReplacement,

    #[error("No file extensions given")]
    NoExtensions,

    #[error("Invalid tag name: {0}")]
    InvalidTagName(String),

    // ─────────────────────────────────────────────────────────────
    // 报告错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: ReportWriteCause,
    },

    #[error("No report directory available (no desktop, home or current directory)")]
    NoReportDirectory,
}

/// 报告写入失败的底层原因
#[derive(Error, Debug)]
pub enum ReportWriteCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ObjPathError>;
