//! # 数据模型模块
//!
//! 定义批处理请求、逐文件日志记录和批处理结果。
//!
//! ## 依赖关系
//! - 被 `batch/`, `report/` 和 `commands/` 使用
//! - 子模块: batch

pub mod batch;

pub use batch::{BatchOutcome, BatchRequest, BatchResult, LogEntry};
