//! # 报告模块
//!
//! 将批处理记录导出为 CSV 报告（可直接用表格软件打开）。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: writer

pub mod writer;

pub use writer::{ReportWriter, DEFAULT_PREFIX};
