//! # 批量处理模块
//!
//! 在目录树中查找 CNC 文件并逐个重写 `<ObjFullPath>` 标签。
//!
//! ## 功能
//! - 按扩展名收集文件列表
//! - 顺序处理，逐文件记录结果
//! - 通过观察者报告进度
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `tag/` 重写标签

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchObserver, BatchRunner, Progress};
