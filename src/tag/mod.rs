//! # 标签重写模块
//!
//! 定位并替换 `<ObjFullPath>...</ObjFullPath>` 这类 XML 风格标签的内容。
//! 不是通用的 XML 解析器：只处理单一标签名的成对标记。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/check.rs` 使用
//! - 使用 `regex` crate

pub mod rewriter;

pub use rewriter::{TagRewriter, DEFAULT_TAG};
