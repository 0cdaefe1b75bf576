//! # 标签重写器
//!
//! 非贪婪匹配开标记与其后最近的闭标记，替换两者之间的文本。
//! 纯函数，无 I/O。未闭合的开标记视为不匹配，不做部分替换。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/check.rs` 调用
//! - 使用 `regex` crate

use crate::error::{ObjPathError, Result};

use regex::{NoExpand, Regex};

/// 下游 CNC 工具使用的路径标签
pub const DEFAULT_TAG: &str = "ObjFullPath";

/// 重写结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// 替换后的内容；未找到标签时与输入相同
    pub content: String,
    /// 是否至少存在一个完整的标签
    pub tag_present: bool,
}

/// 单一标签名的重写器
#[derive(Debug, Clone)]
pub struct TagRewriter {
    tag: String,
    pattern: Regex,
}

impl TagRewriter {
    /// 为指定标签名创建重写器
    ///
    /// 标签名须以字母或下划线开头，只含字母、数字、`_`, `-`, `.`, `:`。
    pub fn new(tag: &str) -> Result<Self> {
        if !is_valid_tag_name(tag) {
            return Err(ObjPathError::InvalidTagName(tag.to_string()));
        }

        let escaped = regex::escape(tag);
        let pattern = Regex::new(&format!(r"(?s)<{0}>(.*?)</{0}>", escaped))
            .map_err(|e| ObjPathError::InvalidTagName(format!("{}: {}", tag, e)))?;

        Ok(Self {
            tag: tag.to_string(),
            pattern,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// 将每个标签的内容替换为 `replacement`
    ///
    /// `replacement` 原样插入，不展开 `$1` 之类的捕获组引用。
    pub fn rewrite(&self, content: &str, replacement: &str) -> Rewrite {
        if !self.pattern.is_match(content) {
            return Rewrite {
                content: content.to_string(),
                tag_present: false,
            };
        }

        let element = format!("<{0}>{1}</{0}>", self.tag, replacement);
        let updated = self.pattern.replace_all(content, NoExpand(&element));

        Rewrite {
            content: updated.into_owned(),
            tag_present: true,
        }
    }

    /// 返回所有标签当前的内容（按出现顺序）
    pub fn find<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

impl Default for TagRewriter {
    fn default() -> Self {
        Self::new(DEFAULT_TAG).expect("default tag name is valid")
    }
}

fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}
