//! # 批处理数据模型
//!
//! 一次批处理的输入（`BatchRequest`）、逐文件记录（`LogEntry`）
//! 以及最终结果（`BatchOutcome`, `BatchResult`）。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 创建和消费
//! - 被 `report/writer.rs` 序列化
//! - 使用 `error.rs`

use crate::error::{ObjPathError, Result};

use std::fmt;
use std::path::{Path, PathBuf};

/// 默认处理的 CNC 文件扩展名
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".hop", ".ganx"];

/// 单个文件的失败阶段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFailure {
    /// 读取或 UTF-8 解码失败
    Read(String),
    /// 写回失败（标签已找到）
    Write(String),
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFailure::Read(reason) => write!(f, "read failed: {}", reason),
            FileFailure::Write(reason) => write!(f, "write failed: {}", reason),
        }
    }
}

/// 单个文件的处理记录
///
/// 每个匹配扩展名的文件恰好产生一条记录，创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    file_path: PathBuf,
    tag_found: bool,
    was_updated: bool,
    failure: Option<FileFailure>,
}

impl LogEntry {
    /// 标签已替换并写回
    pub fn updated(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            tag_found: true,
            was_updated: true,
            failure: None,
        }
    }

    /// 文件可读，但不含标签
    pub fn tag_missing(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            tag_found: false,
            was_updated: false,
            failure: None,
        }
    }

    /// 标签存在且未写回（只检查模式）
    pub fn tag_present(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            tag_found: true,
            was_updated: false,
            failure: None,
        }
    }

    /// 读取失败
    pub fn read_failed(file_path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            tag_found: false,
            was_updated: false,
            failure: Some(FileFailure::Read(reason.into())),
        }
    }

    /// 标签已找到但写回失败
    pub fn write_failed(file_path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            tag_found: true,
            was_updated: false,
            failure: Some(FileFailure::Write(reason.into())),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn tag_found(&self) -> bool {
        self.tag_found
    }

    pub fn was_updated(&self) -> bool {
        self.was_updated
    }

    pub fn failure(&self) -> Option<&FileFailure> {
        self.failure.as_ref()
    }
}

/// 一次批处理的输入，构造后不再修改
#[derive(Debug, Clone)]
pub struct BatchRequest {
    root_directory: PathBuf,
    extensions: Vec<String>,
    replacement_value: String,
}

impl BatchRequest {
    /// 创建并校验批处理请求
    ///
    /// 根目录必须存在且为目录，替换值不能为空或只含空白。
    /// 扩展名按首次出现的顺序去重。
    pub fn new<I, S>(
        root_directory: impl Into<PathBuf>,
        extensions: I,
        replacement_value: impl Into<String>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let root_directory = root_directory.into();
        if !root_directory.is_dir() {
            return Err(ObjPathError::InvalidRoot {
                path: root_directory.display().to_string(),
            });
        }

        let replacement_value = replacement_value.into();
        if replacement_value.trim().is_empty() {
            return Err(ObjPathError::EmptyReplacement);
        }

        let extensions = normalize_extensions(extensions)?;

        Ok(Self {
            root_directory,
            extensions,
            replacement_value,
        })
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn replacement_value(&self) -> &str {
        &self.replacement_value
    }
}

/// 扩展名去重并拒绝空集合
pub fn normalize_extensions<I, S>(extensions: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for ext in extensions {
        let ext = ext.into();
        if !ext.is_empty() && !out.contains(&ext) {
            out.push(ext);
        }
    }
    if out.is_empty() {
        return Err(ObjPathError::NoExtensions);
    }
    Ok(out)
}

/// 批处理的终止状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// 处理完成（可能被取消），按遍历顺序的记录
    Completed {
        entries: Vec<LogEntry>,
        cancelled: bool,
    },
    /// 没有任何文件匹配扩展名，不生成报告
    NoMatchingFiles,
}

/// 批处理结果：内存中的记录与报告路径
///
/// 报告写入失败时 `report_path` 为 `None`，记录不会丢失。
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub entries: Vec<LogEntry>,
    pub report_path: Option<PathBuf>,
}

impl BatchResult {
    /// 找到标签的文件数
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|e| e.tag_found()).count()
    }

    /// 成功写回的文件数
    pub fn updated_count(&self) -> usize {
        self.entries.iter().filter(|e| e.was_updated()).count()
    }

    /// 读写失败的文件数
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.failure().is_some()).count()
    }
}
