//! # CSV 报告写入
//!
//! 固定三列：`Dateipfad`（文件路径）、`Variable Gefunden`（是否找到标签）、
//! `Bearbeitet`（是否已写回），标志写作 `Ja` / `Nein`。
//! 文件名为 `<前缀>_<YYYY-MM-DD_HH-MM-SS>.csv`，使用本地时间。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/interactive.rs` 调用
//! - 使用 `models/batch.rs` 的 `LogEntry`
//! - 使用 `csv` + `serde` 写入，`chrono` 生成时间戳，`dirs` 定位桌面

use crate::error::{ObjPathError, ReportWriteCause, Result};
use crate::models::LogEntry;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// 默认报告文件名前缀
pub const DEFAULT_PREFIX: &str = "CNC_File_Log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// 表头，空报告也会写出
const HEADER: [&str; 3] = ["Dateipfad", "Variable Gefunden", "Bearbeitet"];

/// 报告中的一行，字段顺序与 `HEADER` 一致
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    file_path: String,
    tag_found: &'a str,
    updated: &'a str,
}

impl<'a> From<&'a LogEntry> for ReportRow<'a> {
    fn from(entry: &'a LogEntry) -> Self {
        ReportRow {
            file_path: entry.file_path().display().to_string(),
            tag_found: yes_no(entry.tag_found()),
            updated: yes_no(entry.was_updated()),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Ja"
    } else {
        "Nein"
    }
}

/// CSV 报告写入器
#[derive(Debug, Clone)]
pub struct ReportWriter {
    directory: PathBuf,
    prefix: String,
}

impl ReportWriter {
    /// 写入指定目录
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// 写入默认位置：桌面，其次主目录，最后当前目录
    pub fn default_location() -> Result<Self> {
        let directory = dirs::desktop_dir()
            .filter(|d| d.is_dir())
            .or_else(|| dirs::home_dir().filter(|d| d.is_dir()))
            .or_else(|| std::env::current_dir().ok())
            .ok_or(ObjPathError::NoReportDirectory)?;
        Ok(Self::new(directory))
    }

    /// 设置文件名前缀
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// 某一时刻对应的报告路径
    pub fn path_for(&self, timestamp: NaiveDateTime) -> PathBuf {
        self.directory.join(format!(
            "{}_{}.csv",
            self.prefix,
            timestamp.format(TIMESTAMP_FORMAT)
        ))
    }

    /// 以当前本地时间写入报告，返回报告路径
    pub fn write(&self, entries: &[LogEntry]) -> Result<PathBuf> {
        self.write_at(entries, Local::now().naive_local())
    }

    /// 以指定时间戳写入报告
    pub fn write_at(&self, entries: &[LogEntry], timestamp: NaiveDateTime) -> Result<PathBuf> {
        let path = self.path_for(timestamp);

        write_rows(&path, entries).map_err(|source| ObjPathError::ReportWrite {
            path: path.clone(),
            source,
        })?;

        info!("Wrote report with {} rows to {}", entries.len(), path.display());
        Ok(path)
    }
}

fn write_rows(path: &Path, entries: &[LogEntry]) -> std::result::Result<(), ReportWriteCause> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    wtr.write_record(HEADER)?;
    for entry in entries {
        wtr.serialize(ReportRow::from(entry))?;
    }
    wtr.flush()?;
    Ok(())
}
