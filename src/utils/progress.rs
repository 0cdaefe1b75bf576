//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式，并实现 `BatchObserver`
//! 以便在终端中显示批处理进度。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 实现 `batch/runner.rs` 的 `BatchObserver`
//! - 使用 `utils/interrupt.rs` 响应 Ctrl+C
//! - 使用 `indicatif`, `console` crate

use crate::batch::{BatchObserver, Progress};
use crate::models::LogEntry;
use crate::utils::{interrupt, output};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::debug;

/// 创建标准进度条
///
/// 终端无人值守（如输出被重定向）时进度条隐藏。
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if !console::user_attended() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent:>3}% {pos}/{len} {msg}",
    ) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// 以进度条显示批处理进度的观察者
pub struct ProgressObserver {
    pb: Option<ProgressBar>,
    message: String,
    /// 逐文件打印结果
    verbose: bool,
}

impl ProgressObserver {
    pub fn new(message: &str, verbose: bool) -> Self {
        Self {
            pb: None,
            message: message.to_string(),
            verbose,
        }
    }
}

impl BatchObserver for ProgressObserver {
    fn on_start(&mut self, total: usize) {
        self.pb = Some(create_progress_bar(total as u64, &self.message));
    }

    fn on_file(&mut self, entry: &LogEntry, progress: Progress) {
        let Some(pb) = &self.pb else {
            return;
        };

        let path = entry.file_path().display().to_string();
        if let Some(failure) = entry.failure() {
            pb.suspend(|| output::print_warning(&format!("{}: {}", path, failure)));
        } else if self.verbose {
            let status = if entry.was_updated() {
                "updated"
            } else {
                "no tag"
            };
            pb.suspend(|| output::print_info(&format!("{} ({})", path, status)));
        }

        pb.set_position(progress.processed as u64);
        debug!("{:.1}% done", progress.percent());
    }

    fn is_cancelled(&self) -> bool {
        interrupt::requested()
    }

    fn on_finish(&mut self, _processed: usize, _cancelled: bool) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}
