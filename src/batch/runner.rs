//! # 批量执行器
//!
//! 顺序处理匹配的文件：读取、重写标签、写回、记录。
//!
//! ## 功能
//! - 处理前统计文件总数，零匹配时直接返回 `NoMatchingFiles`
//! - 每个文件产生一条 `LogEntry`，单个文件失败不会中断批处理
//! - 每处理一个文件通过 `BatchObserver` 报告进度
//! - 取消只在文件之间检查
//! - 只读检查模式（不写回）
//!
//! ## 依赖关系
//! - 被 `commands/run.rs`, `commands/check.rs`, `commands/interactive.rs` 调用
//! - 使用 `batch/collector.rs` 收集文件
//! - 使用 `tag/` 重写标签
//! - 使用 `models/` 数据模型

use crate::batch::FileCollector;
use crate::models::{BatchOutcome, BatchRequest, LogEntry};
use crate::tag::TagRewriter;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 处理进度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 已处理文件数
    pub processed: usize,
    /// 文件总数
    pub total: usize,
}

impl Progress {
    /// 百分比 `(processed / total) * 100`
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.processed as f64 / self.total as f64) * 100.0
    }
}

/// 批处理观察者，由表现层实现
pub trait BatchObserver {
    /// 文件总数统计完成，处理即将开始
    fn on_start(&mut self, _total: usize) {}

    /// 一个文件处理完毕
    fn on_file(&mut self, _entry: &LogEntry, _progress: Progress) {}

    /// 在处理下一个文件之前调用
    fn is_cancelled(&self) -> bool {
        false
    }

    /// 批处理结束（零匹配时不会调用）
    fn on_finish(&mut self, _processed: usize, _cancelled: bool) {}
}

/// 只读检查的单个文件结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub entry: LogEntry,
    /// 标签当前的内容
    pub values: Vec<String>,
}

/// 批量执行器
pub struct BatchRunner {
    rewriter: TagRewriter,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(rewriter: TagRewriter) -> Self {
        Self { rewriter }
    }

    /// 处理请求中的全部匹配文件
    pub fn run(&self, request: &BatchRequest, observer: &mut dyn BatchObserver) -> BatchOutcome {
        let files = FileCollector::new(request.root_directory())
            .with_extensions(request.extensions())
            .collect();

        let total = files.len();
        if total == 0 {
            info!(
                "No files matching {:?} under {}",
                request.extensions(),
                request.root_directory().display()
            );
            return BatchOutcome::NoMatchingFiles;
        }

        info!(
            "Processing {} files under {}",
            total,
            request.root_directory().display()
        );
        observer.on_start(total);

        let mut entries = Vec::with_capacity(total);
        let mut cancelled = false;

        for file in &files {
            if observer.is_cancelled() {
                warn!("Cancelled after {} of {} files", entries.len(), total);
                cancelled = true;
                break;
            }

            let entry = self.process_file(file, request.replacement_value());
            let progress = Progress {
                processed: entries.len() + 1,
                total,
            };
            observer.on_file(&entry, progress);
            entries.push(entry);
        }

        observer.on_finish(entries.len(), cancelled);

        BatchOutcome::Completed { entries, cancelled }
    }

    /// 处理单个文件，所有 I/O 失败都记录在返回的 `LogEntry` 中
    pub fn process_file(&self, path: &Path, replacement: &str) -> LogEntry {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return LogEntry::read_failed(path, e.to_string());
            }
        };

        let rewrite = self.rewriter.rewrite(&content, replacement);
        if !rewrite.tag_present {
            debug!("No <{}> in {}", self.rewriter.tag(), path.display());
            return LogEntry::tag_missing(path);
        }

        match fs::write(path, rewrite.content.as_bytes()) {
            Ok(()) => {
                debug!("Updated {}", path.display());
                LogEntry::updated(path)
            }
            Err(e) => {
                warn!("Failed to write {}: {}", path.display(), e);
                LogEntry::write_failed(path, e.to_string())
            }
        }
    }

    /// 只读检查：收集文件并读取标签内容，不写回
    pub fn inspect(&self, root: &Path, extensions: &[String]) -> Vec<Inspection> {
        let files: Vec<PathBuf> = FileCollector::new(root)
            .with_extensions(extensions)
            .collect();

        files
            .into_iter()
            .map(|path| match fs::read_to_string(&path) {
                Ok(content) => {
                    let values: Vec<String> = self
                        .rewriter
                        .find(&content)
                        .into_iter()
                        .map(str::to_string)
                        .collect();
                    let entry = if values.is_empty() {
                        LogEntry::tag_missing(&path)
                    } else {
                        LogEntry::tag_present(&path)
                    };
                    Inspection { entry, values }
                }
                Err(e) => {
                    warn!("Failed to read {}: {}", path.display(), e);
                    Inspection {
                        entry: LogEntry::read_failed(&path, e.to_string()),
                        values: Vec::new(),
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::batch::DEFAULT_EXTENSIONS;
    use crate::models::batch::FileFailure;

    /// 不做任何输出的观察者
    struct SilentObserver;

    impl BatchObserver for SilentObserver {}

    const TAGGED: &str = "<Program>\n<ObjFullPath>C:\\old\\path</ObjFullPath>\n</Program>\n";

    #[derive(Default)]
    struct Recorder {
        started: Option<usize>,
        percents: Vec<f64>,
        finished: Option<(usize, bool)>,
        cancel_after: Option<usize>,
    }

    impl BatchObserver for Recorder {
        fn on_start(&mut self, total: usize) {
            self.started = Some(total);
        }

        fn on_file(&mut self, _entry: &LogEntry, progress: Progress) {
            self.percents.push(progress.percent());
        }

        fn is_cancelled(&self) -> bool {
            matches!(self.cancel_after, Some(n) if self.percents.len() >= n)
        }

        fn on_finish(&mut self, processed: usize, cancelled: bool) {
            self.finished = Some((processed, cancelled));
        }
    }

    fn entries(outcome: BatchOutcome) -> (Vec<LogEntry>, bool) {
        match outcome {
            BatchOutcome::Completed { entries, cancelled } => (entries, cancelled),
            BatchOutcome::NoMatchingFiles => panic!("expected completed batch"),
        }
    }

    #[test]
    fn test_mixed_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.hop"), TAGGED).unwrap();
        fs::write(root.join("b.hop"), "<ObjFullPath></ObjFullPath>").unwrap();
        fs::write(root.join("c.hop"), "no tag").unwrap();
        fs::write(root.join("d.txt"), TAGGED).unwrap();

        let request = BatchRequest::new(root, DEFAULT_EXTENSIONS, "D:\\new\\path").unwrap();
        let runner = BatchRunner::new(TagRewriter::default());
        let (entries, cancelled) = entries(runner.run(&request, &mut SilentObserver));

        assert!(!cancelled);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.iter().filter(|e| e.was_updated()).count(), 2);

        let missing: Vec<_> = entries.iter().filter(|e| !e.tag_found()).collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].file_path(), root.join("c.hop"));
        assert!(!missing[0].was_updated());

        assert_eq!(
            fs::read_to_string(root.join("a.hop")).unwrap(),
            "<Program>\n<ObjFullPath>D:\\new\\path</ObjFullPath>\n</Program>\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("b.hop")).unwrap(),
            "<ObjFullPath>D:\\new\\path</ObjFullPath>"
        );
        assert_eq!(fs::read_to_string(root.join("c.hop")).unwrap(), "no tag");
        assert_eq!(fs::read_to_string(root.join("d.txt")).unwrap(), TAGGED);
    }

    #[test]
    fn test_no_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), TAGGED).unwrap();

        let request = BatchRequest::new(dir.path(), DEFAULT_EXTENSIONS, "X").unwrap();
        let mut recorder = Recorder::default();
        let outcome = BatchRunner::new(TagRewriter::default()).run(&request, &mut recorder);

        assert_eq!(outcome, BatchOutcome::NoMatchingFiles);
        assert_eq!(recorder.started, None);
        assert_eq!(recorder.finished, None);
    }

    #[test]
    fn test_progress_reported_per_file() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["1.hop", "2.ganx", "3.hop", "4.hop"] {
            fs::write(dir.path().join(name), TAGGED).unwrap();
        }

        let request = BatchRequest::new(dir.path(), DEFAULT_EXTENSIONS, "X").unwrap();
        let mut recorder = Recorder::default();
        BatchRunner::new(TagRewriter::default()).run(&request, &mut recorder);

        assert_eq!(recorder.started, Some(4));
        assert_eq!(recorder.percents, vec![25.0, 50.0, 75.0, 100.0]);
        assert_eq!(recorder.finished, Some((4, false)));
    }

    #[test]
    fn test_unreadable_file_is_logged_and_batch_continues() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.hop"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        fs::write(dir.path().join("b.hop"), TAGGED).unwrap();

        let request = BatchRequest::new(dir.path(), DEFAULT_EXTENSIONS, "X").unwrap();
        let (entries, _) =
            entries(BatchRunner::new(TagRewriter::default()).run(&request, &mut SilentObserver));

        assert_eq!(entries.len(), 2);
        assert!(!entries[0].tag_found());
        assert!(!entries[0].was_updated());
        assert!(matches!(entries[0].failure(), Some(FileFailure::Read(_))));
        assert!(entries[1].was_updated());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_logged_and_rewritten() {
        let outside = tempfile::tempdir().unwrap();
        let target = outside.path().join("shared.hop");
        fs::write(&target, TAGGED).unwrap();

        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.hop")).unwrap();
        fs::write(dir.path().join("plain.hop"), "no tag").unwrap();

        let request = BatchRequest::new(dir.path(), DEFAULT_EXTENSIONS, "NEW").unwrap();
        let (entries, _) =
            entries(BatchRunner::new(TagRewriter::default()).run(&request, &mut SilentObserver));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file_path(), dir.path().join("link.hop"));
        assert!(entries[0].was_updated());
        assert!(!entries[1].tag_found());
        assert!(fs::read_to_string(&target)
            .unwrap()
            .contains("<ObjFullPath>NEW</ObjFullPath>"));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_failure_is_logged_and_batch_continues() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("a.hop");
        fs::write(&locked, TAGGED).unwrap();
        fs::write(dir.path().join("b.hop"), TAGGED).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).unwrap();

        // 特权用户无视只读权限，此时无法构造写入失败
        if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
            return;
        }

        let request = BatchRequest::new(dir.path(), DEFAULT_EXTENSIONS, "X").unwrap();
        let (entries, cancelled) =
            entries(BatchRunner::new(TagRewriter::default()).run(&request, &mut SilentObserver));

        assert!(!cancelled);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].tag_found());
        assert!(!entries[0].was_updated());
        assert!(matches!(entries[0].failure(), Some(FileFailure::Write(_))));
        assert!(entries[1].was_updated());
        assert_eq!(fs::read_to_string(&locked).unwrap(), TAGGED);
    }

    #[test]
    fn test_cancel_at_file_boundary() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["1.hop", "2.hop", "3.hop"] {
            fs::write(dir.path().join(name), TAGGED).unwrap();
        }

        let request = BatchRequest::new(dir.path(), DEFAULT_EXTENSIONS, "X").unwrap();
        let mut recorder = Recorder {
            cancel_after: Some(1),
            ..Default::default()
        };
        let (entries, cancelled) =
            entries(BatchRunner::new(TagRewriter::default()).run(&request, &mut recorder));

        assert!(cancelled);
        assert_eq!(entries.len(), 1);
        assert_eq!(recorder.finished, Some((1, true)));
        assert_eq!(fs::read_to_string(dir.path().join("2.hop")).unwrap(), TAGGED);
    }

    #[test]
    fn test_second_run_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.hop"), TAGGED).unwrap();

        let request = BatchRequest::new(dir.path(), DEFAULT_EXTENSIONS, "NEW").unwrap();
        let runner = BatchRunner::new(TagRewriter::default());
        runner.run(&request, &mut SilentObserver);
        let first = fs::read_to_string(dir.path().join("a.hop")).unwrap();
        runner.run(&request, &mut SilentObserver);
        let second = fs::read_to_string(dir.path().join("a.hop")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_inspect_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.hop"), TAGGED).unwrap();
        fs::write(dir.path().join("b.ganx"), "plain").unwrap();

        let exts = vec![".hop".to_string(), ".ganx".to_string()];
        let found = BatchRunner::new(TagRewriter::default()).inspect(dir.path(), &exts);

        assert_eq!(found.len(), 2);
        assert!(found[0].entry.tag_found());
        assert!(!found[0].entry.was_updated());
        assert_eq!(found[0].values, vec!["C:\\old\\path".to_string()]);
        assert!(!found[1].entry.tag_found());
        assert_eq!(fs::read_to_string(dir.path().join("a.hop")).unwrap(), TAGGED);
    }

    #[test]
    fn test_progress_percent() {
        let p = Progress {
            processed: 1,
            total: 3,
        };
        assert!((p.percent() - 33.333_333).abs() < 1e-4);
        assert_eq!(Progress { processed: 0, total: 0 }.percent(), 0.0);
    }
}
