//! # 文件收集器
//!
//! 递归遍历根目录，按文件名后缀收集待处理文件。
//!
//! ## 功能
//! - 区分大小写的后缀匹配（如 `.hop`, `.ganx`）
//! - 递归目录搜索，每层按文件名排序，保证遍历顺序可复现
//! - 指向文件的符号链接按文件处理，目录链接不跟随
//! - 无法访问的目录项记录警告后跳过
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 根目录
    root: PathBuf,
    /// 文件名后缀列表
    extensions: Vec<String>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: Vec::new(),
        }
    }

    /// 设置匹配的文件名后缀
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|s| s.as_ref().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// 收集所有匹配的文件（遍历顺序）
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.root.is_dir() {
            return vec![];
        }

        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file()))
            .filter(|e| self.matches(e.path()))
            .map(|e| e.into_path())
            .collect()
    }

    /// 检查文件名是否以任一后缀结尾
    pub fn matches(&self, path: &Path) -> bool {
        let filename = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };

        self.extensions
            .iter()
            .any(|ext| filename.ends_with(ext.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn collector() -> FileCollector {
        FileCollector::new(".").with_extensions(&[".hop", ".ganx"])
    }

    #[test]
    fn test_suffix_match() {
        let c = collector();
        assert!(c.matches(Path::new("part.hop")));
        assert!(c.matches(Path::new("dir/part.ganx")));
        assert!(c.matches(Path::new(".hop")));
        assert!(!c.matches(Path::new("part.HOP")));
        assert!(!c.matches(Path::new("part.hop.bak")));
        assert!(!c.matches(Path::new("part.txt")));
    }

    #[test]
    fn test_suffix_without_dot() {
        let c = FileCollector::new(".").with_extensions(&["hop"]);
        assert!(c.matches(Path::new("a.hop")));
        assert!(c.matches(Path::new("ahop")));
    }

    #[test]
    fn test_collect_recursive_and_ordered() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("b/nested")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("z.hop"), "").unwrap();
        fs::write(root.join("a/one.ganx"), "").unwrap();
        fs::write(root.join("b/nested/two.hop"), "").unwrap();
        fs::write(root.join("b/skip.txt"), "").unwrap();
        fs::create_dir_all(root.join("dir.hop")).unwrap();

        let files = FileCollector::new(root)
            .with_extensions(&[".hop", ".ganx"])
            .collect();

        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("a/one.ganx"),
                PathBuf::from("b/nested/two.hop"),
                PathBuf::from("z.hop"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_follows_file_symlinks_only() {
        let outside = tempfile::tempdir().unwrap();
        fs::write(outside.path().join("target.hop"), "").unwrap();
        fs::create_dir_all(outside.path().join("sub")).unwrap();
        fs::write(outside.path().join("sub/hidden.hop"), "").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let link = std::os::unix::fs::symlink;
        link(outside.path().join("target.hop"), root.join("link.hop")).unwrap();
        link(outside.path().join("sub"), root.join("linkdir")).unwrap();
        link(root.join("missing.hop"), root.join("broken.hop")).unwrap();
        fs::write(root.join("plain.hop"), "").unwrap();

        let files = FileCollector::new(root).with_extensions(&[".hop"]).collect();

        assert_eq!(files, vec![root.join("link.hop"), root.join("plain.hop")]);
    }

    #[test]
    fn test_collect_missing_root() {
        let files = FileCollector::new("/definitely/not/here")
            .with_extensions(&[".hop"])
            .collect();
        assert!(files.is_empty());
    }
}
