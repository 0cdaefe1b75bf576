//! # Ctrl+C 处理
//!
//! 第一次 Ctrl+C 只设置标志，批处理在当前文件结束后停止；
//! 第二次 Ctrl+C 立即退出。
//!
//! ## 依赖关系
//! - 被 `main.rs` 安装
//! - 被 `utils/progress.rs` 查询
//! - 使用 `ctrlc` crate

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// 安装 Ctrl+C 处理器
pub fn install() {
    let result = ctrlc::set_handler(|| {
        if INTERRUPTED.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
        eprintln!("\nInterrupted, stopping after the current file (press Ctrl+C again to abort)");
    });

    if let Err(e) = result {
        warn!("Could not install Ctrl+C handler: {}", e);
    }
}

/// 是否收到过 Ctrl+C
pub fn requested() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}
