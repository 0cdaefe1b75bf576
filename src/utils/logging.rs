//! # 日志初始化
//!
//! 使用 `tracing-subscriber` 将诊断日志输出到 stderr。
//! 优先使用 `RUST_LOG`，否则由 `-v` 次数决定级别。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing-subscriber` crate

use tracing_subscriber::EnvFilter;

/// 根据 `-v` 次数选择默认日志级别
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// 初始化全局日志订阅者
pub fn init(verbose: u8, color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .init();
}
