//! # interactive 命令实现
//!
//! 两步交互：
//! 1. 输入根目录，无效时重新询问
//! 2. 输入新路径，为空时重新询问
//!
//! 然后以进度条执行批处理并写出报告。
//!
//! ## 依赖关系
//! - 使用 `cli/interactive.rs` 定义的参数
//! - 使用 `commands/batch.rs`
//! - 使用 `anyhow` 处理终端 I/O 错误

use crate::cli::interactive::InteractiveArgs;
use crate::commands::batch::execute_batch;
use crate::models::BatchRequest;
use crate::tag::TagRewriter;
use crate::utils::output;

use anyhow::{bail, Context};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// 执行 interactive 命令
pub fn execute(args: InteractiveArgs, verbose: bool) -> anyhow::Result<()> {
    output::print_header("CNC file checker and editor");

    let rewriter = TagRewriter::new(&args.filter.tag)?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let root = prompter.ask_root()?;
    let replacement = prompter.ask_replacement(&format!("New <{}> value", rewriter.tag()))?;

    let request = BatchRequest::new(root, args.filter.extensions, replacement)?;
    execute_batch(&request, rewriter, &args.report, verbose);
    Ok(())
}

/// 行式提示输入
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// 询问根目录，直到输入一个存在的目录
    pub fn ask_root(&mut self) -> anyhow::Result<PathBuf> {
        loop {
            let line = self.ask("Base directory")?;
            if line.is_empty() {
                continue;
            }
            let path = PathBuf::from(&line);
            if path.is_dir() {
                return Ok(path);
            }
            self.warn(&format!("Invalid directory: {}", line))?;
        }
    }

    /// 询问替换值，直到输入非空内容（去除首尾空白）
    pub fn ask_replacement(&mut self, label: &str) -> anyhow::Result<String> {
        loop {
            let line = self.ask(label)?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.warn("No value entered")?;
        }
    }

    fn ask(&mut self, label: &str) -> anyhow::Result<String> {
        write!(self.out, "{} {}: ", "[?]".cyan().bold(), label.bold())
            .context("failed to write prompt")?;
        self.out.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            bail!("input closed before a value was entered");
        }
        Ok(line.trim().to_string())
    }

    fn warn(&mut self, msg: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{} {}", "[WARN]".yellow().bold(), msg)
            .context("failed to write warning")?;
        Ok(())
    }
}
