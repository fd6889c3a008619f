//! 剪贴板写入（OSC 52）

use std::io::{self, Write};

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crossterm::{execute, style::Print};

/// 剪贴板出口
pub trait ClipboardSink {
    /// 把文本写入剪贴板
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// 通过终端的 OSC 52 序列写剪贴板
///
/// 终端不支持时不会报错，文本只是不会进入剪贴板。
pub struct Osc52Clipboard;

impl ClipboardSink for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, Print(osc52_sequence(text))).context("failed to write OSC 52 sequence")?;
        stdout.flush().context("failed to flush terminal")?;
        Ok(())
    }
}

/// 构造 OSC 52 序列，`c` 表示系统剪贴板
fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{encoded}\x1b\\")
}
