//! 文件日志
//!
//! core 使用 `log` 门面，tracing-subscriber 的 tracing-log 桥接会一并收集。

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// 日志级别环境变量
const LOG_ENV: &str = "TCPPING_LOG";

/// 每条日志克隆一次文件句柄；克隆失败时丢弃该条，绝不写到终端
struct FileMakeWriter {
    file: File,
}

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = Box<dyn io::Write + Send + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match self.file.try_clone() {
            Ok(file) => Box::new(file),
            Err(_) => Box::new(io::sink()),
        }
    }
}

/// 日志文件路径：`<cache_dir>/tcpping-tui/tui.log`
fn log_path() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .context("cannot determine cache directory")?
        .join("tcpping-tui");
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    Ok(dir.join("tui.log"))
}

/// 初始化文件日志，返回日志文件路径
pub fn init_file_logging() -> Result<PathBuf> {
    let path = log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileMakeWriter { file })
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;

    Ok(path)
}
