//! 测试用的 App 构造与副作用替身

use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use tcpping_core::LocationDictionary;

use crate::backend::{AppConfig, ConfigService};
use crate::model::App;
use crate::util::ClipboardSink;

/// 只保存在内存中的配置
#[derive(Default)]
pub struct MemoryConfigService {
    saved: Mutex<Option<AppConfig>>,
}

impl ConfigService for MemoryConfigService {
    fn load(&self) -> Result<AppConfig> {
        Ok(self
            .saved
            .lock()
            .map_err(|_| anyhow::anyhow!("poisoned"))?
            .clone()
            .unwrap_or_default())
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        *self.saved.lock().map_err(|_| anyhow::anyhow!("poisoned"))? = Some(config.clone());
        Ok(())
    }
}

/// 记录每次复制内容的剪贴板
pub struct RecordingClipboard {
    copies: Arc<Mutex<Vec<String>>>,
}

impl ClipboardSink for RecordingClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.copies
            .lock()
            .map_err(|_| anyhow::anyhow!("poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}

/// 总是失败的剪贴板
pub struct FailingClipboard;

impl ClipboardSink for FailingClipboard {
    fn copy(&mut self, _text: &str) -> Result<()> {
        bail!("terminal rejected the clipboard request")
    }
}

fn builtin() -> LocationDictionary {
    LocationDictionary::builtin().unwrap()
}

/// 内置字典 + 默认配置，返回 App 与复制记录
pub fn test_app() -> (App, Arc<Mutex<Vec<String>>>) {
    let copies = Arc::new(Mutex::new(Vec::new()));
    let app = App::new(
        builtin(),
        AppConfig::default(),
        Box::new(MemoryConfigService::default()),
        Box::new(RecordingClipboard {
            copies: Arc::clone(&copies),
        }),
    );
    (app, copies)
}

pub fn test_app_with_failing_clipboard() -> App {
    App::new(
        builtin(),
        AppConfig::default(),
        Box::new(MemoryConfigService::default()),
        Box::new(FailingClipboard),
    )
}
