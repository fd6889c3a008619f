//! tcpping TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与字典加载 (`backend/`)
//!
//!
//! main.rs
//! tcpping TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_file_logging()     // 日志写入缓存目录下的文件（终端被 UI 占用）
//!     load config             // 读取 config.json，失败时使用默认值
//!     load dictionary         // 内置字典，或配置中指定的字典文件
//!     init_terminal()         // 初始化终端
//!     model::App::new()       // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 启动阶段的配置/字典错误不会中断程序：
//!     - 回退到默认配置或内置字典
//!     - 错误信息写入日志，并显示在状态栏

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use anyhow::Result;

use backend::{load_dictionary, ConfigService, LocalConfigService};
use util::{init_file_logging, init_terminal, restore_terminal, Osc52Clipboard};

fn main() -> Result<(), anyhow::Error> {
    // 0. 日志（失败时静默关闭）
    if let Ok(path) = init_file_logging() {
        log::info!("tcpping-tui starting, log file {}", path.display());
    }

    let mut warnings: Vec<String> = Vec::new();

    // 1. 配置
    let config_service = LocalConfigService::new();
    let config = config_service.load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {e:#}");
        warnings.push(format!("Config ignored: {e}"));
        backend::AppConfig::default()
    });

    // 2. 字典
    let dictionary = match load_dictionary(config.dictionary_path.as_deref()) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            log::error!("Failed to load dictionary override: {e}");
            warnings.push(format!("Dictionary fallback: {e}"));
            load_dictionary(None)?
        }
    };

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new(
        dictionary,
        config,
        Box::new(config_service),
        Box::new(Osc52Clipboard),
    );
    if let Some(status) = startup_status(&warnings) {
        app.set_status(status);
    }

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("tcpping-tui exiting");

    // 7. 返回结果
    result
}

/// 启动阶段的所有警告合并为一条状态栏消息
fn startup_status(warnings: &[String]) -> Option<String> {
    if warnings.is_empty() {
        None
    } else {
        Some(warnings.join("; "))
    }
}
