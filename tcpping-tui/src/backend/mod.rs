//!
//! src/backend/mod.rs
//! Backend 层：配置与字典
//!
//! Backend 层与 UI 完全解耦，负责所有需要访问文件系统的工作。
//! 级联规则与主机名推导都在 tcpping-core 中，这里只负责把数据准备好。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;         // 配置持久化（JSON 文件）
//!         mod dictionary_service;     // 字典加载（内置或外部文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     配置文件位于 <config_dir>/tcpping-tui/config.json：
//!
//!         {
//!             "theme": "dark",                // dark | light
//!             "map_resolution": "high",       // low | high
//!             "dictionary_path": null         // 外部字典文件，null 为内置字典
//!         }
//!
//!     所有字段都可省略；文件不存在时使用默认值。
//!     设置页面的修改会立即写回；选择状态从不持久化。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、字典服务
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     load_dictionary(None)           → 编译时内嵌的字典
//!     load_dictionary(Some(path))     → 外部 JSON 文件，加载时校验
//!

mod config_service;
mod dictionary_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use dictionary_service::load_dictionary;
