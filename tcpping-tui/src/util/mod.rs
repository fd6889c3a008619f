//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复、剪贴板写入、日志文件。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod clipboard;      // OSC 52 剪贴板
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     剪贴板：
//!         TUI 通常运行在 SSH 或 tmux 中，无法直接访问系统剪贴板。
//!         OSC 52 转义序列让终端模拟器代为写入：
//!
//!             ESC ] 52 ; c ; <base64 文本> ESC \
//!
//!         ClipboardSink trait 把“写剪贴板”这一副作用从 update 层中隔离出来，
//!         测试中替换为记录调用的实现。
//!
//!
//!     日志：
//!         终端被 UI 占用，日志不能写到 stderr，
//!         因此写入 <cache_dir>/tcpping-tui/tui.log，级别由 TCPPING_LOG 控制。
//!
//!
//!     恢复终端：
//!         无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!

mod clipboard;
mod logging;
mod terminal;

pub use clipboard::{ClipboardSink, Osc52Clipboard};
pub use logging::init_file_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
