//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     handle_event 接收以下 Event 类型：
//!         Event::Key(KeyEvent)                // 键盘事件
//!         Event::Resize(width , height)       // 终端大小变化，下一轮自动重绘
//!         其他                                 // 忽略
//!
//!     判断顺序：
//!         - 有弹窗打开时，只响应关闭弹窗的按键
//!         - 全局快捷键（退出、帮助、返回、Tab）
//!         - 焦点位于导航面板 → handle_navigation_keys
//!         - 焦点位于内容面板 → 按当前页面分发
//!
//!     生成器与设置页面中 ←/→ 用于切换当前行的值，
//!     其余页面中 ←/→ 用于切换焦点面板；Tab 在任何页面都切换焦点。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
