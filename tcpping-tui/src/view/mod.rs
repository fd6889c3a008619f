//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 App 状态并绘制，从不修改状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 导航 + 内容 + 状态栏
//!         pub mod theme;      // 主题颜色与常用样式
//!         mod components;     // 导航面板、状态栏、弹窗
//!         mod pages;          // 各页面内容
//!
//!
//!     ┌──────────────────────────────────────────────────────┐
//!     │ tcpping.top Hostname Generator v0.1.0                │  标题栏
//!     ├────────────┬─────────────────────────────────────────┤
//!     │ ▶ Home     │                                         │
//!     │   Generator│           pages::<current>::render       │
//!     │   Map      │                                         │
//!     │   Settings │                                         │
//!     ├────────────┴─────────────────────────────────────────┤
//!     │ ←→ Switch Panels │ ↑↓ Navigation │ q Quit            │  状态栏
//!     └──────────────────────────────────────────────────────┘
//!
//!     弹窗在最后渲染，覆盖在所有内容之上。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
