//! 通用组件：导航面板、状态栏、弹窗

pub mod modal;
pub mod navigation;
pub mod statusbar;
