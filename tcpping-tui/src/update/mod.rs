//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理（级联选择、复制、设置）
//!         mod modal;              // 弹窗子消息处理
//!
//!
//!     主更新函数使用 match 穷举 AppMessage，
//!     复杂的子消息委托给子模块处理。
//!
//!     生成器表单的每一次修改都经由 CascadeController：
//!         ←/→ 在当前行的选项中循环
//!             ↓
//!         content::cycle_field() 计算下一个值
//!             ↓
//!         CascadeController::set_xxx() 产生新的 SelectionState
//!             ↓
//!         GeneratorState::apply() 写回，并放下 copied 标志
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            log::debug!("Quit requested");
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if app.focus.is_content() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Tick(now) => {
            app.generator.expire_copied(&app.controller, now);
        }

        AppMessage::Noop => {}
    }
}
