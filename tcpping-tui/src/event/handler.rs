//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变：下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key)
        || DefaultKeymap::ALT_QUIT.matches(&key)
        || DefaultKeymap::QUIT.matches(&key)
    {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_CHAR.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FOCUS_RIGHT.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Confirm);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Generator => handle_form_keys(key, true),
        Page::Settings => handle_form_keys(key, false),
        Page::Home | Page::Map => {
            if DefaultKeymap::FOCUS_LEFT.matches(&key) {
                AppMessage::ToggleFocus
            } else {
                AppMessage::Noop
            }
        }
    }
}

/// 表单类页面：↑↓ 选行，←→ 切换值
fn handle_form_keys(key: KeyEvent, copyable: bool) -> AppMessage {
    if copyable && DefaultKeymap::COPY.matches(&key) {
        return AppMessage::Content(ContentMessage::Copy);
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
        KeyCode::Left | KeyCode::Char('h') => ContentMessage::TogglePrev,
        KeyCode::Right | KeyCode::Char('l') => ContentMessage::ToggleNext,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        KeyCode::Enter => ContentMessage::Confirm,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 弹窗中的按键：帮助和错误弹窗只响应关闭
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('?') => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;
    use crate::test_support::test_app;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn release_events_are_ignored() {
        let (app, _) = test_app();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }

    #[test]
    fn global_keys() {
        let (app, _) = test_app();
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit));
        assert!(matches!(
            handle_event(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), &app),
            AppMessage::Quit
        ));
        assert!(matches!(handle_event(press(KeyCode::Char('?')), &app), AppMessage::ShowHelp));
        assert!(matches!(handle_event(press(KeyCode::Esc), &app), AppMessage::GoBack));
        assert!(matches!(handle_event(press(KeyCode::Tab), &app), AppMessage::ToggleFocus));
    }

    #[test]
    fn right_arrow_on_navigation_moves_focus() {
        let (app, _) = test_app();
        assert!(matches!(handle_event(press(KeyCode::Right), &app), AppMessage::ToggleFocus));
        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
    }

    #[test]
    fn enter_on_navigation_opens_page() {
        let (app, _) = test_app();
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Navigation(NavigationMessage::Confirm)
        ));
    }

    #[test]
    fn generator_arrows_cycle_values() {
        let (mut app, _) = test_app();
        app.current_page = Page::Generator;
        app.focus = app.focus.toggle();
        assert!(matches!(
            handle_event(press(KeyCode::Left), &app),
            AppMessage::Content(ContentMessage::TogglePrev)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('c')), &app),
            AppMessage::Content(ContentMessage::Copy)
        ));
    }

    #[test]
    fn left_arrow_on_home_returns_to_navigation() {
        let (mut app, _) = test_app();
        app.focus = app.focus.toggle();
        assert!(matches!(handle_event(press(KeyCode::Left), &app), AppMessage::ToggleFocus));
    }

    #[test]
    fn modal_swallows_other_keys() {
        let (mut app, _) = test_app();
        app.modal.show_help();
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Noop));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }
}
