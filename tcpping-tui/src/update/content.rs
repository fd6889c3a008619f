//! 内容面板更新逻辑
//!
//! 生成器表单的级联选择与复制，以及设置页面的切换

use std::time::Instant;

use tcpping_core::{Catalog, CoreResult, Protocol, SelectionState};

use crate::message::ContentMessage;
use crate::model::{cycle_value, App, FormRow, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Generator => update_generator(app, msg),
        Page::Settings => update_settings(app, msg),
        Page::Home | Page::Map => {}
    }
}

// ========== 生成器页面 ==========

fn update_generator(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.generator.select_previous(&app.controller),
        ContentMessage::SelectNext => app.generator.select_next(&app.controller),
        ContentMessage::SelectFirst => app.generator.select_first(),
        ContentMessage::SelectLast => app.generator.select_last(),
        ContentMessage::Confirm if app.generator.selected == FormRow::Copy => copy_hostname(app),
        ContentMessage::Confirm | ContentMessage::ToggleNext => cycle_field(app, true),
        ContentMessage::TogglePrev => cycle_field(app, false),
        ContentMessage::Copy => copy_hostname(app),
    }
}

/// 当前行切换到下一个/上一个值，经由 CascadeController 写回
fn cycle_field(app: &mut App, forward: bool) {
    let row = app.generator.selected;
    match next_selection(app, row, forward) {
        Ok(Some(next)) => {
            app.generator.apply(next, &app.controller);
            app.clear_status();
        }
        Ok(None) => {
            if row != FormRow::Copy {
                app.set_status(format!("No {} options in this scope", row.label().to_lowercase()));
            }
        }
        Err(e) => {
            if e.is_expected() {
                log::warn!("Selection rejected: {e}");
            } else {
                log::error!("Selection failed: {e}");
            }
            app.set_status(e.to_string());
        }
    }
}

/// 计算切换后的选择状态；没有可选项时返回 `None`
fn next_selection(app: &App, row: FormRow, forward: bool) -> CoreResult<Option<SelectionState>> {
    let ctl = &app.controller;
    let catalog = Catalog::new(&app.dictionary);
    let state = &app.generator.selection;
    let country = state.country();

    let next = match row {
        FormRow::Protocol => {
            // 双栈即“未选择”，始终在循环中
            let all = Protocol::all();
            let pos = all.iter().position(|p| *p == state.protocol()).unwrap_or(0);
            let next = if forward {
                (pos + 1) % all.len()
            } else {
                (pos + all.len() - 1) % all.len()
            };
            Some(ctl.set_protocol(state, all[next]))
        }

        FormRow::Country => {
            let options: Vec<Option<&str>> =
                catalog.countries().iter().map(|o| Some(o.code)).collect();
            cycle_value(&options, country, forward).map(|v| ctl.set_country(state, v))
        }

        FormRow::Province => {
            let options: Vec<Option<&str>> =
                catalog.provinces(country).iter().map(|o| Some(o.code)).collect();
            match cycle_value(&options, state.province(), forward) {
                Some(v) => Some(ctl.set_province(state, v)?),
                None => None,
            }
        }

        FormRow::City => {
            // 层级国家可以不选城市（国家级主机名）
            let mut options: Vec<Option<&str>> = Vec::new();
            if ctl.is_hierarchical(country) {
                options.push(None);
            }
            options.extend(
                catalog
                    .cities(country, state.province())
                    .iter()
                    .map(|o| Some(o.code)),
            );
            if options.iter().all(Option::is_none) {
                None
            } else {
                cycle_value(&options, state.city(), forward).map(|v| ctl.set_city(state, v))
            }
        }

        FormRow::Provider => {
            let options: Vec<Option<&str>> = catalog
                .providers(country, state.province(), state.city())
                .iter()
                .map(|o| Some(o.code))
                .collect();
            cycle_value(&options, state.provider(), forward).map(|v| ctl.set_provider(state, v))
        }

        FormRow::Copy => None,
    };

    Ok(next)
}

/// 复制主机名到剪贴板
fn copy_hostname(app: &mut App) {
    let hostname = app.hostname();
    if hostname.is_empty() {
        app.set_status("Selection incomplete: nothing to copy");
        return;
    }

    match app.clipboard.copy(&hostname) {
        Ok(()) => {
            log::info!("Copied {hostname}");
            app.generator.mark_copied(&app.controller, Instant::now());
            app.set_status(format!("Copied {hostname}"));
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {e:#}");
            app.modal.show_error("Copy Failed", &format!("{e:#}"));
        }
    }
}

// ========== 设置页面 ==========

fn update_settings(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::SelectFirst => app.settings.selected_index = 0,
        ContentMessage::SelectLast => {
            app.settings.selected_index = crate::model::SettingItem::all().len() - 1;
        }
        ContentMessage::Confirm | ContentMessage::TogglePrev | ContentMessage::ToggleNext => {
            toggle_setting(app);
        }
        ContentMessage::Copy => {}
    }
}

fn toggle_setting(app: &mut App) {
    app.settings.toggle();

    // 同步主题到 view 层
    crate::view::theme::set_theme_index(app.settings.theme.index());

    app.config.theme = app.settings.theme;
    app.config.map_detail = app.settings.map_detail;
    if let Err(e) = app.config_service.save(&app.config) {
        log::warn!("Failed to save config: {e:#}");
        app.set_status(format!("Settings not saved: {e}"));
    }
}
