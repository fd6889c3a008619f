//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::value_row;
use crate::model::{App, SettingItem};
use crate::view::theme::colors;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 14;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];

    for (index, item) in SettingItem::all().iter().enumerate() {
        let value = match item {
            SettingItem::Theme => settings.theme.label(),
            SettingItem::MapDetail => settings.map_detail.label(),
        };
        lines.push(value_row(
            item.label(),
            LABEL_WIDTH,
            value.to_string(),
            Style::default().fg(c.highlight),
            settings.selected_index == index,
        ));
    }

    lines.push(Line::from(""));
    if let Some(path) = &app.config.dictionary_path {
        lines.push(Line::styled(
            format!("  Dictionary: {}", path.display()),
            Style::default().fg(c.muted),
        ));
    } else {
        lines.push(Line::styled(
            "  Dictionary: built-in",
            Style::default().fg(c.muted),
        ));
    }
    lines.push(Line::from(""));

    // 操作提示
    lines.push(Line::from(vec![
        Span::styled("  ↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" Move | ", Style::default().fg(c.muted)),
        Span::styled("←→", Style::default().fg(Color::Yellow)),
        Span::styled(" Switch option | ", Style::default().fg(c.muted)),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" Switch panel", Style::default().fg(c.muted)),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}
