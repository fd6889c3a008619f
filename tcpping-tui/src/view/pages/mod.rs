//! 各页面的内容渲染，绘制在内容面板的边框内

pub mod generator;
pub mod home;
pub mod map;
pub mod settings;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::view::theme::colors;

/// 表单行：`▶ label : ◀ value ▶`
///
/// 未选中时用空格占住箭头的位置，保持各行对齐；宽度按显示宽度计算。
pub(crate) fn value_row<'a>(
    label: &'a str,
    label_width: usize,
    value: String,
    value_style: Style,
    is_selected: bool,
) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_selected {
        value_style.add_modifier(Modifier::BOLD)
    } else {
        value_style
    };
    let padding = label_width.saturating_sub(label.width());

    let (open, close) = if is_selected {
        ("◀ ", " ▶")
    } else {
        ("  ", "  ")
    };
    let arrow = Style::default().fg(Color::Yellow);

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(label, label_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(open, arrow),
        Span::styled(value, value_style),
        Span::styled(close, arrow),
    ])
}
