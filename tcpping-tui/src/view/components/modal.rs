//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有）
pub fn render(app: &App, frame: &mut Frame) {
    match &app.modal.active {
        Some(Modal::Help) => render_help(frame),
        Some(Modal::Error { title, message }) => render_error(frame, title, message),
        None => {}
    }
}

/// 在 area 中居中的矩形，超出时裁剪到 area 内
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error));

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Press Esc or Enter to close", Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(56, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let section = |text: &'static str| {
        Line::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<11}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section("Global shortcuts"),
        key("Tab", "Switch panel"),
        key("↑↓/jk", "Move up/down"),
        key("Enter", "Confirm"),
        key("Esc", "Back/Close"),
        key("?/Alt+h", "This help"),
        key("q/Alt+q", "Quit"),
        Line::from(""),
        section("Generator"),
        key("←→/hl", "Change the highlighted field"),
        key("c", "Copy hostname"),
        key("Enter", "Next value, or copy on the Copy row"),
        Line::from(""),
        Line::styled(
            "Hostnames look like v4.ct-shenzhen.cn.tcpping.top",
            Style::default().fg(c.muted),
        ),
        Line::styled("Press Esc to close the help", Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
