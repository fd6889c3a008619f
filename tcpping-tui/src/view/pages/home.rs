//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    // 首页布局：欢迎信息 + 统计信息 + 当前主机名
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // 欢迎区域
            Constraint::Length(5), // 统计区域
            Constraint::Min(1),    // 当前主机名
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to the tcpping.top hostname generator",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Pick a protocol, location and provider to build a test endpoint",
            Style::default().fg(c.muted),
        )),
        Line::from(Span::styled(
            "  such as v4.ct-shenzhen.cn.tcpping.top",
            Style::default().fg(c.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    // 字典统计
    let dictionary = &app.dictionary;
    let provinces = dictionary
        .hierarchical_country()
        .map_or(0, |country| {
            app.catalog().provinces(Some(&country.code)).len()
        });
    let cities: usize = dictionary
        .countries
        .iter()
        .map(|country| country.all_cities().count())
        .sum();

    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(layout[1]);

    let stats = [
        (" Countries ", dictionary.countries.len(), Color::Green),
        (" Provinces ", provinces, Color::Blue),
        (" Cities ", cities, Color::Magenta),
    ];
    for ((title, count, color), area) in stats.into_iter().zip(stats_layout.iter()) {
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let content = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {count}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(block);
        frame.render_widget(content, *area);
    }

    // 当前主机名
    let hostname = app.hostname();
    let current = if hostname.is_empty() {
        Line::styled(
            "  No hostname yet: open the Generator to make a selection",
            Style::default().fg(c.muted),
        )
    } else {
        Line::from(vec![
            Span::styled("  Current hostname: ", Style::default().fg(c.muted)),
            Span::styled(
                hostname,
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(vec![Line::from(""), current]), layout[2]);
}
