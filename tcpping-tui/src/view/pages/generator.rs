//! 主机名生成器页面视图
//!
//! 上方为表单，下方为选择摘要与生成结果。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::value_row;
use crate::model::{App, FormRow};
use crate::view::theme::{colors, Styles};

const LABEL_WIDTH: usize = 10;

/// 渲染生成器页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = app.generator.rows(&app.controller);
    let form_height = u16::try_from(rows.len() + 2).unwrap_or(u16::MAX);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form_height), // 表单
            Constraint::Length(8),           // 摘要
            Constraint::Min(4),              // 结果
        ])
        .split(area);

    render_form(app, rows, frame, layout[0]);
    render_summary(app, frame, layout[1]);
    render_result(app, frame, layout[2]);
}

fn render_form(app: &App, rows: &[FormRow], frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut lines = vec![Line::from("")];

    for row in rows {
        let is_selected = app.generator.selected == *row && app.focus.is_content();
        if *row == FormRow::Copy {
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.highlight)
            };
            lines.push(Line::from(vec![
                Span::raw(if is_selected { "▶ " } else { "  " }),
                Span::styled("[ Copy hostname ]", style),
            ]));
            continue;
        }

        let (value, style) = field_value(app, *row);
        lines.push(value_row(row.label(), LABEL_WIDTH, value, style, is_selected));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// 表单中某一行显示的值与样式
fn field_value(app: &App, row: FormRow) -> (String, Style) {
    let c = colors();
    let catalog = app.catalog();
    let state = &app.generator.selection;
    let value = Style::default().fg(c.highlight);
    let placeholder = Style::default().fg(c.muted);

    match row {
        FormRow::Protocol => {
            let protocol = state.protocol();
            (format!("{} ({})", protocol.label(), protocol), value)
        }
        FormRow::Country => match catalog.country_name(state) {
            Some(name) => (name.to_string(), value),
            None => ("Select a country".to_string(), placeholder),
        },
        FormRow::Province => match catalog.province_name(state) {
            Some(name) => (name.to_string(), value),
            None => ("All provinces".to_string(), placeholder),
        },
        FormRow::City => match catalog.city_name(state) {
            Some(name) => (name.to_string(), value),
            None if catalog.city_required(state.country()) => {
                ("Required".to_string(), Style::default().fg(c.warning))
            }
            None => ("Any city".to_string(), placeholder),
        },
        FormRow::Provider => match (state.provider(), catalog.provider_info(state)) {
            (Some(code), Some(info)) if info.supports(state.protocol()) => {
                (format!("{} ({code})", info.name), value)
            }
            (Some(code), Some(info)) => (
                format!("{} ({code}, no {})", info.name, state.protocol().label()),
                Style::default().fg(c.warning),
            ),
            _ if catalog
                .providers(state.country(), state.province(), state.city())
                .is_empty() =>
            {
                ("No providers here".to_string(), placeholder)
            }
            _ => ("Select a provider".to_string(), placeholder),
        },
        FormRow::Copy => (String::new(), placeholder),
    }
}

fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let catalog = app.catalog();
    let state = &app.generator.selection;

    let entry = |label: &'static str, value: Option<&str>| {
        Line::from(vec![
            Span::styled(format!("  {label:<10}"), Style::default().fg(c.muted)),
            Span::styled(
                value.unwrap_or("-").to_string(),
                Style::default().fg(c.fg),
            ),
        ])
    };

    let mut lines = vec![
        entry("Protocol", Some(state.protocol().label())),
        entry("Country", catalog.country_name(state)),
    ];
    if app.controller.is_hierarchical(state.country()) {
        lines.push(entry("Province", catalog.province_name(state)));
    }
    lines.push(entry("City", catalog.city_name(state)));
    lines.push(entry(
        "Provider",
        catalog.provider_info(state).map(|p| p.name.as_str()),
    ));
    if let Some(loc) = catalog.location_of(state) {
        lines.push(entry(
            "Location",
            Some(&format!("{:.2}, {:.2}", loc.lat, loc.lon)),
        ));
    }

    let block = Block::default()
        .title(" Selection ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_result(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let hostname = app.hostname();

    let lines = if hostname.is_empty() {
        vec![Line::styled(
            "  Complete the selection to generate a hostname",
            Style::default().fg(c.muted),
        )]
    } else {
        let status = if app.generator.selection.copied() {
            Span::styled(
                "  Copied!",
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("  Click to Copy (c)", Style::default().fg(c.muted))
        };
        vec![
            Line::from(Span::styled(
                format!("  {hostname}"),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            )),
            Line::from(status),
        ]
    };

    let block = Block::default()
        .title(" Hostname ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
