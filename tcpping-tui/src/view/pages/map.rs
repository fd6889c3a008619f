//! 地图页面视图
//!
//! 世界地图缩放到所选国家附近；当前作用域内的城市画成暗点，
//! 选择的最具体位置画成标记。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Map, MapResolution, Points},
    widgets::Paragraph,
    Frame,
};
use tcpping_core::{GeoPoint, LocationDictionary, SelectionState};

use crate::model::{App, MapDetail};
use crate::view::theme::colors;

/// 整个世界
const WORLD: Bounds = Bounds {
    lon: [-180.0, 180.0],
    lat: [-90.0, 90.0],
};

/// 国家范围外留出的边距（度）
const MIN_PADDING: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    lon: [f64; 2],
    lat: [f64; 2],
}

/// 渲染地图页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let catalog = app.catalog();
    let state = &app.generator.selection;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    // 标题行：当前位置
    let place: Vec<&str> = [
        catalog.country_name(state),
        catalog.province_name(state),
        catalog.city_name(state),
    ]
    .into_iter()
    .flatten()
    .collect();
    let marker = catalog.location_of(state);
    let title = if place.is_empty() {
        "No country selected".to_string()
    } else {
        place.join(" / ")
    };
    let mut header = vec![Span::styled(
        format!(" {title}"),
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    )];
    if let Some(loc) = marker {
        header.push(Span::styled(
            format!("  ({:.2}, {:.2})", loc.lat, loc.lon),
            Style::default().fg(c.muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(header)), layout[0]);

    let bounds = country_bounds(&app.dictionary, state).unwrap_or(WORLD);
    let scope: Vec<(f64, f64)> = catalog
        .scope_points(state)
        .into_iter()
        .map(|p| (p.lon, p.lat))
        .collect();
    let resolution = match app.settings.map_detail {
        MapDetail::Low => MapResolution::Low,
        MapDetail::High => MapResolution::High,
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(bounds.lon)
        .y_bounds(bounds.lat)
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: c.land,
                resolution,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &scope,
                color: c.muted,
            });
            if let Some(GeoPoint { lat, lon }) = marker {
                ctx.print(lon, lat, Span::styled("●", Style::default().fg(c.marker)));
            }
        });
    frame.render_widget(canvas, layout[1]);
}

/// 所选国家所有已知坐标的包围盒，加上边距并裁剪到世界范围
fn country_bounds(dictionary: &LocationDictionary, state: &SelectionState) -> Option<Bounds> {
    let country = dictionary.country(state.country()?)?;
    let mut points = country
        .all_cities()
        .filter_map(|(_, city)| city.loc)
        .chain(country.loc);

    let first = points.next()?;
    let init = Bounds {
        lon: [first.lon, first.lon],
        lat: [first.lat, first.lat],
    };
    let b = points.fold(init, |b, p| Bounds {
        lon: [b.lon[0].min(p.lon), b.lon[1].max(p.lon)],
        lat: [b.lat[0].min(p.lat), b.lat[1].max(p.lat)],
    });

    let pad_lon = ((b.lon[1] - b.lon[0]) * 0.15).max(MIN_PADDING);
    let pad_lat = ((b.lat[1] - b.lat[0]) * 0.15).max(MIN_PADDING);
    Some(Bounds {
        lon: [
            (b.lon[0] - pad_lon).max(WORLD.lon[0]),
            (b.lon[1] + pad_lon).min(WORLD.lon[1]),
        ],
        lat: [
            (b.lat[0] - pad_lat).max(WORLD.lat[0]),
            (b.lat[1] + pad_lat).min(WORLD.lat[1]),
        ],
    })
}
