//! 户型详情页

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use tower_explorer_core::{Apartment, PlaceholderImage};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::text::{pad_right, truncate};
use crate::view::theme::{Styles, ThemeColors};

/// 详情标签列宽
const LABEL_WIDTH: usize = 12;

/// 渲染户型详情
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let (Some(tower), Some(apartment)) = (
        app.navigator.selected_tower(),
        app.navigator.selected_apartment(),
    ) else {
        return;
    };
    let accent = ThemeColors::accent(tower.color);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_layout_image(frame, columns[0], apartment);
    render_facts(frame, columns[1], apartment, accent);
}

/// 左侧：户型图占位
fn render_layout_image(frame: &mut Frame, area: Rect, apartment: &Apartment) {
    let texts = t();
    let block = Block::default()
        .title(format!(" {} ", texts.detail.layout))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top_padding = inner.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::styled("▦", Styles::muted()));
    lines.push(Line::styled(
        PlaceholderImage::layout(apartment.unit_type).text,
        Styles::title(),
    ));
    lines.push(Line::styled(
        truncate(&apartment.layout_image, usize::from(inner.width)),
        Styles::muted(),
    ));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// 右侧：户型数据与预约按钮
fn render_facts(frame: &mut Frame, area: Rect, apartment: &Apartment, accent: Color) {
    let texts = t();
    let block = Block::default()
        .title(format!(" {} ", apartment.id))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::selected_border(accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fact = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(pad_right(label, LABEL_WIDTH), Styles::muted()),
            Span::raw(value),
        ])
    };

    let lines = vec![
        Line::styled(
            apartment.unit_type.label(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        fact(
            texts.common.area,
            format!("{} {}", apartment.area, texts.common.square_meters),
        ),
        fact(texts.common.rooms, apartment.rooms.to_string()),
        fact(texts.common.bathrooms, apartment.bathrooms.to_string()),
        Line::from(vec![
            Span::styled(pad_right(texts.common.price, LABEL_WIDTH), Styles::muted()),
            Span::styled(apartment.formatted_price(), Styles::price()),
        ]),
        Line::from(""),
        Line::styled(texts.detail.thumbnail, Styles::muted()),
        Line::styled(
            truncate(&apartment.thumbnail, usize::from(inner.width)),
            Styles::muted(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.detail.schedule_viewing), Styles::button(true)),
            Span::styled(format!(" [{}]", texts.hints.keys.enter), Styles::hint_key()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
