//! 户型网格页

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tower_explorer_core::Apartment;

use crate::i18n::t;
use crate::model::App;
use crate::view::components::grid::Grid;
use crate::view::components::text::truncate;
use crate::view::theme::{Styles, ThemeColors};

const CARD_HEIGHT: u16 = 9;

/// 渲染户型网格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let (Some(tower), Some(floor)) = (app.navigator.selected_tower(), app.navigator.selected_floor())
    else {
        return;
    };
    let accent = ThemeColors::accent(tower.color);
    let grid = Grid::new(app.page().columns(), CARD_HEIGHT);

    for (index, cell) in grid.cells(area, floor.apartments.len(), app.cursor.selected) {
        if let Some(apartment) = floor.apartments.get(index) {
            render_card(frame, cell, apartment, accent, index == app.cursor.selected);
        }
    }
}

/// 渲染单个户型卡片
fn render_card(frame: &mut Frame, area: Rect, apartment: &Apartment, accent: Color, selected: bool) {
    let texts = t();

    let block = Block::default()
        .title(format!(" {} ", apartment.id))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if selected {
            Styles::selected_border(accent)
        } else {
            Styles::border()
        });

    let inner = block.inner(area);
    let width = usize::from(inner.width);

    let lines = vec![
        Line::styled(
            apartment.unit_type.label(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Line::styled(truncate(&apartment.thumbnail, width), Styles::muted()),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.common.area), Styles::muted()),
            Span::raw(format!("{} {}", apartment.area, texts.common.square_meters)),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.common.rooms), Styles::muted()),
            Span::raw(apartment.rooms.to_string()),
            Span::styled(format!("  {}: ", texts.common.bathrooms), Styles::muted()),
            Span::raw(apartment.bathrooms.to_string()),
        ]),
        Line::styled(apartment.formatted_price(), Styles::price()),
        Line::styled(
            truncate(&format!(" {} ", texts.apartments.view_details), width),
            Styles::button(selected),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
