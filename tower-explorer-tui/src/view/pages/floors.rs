//! 楼层列表页

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tower_explorer_core::Floor;

use crate::i18n::{fill, t};
use crate::model::App;
use crate::view::components::grid::Grid;
use crate::view::theme::{Styles, ThemeColors};

const CARD_HEIGHT: u16 = 4;

/// 渲染楼层列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(tower) = app.navigator.selected_tower() else {
        return;
    };
    let accent = ThemeColors::accent(tower.color);
    let floors = app.navigator.floors();
    let grid = Grid::new(app.page().columns(), CARD_HEIGHT);

    for (index, cell) in grid.cells(area, floors.len(), app.cursor.selected) {
        if let Some(floor) = floors.get(index) {
            let border = if index == app.cursor.selected {
                Styles::selected_border(accent)
            } else {
                Styles::border()
            };
            render_card(frame, cell, floor, border, accent);
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    floor: &Floor,
    border: Style,
    accent: Color,
) {
    let texts = t();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);

    let lines = vec![
        Line::from(Span::styled(
            fill(texts.common.floor, floor.number),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::styled(fill(texts.floors.units, floor.apartments.len()), Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
