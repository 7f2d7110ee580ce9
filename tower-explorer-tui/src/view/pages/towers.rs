//! 塔楼总览页

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use tower_explorer_core::Tower;

use crate::i18n::{fill, t};
use crate::model::App;
use crate::view::components::grid::Grid;
use crate::view::theme::{Styles, ThemeColors};

/// 卡片高度
const CARD_HEIGHT: u16 = 10;

/// 渲染塔楼总览
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let towers = app.navigator.towers();
    let grid = Grid::new(app.page().columns(), CARD_HEIGHT);

    for (index, cell) in grid.cells(area, towers.len(), app.cursor.selected) {
        if let Some(tower) = towers.get(index) {
            render_card(frame, cell, tower, index == app.cursor.selected);
        }
    }
}

/// 渲染单个塔楼卡片
fn render_card(frame: &mut Frame, area: Rect, tower: &Tower, selected: bool) {
    let texts = t();
    let accent = ThemeColors::accent(tower.color);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", tower.name),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if selected {
            Styles::selected_border(accent)
        } else {
            Styles::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 简介
            Constraint::Length(1), // 楼层数
            Constraint::Length(1), // 按钮
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(tower.description).wrap(Wrap { trim: true }),
        layout[0],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            fill(texts.towers.floors_available, tower.floors),
            Style::default().fg(accent),
        )),
        layout[1],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!(" {} → ", texts.towers.explore),
            Styles::button(selected),
        )),
        layout[2],
    );
}
