//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::{fill, t};
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let c = colors();

    frame.render_widget(Block::default().style(Style::default().bg(c.bg).fg(c.fg)), size);

    // 四层布局：标题栏 + 页头 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                         // 标题栏
            Constraint::Length(components::header::HEIGHT), // 页头
            Constraint::Min(1),                            // 主内容区
            Constraint::Length(1),                         // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    components::header::render(app, frame, main_layout[1]);
    render_page_content(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏（应用名 + 面包屑）
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = t();

    let mut spans = vec![Span::styled(format!(" {}", texts.common.app_name), Styles::title())];
    let mut crumbs = Vec::new();
    if let Some(tower) = app.navigator.selected_tower() {
        crumbs.push(tower.name.to_string());
    }
    if let Some(floor) = app.navigator.selected_floor() {
        crumbs.push(fill(texts.common.floor, floor.number));
    }
    if let Some(apartment) = app.navigator.selected_apartment() {
        crumbs.push(fill(texts.common.unit, &apartment.id));
    }
    for crumb in crumbs {
        spans.push(Span::raw(" › "));
        spans.push(Span::raw(crumb));
    }

    let title = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Styles::border());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.page() {
        Page::Towers => pages::towers::render(app, frame, inner_area),
        Page::Floors => pages::floors::render(app, frame, inner_area),
        Page::Apartments => pages::apartments::render(app, frame, inner_area),
        Page::ApartmentDetail => pages::detail::render(app, frame, inner_area),
    }
}
