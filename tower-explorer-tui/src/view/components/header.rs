//! 页头：返回按钮、页面标题与副标题

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::{fill, t};
use crate::model::{App, Page};
use crate::view::theme::{Styles, ThemeColors};

/// 页头高度
pub const HEIGHT: u16 = 4;

/// 渲染页头
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let page = app.page();
    let floor_number = app.navigator.selected_floor().map(|floor| floor.number);

    let back_line = match page.back_label(floor_number) {
        Some(label) => Line::from(vec![
            Span::styled(format!(" ← {label} "), Styles::muted()),
            Span::styled(format!("[{}]", texts.hints.keys.esc), Styles::hint_key()),
        ]),
        None => Line::from(""),
    };

    let (title, subtitle) = titles(app, page);
    let title_style = match app.navigator.selected_tower() {
        Some(tower) => Style::default()
            .fg(ThemeColors::accent(tower.color))
            .add_modifier(Modifier::BOLD),
        None => Styles::title(),
    };

    let lines = vec![
        back_line,
        Line::from(Span::styled(format!(" {title}"), title_style)),
        Line::from(Span::styled(format!(" {subtitle}"), Styles::muted())),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// 当前页面的标题与副标题
fn titles(app: &App, page: Page) -> (String, String) {
    let texts = t();
    let tower = app.navigator.selected_tower();
    let floor = app.navigator.selected_floor();

    match (page, tower, floor) {
        (Page::Floors, Some(tower), _) => (tower.name.to_string(), tower.description.to_string()),
        (Page::Apartments, Some(tower), Some(floor)) => (
            floor_heading(tower.name, floor.number),
            fill(texts.apartments.available_units, floor.apartments.len()),
        ),
        (Page::ApartmentDetail, Some(tower), Some(floor)) => {
            let unit = app
                .navigator
                .selected_apartment()
                .map(|apartment| fill(texts.common.unit, &apartment.id))
                .unwrap_or_default();
            (floor_heading(tower.name, floor.number), unit)
        }
        _ => (texts.towers.title.to_string(), texts.towers.subtitle.to_string()),
    }
}

/// `Tower A - Floor 5`
fn floor_heading(tower_name: &str, floor_number: u32) -> String {
    format!("{tower_name} - {}", fill(t().common.floor, floor_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::test_app;

    #[test]
    fn detail_heading_names_floor_and_unit_below() {
        let mut app = test_app();
        app.navigator.select_tower("tower-a").unwrap();
        app.navigator.select_floor(5).unwrap();
        app.navigator.select_apartment("apt-5-1").unwrap();

        let (title, subtitle) = titles(&app, Page::ApartmentDetail);
        assert!(title.starts_with("Tower A - "));
        assert!(title.contains('5'));
        assert!(!title.contains("apt-5-1"));
        assert!(subtitle.contains("apt-5-1"));
    }

    #[test]
    fn grid_and_detail_share_floor_heading() {
        let mut app = test_app();
        app.navigator.select_tower("tower-b").unwrap();
        app.navigator.select_floor(3).unwrap();
        let (grid_title, _) = titles(&app, Page::Apartments);

        app.navigator.select_apartment("apt-3-2").unwrap();
        let (detail_title, _) = titles(&app, Page::ApartmentDetail);
        assert!(grid_title.starts_with("Tower B - "));
        assert!(detail_title.starts_with("Tower B - "));
    }

    #[test]
    fn overview_has_no_tower_heading() {
        let app = test_app();
        let (title, _) = titles(&app, Page::Towers);
        assert!(!title.contains("Tower A"));
    }
}
