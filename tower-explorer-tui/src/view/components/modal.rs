//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::{fill, t};
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::ScheduleViewing {
            apartment_id,
            unit_type,
            price,
            focus,
        } => render_schedule_viewing(frame, apartment_id, unit_type, price, *focus),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清空背景并绘制弹窗边框，返回内容区域
fn render_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let c = colors();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg).fg(c.fg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.modal.help;
    let keys = &texts.hints.keys;

    let area = centered_rect(56, 16, frame.area());
    let inner = render_frame(frame, area, help.title);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default()
                .fg(colors().highlight)
                .add_modifier(Modifier::BOLD),
        )
    };
    let row = |key: String, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(colors().fg)),
        ])
    };

    let lines = vec![
        section(help.browsing),
        row(format!("{} / hjkl", keys.arrows), help.move_cursor),
        row("Home / End".to_string(), help.move_cursor),
        row(keys.enter.to_string(), help.open),
        row(format!("{} / Backspace", keys.esc), help.back),
        Line::from(""),
        section(help.general),
        row(keys.theme.to_string(), help.toggle_theme),
        row(keys.language.to_string(), help.switch_language),
        row(format!("{} / Alt+h", keys.help), texts.hints.actions.help),
        row(format!("{} / Ctrl+c", keys.quit), help.quit),
        Line::from(""),
        Line::styled(help.close_hint, Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染预约看房弹窗
fn render_schedule_viewing(
    frame: &mut Frame,
    apartment_id: &str,
    unit_type: &str,
    price: &str,
    focus: usize,
) {
    let texts = t();
    let area = centered_rect(48, 9, frame.area());
    let inner = render_frame(frame, area, texts.modal.schedule.title);

    let lines = vec![
        Line::from(""),
        Line::from(fill(texts.modal.schedule.prompt, apartment_id)),
        Line::from(vec![
            Span::styled(format!("{unit_type}  "), Styles::title()),
            Span::styled(price.to_string(), Styles::price()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), Styles::button(focus == 0)),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.confirm), Styles::button(focus == 1)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(48, 9, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 9));

        let rect = centered_rect(10, 4, area);
        assert_eq!(rect, Rect::new(5, 3, 10, 4));
    }
}
