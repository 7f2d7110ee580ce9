//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal, Page};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(colors().warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    match app.modal.active {
        Some(Modal::Help) => return vec![(keys.esc, texts.common.close)],
        Some(Modal::ScheduleViewing { .. }) => {
            return vec![
                (keys.tab, actions.switch_button),
                (keys.enter, texts.common.confirm),
                (keys.esc, texts.common.cancel),
            ];
        }
        None => {}
    }

    let mut hints = Vec::new();

    match app.page() {
        Page::Towers => {
            hints.push((keys.arrows, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        Page::Floors | Page::Apartments => {
            hints.push((keys.arrows, actions.navigate));
            hints.push((keys.enter, actions.open));
            hints.push((keys.esc, actions.back));
        }
        Page::ApartmentDetail => {
            hints.push((keys.enter, actions.schedule));
            hints.push((keys.esc, actions.back));
        }
    }

    hints.push((keys.help, actions.help));
    hints.push((keys.theme, actions.theme));
    hints.push((keys.language, actions.language));
    hints.push((keys.quit, texts.common.quit));

    hints
}
