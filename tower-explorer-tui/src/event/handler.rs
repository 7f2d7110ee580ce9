//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::{global_message, is_modal_close};
use crate::message::{AppMessage, BrowseMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: &Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(*key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(ref modal) = app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if let Some(msg) = global_message(&key) {
        return msg;
    }

    handle_browse_keys(key)
}

/// 卡片网格中的按键
fn handle_browse_keys(key: KeyEvent) -> AppMessage {
    if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
        return AppMessage::Noop;
    }

    let msg = match key.code {
        KeyCode::Left | KeyCode::Char('h') => BrowseMessage::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => BrowseMessage::MoveRight,
        KeyCode::Up | KeyCode::Char('k') => BrowseMessage::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => BrowseMessage::MoveDown,
        KeyCode::Home => BrowseMessage::SelectFirst,
        KeyCode::End => BrowseMessage::SelectLast,
        KeyCode::Enter => BrowseMessage::Confirm,
        _ => return AppMessage::Noop,
    };

    AppMessage::Browse(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if is_modal_close(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match modal {
        // 帮助弹窗只响应关闭按键
        Modal::Help => match key.code {
            KeyCode::Enter | KeyCode::Char('q' | '?') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        Modal::ScheduleViewing { .. } => match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
    }
}
