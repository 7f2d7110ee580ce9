//! 快捷键表
//!
//! 全局快捷键集中在 `GLOBAL_BINDINGS` 中，按顺序匹配；
//! 方向键与 hjkl 的映射见 handler.rs。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::message::AppMessage;

/// 修饰键匹配方式
#[derive(Debug, Clone, Copy)]
enum Modifiers {
    /// 必须与给定修饰键完全一致
    Exact(KeyModifiers),
    /// 不含 Alt 即可（`?` 在多数终端上带 Shift 上报）
    WithoutAlt,
}

/// 一条全局快捷键：按键 + 修饰键 → 消息
#[derive(Debug, Clone, Copy)]
struct GlobalBinding {
    code: KeyCode,
    modifiers: Modifiers,
    message: AppMessage,
}

impl GlobalBinding {
    const fn plain(code: KeyCode, message: AppMessage) -> Self {
        Self {
            code,
            modifiers: Modifiers::Exact(KeyModifiers::NONE),
            message,
        }
    }

    const fn alt(c: char, message: AppMessage) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: Modifiers::Exact(KeyModifiers::ALT),
            message,
        }
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        match self.modifiers {
            Modifiers::Exact(modifiers) => key.modifiers == modifiers,
            Modifiers::WithoutAlt => !key.modifiers.contains(KeyModifiers::ALT),
        }
    }
}

/// 全局快捷键（弹窗关闭时生效）
const GLOBAL_BINDINGS: &[GlobalBinding] = &[
    GlobalBinding {
        code: KeyCode::Char('c'),
        modifiers: Modifiers::Exact(KeyModifiers::CONTROL),
        message: AppMessage::Quit,
    },
    GlobalBinding::plain(KeyCode::Char('q'), AppMessage::Quit),
    GlobalBinding {
        code: KeyCode::Char('?'),
        modifiers: Modifiers::WithoutAlt,
        message: AppMessage::ShowHelp,
    },
    GlobalBinding::alt('h', AppMessage::ShowHelp),
    GlobalBinding::alt('t', AppMessage::ToggleTheme),
    GlobalBinding::alt('l', AppMessage::CycleLanguage),
    GlobalBinding::plain(KeyCode::Esc, AppMessage::GoBack),
    GlobalBinding::plain(KeyCode::Backspace, AppMessage::GoBack),
];

/// 查找全局快捷键对应的消息
pub fn global_message(key: &KeyEvent) -> Option<AppMessage> {
    GLOBAL_BINDINGS
        .iter()
        .find(|binding| binding.matches(key))
        .map(|binding| binding.message)
}

/// 弹窗中始终可用的关闭键：Esc / Ctrl+C
pub fn is_modal_close(key: &KeyEvent) -> bool {
    matches!(
        (key.modifiers, key.code),
        (KeyModifiers::NONE, KeyCode::Esc) | (KeyModifiers::CONTROL, KeyCode::Char('c'))
    )
}
