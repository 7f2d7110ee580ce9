//! 应用主消息枚举

use super::{BrowseMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 卡片浏览相关消息
    Browse(BrowseMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 返回上一级
    GoBack,

    /// 显示帮助
    ShowHelp,

    /// 切换深色/浅色主题
    ToggleTheme,

    /// 切换界面语言
    CycleLanguage,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
