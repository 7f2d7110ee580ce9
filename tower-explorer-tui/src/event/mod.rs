//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                              主循环 (app.rs)                                │
//! │                                                                             │
//! │   ┌─────────┐          ┌───────────┐          ┌──────────┐                  │
//! │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │                  │
//! │   │   层    │   翻译    │    层     │   消费    │    层    │                  │
//! │   └─────────┘          │ AppMessage│          └────┬─────┘                  │
//! │        ▲               │ BrowseMsg │               │ 修改                   │
//! │        │               │ ModalMsg  │               ▼                        │
//! │   ┌─────────┐          └───────────┘          ┌──────────┐    ┌──────────┐ │
//! │   │  View   │ ◀────────────── 读取 ─────────── │  Model   │───▶│ Navigator│ │
//! │   │   层    │                                 │    层    │    │  (core)  │ │
//! │   └─────────┘                                 └──────────┘    └──────────┘ │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 全局快捷键表
//!
//!
//!     按键优先级：
//!         1. 弹窗打开时，所有按键交给弹窗（Esc 关闭）
//!         2. 全局快捷键：q / Ctrl+C、? / Alt+h、Alt+t、Alt+l、Esc / Backspace
//!         3. 卡片网格：方向键 / hjkl、Home、End、Enter
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
