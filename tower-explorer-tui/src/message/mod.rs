//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 相当于将形形色色的按键翻译成 Update 能够看懂的 Messages。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 `AppMessage`
//!         mod browse;         // 卡片浏览子消息
//!         mod modal;          // 弹窗子消息
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                           // 退出应用
//!             Browse(BrowseMessage),          // 光标移动 / 打开卡片
//!             Modal(ModalMessage),            // 弹窗内操作
//!             GoBack,                         // 返回上一级（或关闭弹窗）
//!             ShowHelp,                       // 显示帮助
//!             ToggleTheme,                    // 切换主题
//!             CycleLanguage,                  // 切换语言
//!             Noop,                           // 无操作，用于代替 Option::None
//!         }
//!
//!
//! 最后，Event 将消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod browse;
mod modal;

pub use app::AppMessage;
pub use browse::BrowseMessage;
pub use modal::ModalMessage;
