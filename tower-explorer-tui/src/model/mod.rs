//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod cursor;         // 卡片网格光标
//!         mod modal;          // 弹窗状态
//!         mod page;           // 页面（由核心库的 `ViewKind` 派生）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub navigator: Navigator<StdRng>,   // 楼盘导航状态机
//!             pub cursor: Cursor,                 // 当前页面的光标
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub modal: ModalState,              // 弹窗状态
//!             pub config: AppConfig,              // 当前配置
//!         }
//!
//!     导航状态不在本层重复保存：
//!     塔楼 / 楼层 / 单元的选择都由 tower-explorer-core 的 Navigator 持有，
//!     它的 ViewState 是显式的枚举，不会出现“选中了单元却没有楼层”的状态。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、页面（Page）与光标（Cursor）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Page 是一个简单的枚举，相当于房间的门牌号：
//!         - Towers            塔楼总览（3 列）
//!         - Floors            楼层列表（5 列）
//!         - Apartments        户型网格（4 列）
//!         - ApartmentDetail   户型详情
//!
//!     Cursor 记录当前页面中选中的卡片，按行优先排列：
//!         - move_left() / move_right(len)
//!         - move_up(columns) / move_down(len, columns)
//!         - first() / last(len)
//!
//!     数据流：
//!         用户按方向键
//!             ↓
//!         event/handler.rs 返回 Browse(MoveUp/MoveDown/...)
//!             ↓
//!         update/browse.rs 根据 app.page().columns() 移动光标
//!             ↓
//!         view/pages/*.rs 高亮对应的卡片
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - Help
//!             - ScheduleViewing { apartment_id, unit_type, price, focus }
//!
//!         ModalState 容器：
//!             - active: Option<Modal>    // None = 无弹窗
//!             - show_xxx() / close()
//!

mod app;
mod cursor;
mod modal;
mod page;

#[cfg(test)]
pub(crate) use app::test_support;
pub use app::App;
pub use cursor::Cursor;
pub use modal::{Modal, ModalState};
pub use page::Page;
