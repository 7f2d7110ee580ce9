//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 页头 + 内容区 + 状态栏
//!         mod components;     // 可复用组件（卡片网格、页头、状态栏、弹窗）
//!         mod pages;          // 四个页面
//!         pub mod theme;      // 主题与样式
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────────┐
//!         │ Tower Explorer › Tower A › Floor 5           │  标题栏（面包屑）
//!         ├──────────────────────────────────────────────┤
//!         │ ← Back to Floors                             │  页头
//!         │ Tower A · Floor 5                            │
//!         ├──────────────────────────────────────────────┤
//!         │ ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐  │  卡片网格
//!         │ │ apt-5-1│ │ apt-5-2│ │ apt-5-3│ │ apt-5-4│  │  （超出高度时滚动）
//!         │ └────────┘ └────────┘ └────────┘ └────────┘  │
//!         ├──────────────────────────────────────────────┤
//!         │ ←↑↓→ Move │ Enter Open │ Esc Back │ ...      │  状态栏
//!         └──────────────────────────────────────────────┘
//!
//!     弹窗最后渲染，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
