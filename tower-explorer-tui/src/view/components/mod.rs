//! 可复用 UI 组件

pub mod grid;
pub mod header;
pub mod modal;
pub mod statusbar;
pub mod text;
