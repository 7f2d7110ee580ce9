//! 页面视图

pub mod apartments;
pub mod detail;
pub mod floors;
pub mod towers;
