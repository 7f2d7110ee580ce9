//! 卡片浏览消息

/// 卡片浏览消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseMessage {
    /// 左移
    MoveLeft,
    /// 右移
    MoveRight,
    /// 上移一行
    MoveUp,
    /// 下移一行
    MoveDown,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 打开选中项（进入下一级，或在详情页预约看房）
    Confirm,
}
