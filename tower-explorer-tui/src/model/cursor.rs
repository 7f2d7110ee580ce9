//! 卡片网格光标

/// 网格中当前选中的卡片（按行优先排列）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// 当前选中的索引
    pub selected: usize,
}

impl Cursor {
    /// 定位到指定索引
    pub fn at(selected: usize) -> Self {
        Self { selected }
    }

    /// 左移一格
    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 右移一格
    pub fn move_right(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// 上移一行
    pub fn move_up(&mut self, columns: usize) {
        if columns > 0 && self.selected >= columns {
            self.selected -= columns;
        }
    }

    /// 下移一行；最后一行不满时落到最后一项
    pub fn move_down(&mut self, len: usize, columns: usize) {
        if columns == 0 || len == 0 {
            return;
        }
        let current_row = self.selected / columns;
        let last_row = (len - 1) / columns;
        if current_row < last_row {
            self.selected = (self.selected + columns).min(len - 1);
        }
    }

    /// 选择第一项
    pub fn first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 列表长度变化后保证索引有效
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.last(len);
        }
    }
}
