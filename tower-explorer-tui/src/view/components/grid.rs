//! 卡片网格布局
//!
//! 卡片按行优先排列；可见行数不足时整行滚动，保证选中卡片所在的行可见。

use ratatui::layout::Rect;

/// 卡片网格
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    /// 每行卡片数
    pub columns: usize,
    /// 单张卡片高度
    pub card_height: u16,
}

impl Grid {
    pub fn new(columns: usize, card_height: u16) -> Self {
        Self {
            columns: columns.max(1),
            card_height: card_height.max(1),
        }
    }

    /// 计算可见卡片的位置，返回 `(索引, 区域)`
    pub fn cells(&self, area: Rect, len: usize, selected: usize) -> Vec<(usize, Rect)> {
        if len == 0 || area.width == 0 || area.height == 0 {
            return Vec::new();
        }

        let total_rows = len.div_ceil(self.columns);
        let card_height = self.card_height.min(area.height);
        let visible_rows = usize::from(area.height / card_height).max(1);
        let selected_row = selected.min(len - 1) / self.columns;
        let first_row = selected_row.saturating_sub(visible_rows - 1);
        let last_row = (first_row + visible_rows).min(total_rows);

        let columns = to_u16(self.columns);
        let column_width = area.width / columns;

        let mut cells = Vec::new();
        for row in first_row..last_row {
            let y = area.y + to_u16(row - first_row) * card_height;
            for col in 0..self.columns {
                let index = row * self.columns + col;
                if index >= len {
                    break;
                }
                let col = to_u16(col);
                let x = area.x + col * column_width;
                // 最后一列吃掉除不尽的宽度
                let width = if col + 1 == columns {
                    area.width - col * column_width
                } else {
                    column_width
                };
                cells.push((index, Rect::new(x, y, width, card_height)));
            }
        }
        cells
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_rows_left_to_right() {
        let grid = Grid::new(3, 5);
        let cells = grid.cells(Rect::new(0, 0, 90, 20), 3, 0);
        let xs: Vec<u16> = cells.iter().map(|(_, r)| r.x).collect();
        assert_eq!(xs, vec![0, 30, 60]);
        assert!(cells.iter().all(|(_, r)| r.y == 0 && r.width == 30));
    }

    #[test]
    fn last_column_absorbs_remainder() {
        let grid = Grid::new(4, 5);
        let cells = grid.cells(Rect::new(2, 1, 42, 10), 4, 0);
        assert_eq!(cells[3].1.x, 2 + 30);
        assert_eq!(cells[3].1.width, 12);
    }

    #[test]
    fn partial_last_row() {
        let grid = Grid::new(5, 4);
        let cells = grid.cells(Rect::new(0, 0, 50, 40), 12, 0);
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[11].0, 11);
        assert_eq!(cells[11].1.y, 8);
        assert_eq!(cells[11].1.x, 10);
    }

    #[test]
    fn scrolls_to_keep_selection_visible() {
        // 18 层，5 列 → 4 行；只能显示 2 行
        let grid = Grid::new(5, 4);
        let area = Rect::new(0, 0, 50, 8);

        let top = grid.cells(area, 18, 0);
        assert_eq!(top.first().map(|(i, _)| *i), Some(0));
        assert_eq!(top.len(), 10);

        let bottom = grid.cells(area, 18, 17);
        assert_eq!(bottom.first().map(|(i, _)| *i), Some(10));
        assert_eq!(bottom.last().map(|(i, _)| *i), Some(17));
        assert_eq!(bottom[0].1.y, 0);
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        let grid = Grid::new(3, 5);
        assert!(grid.cells(Rect::new(0, 0, 90, 20), 0, 0).is_empty());
        assert!(grid.cells(Rect::new(0, 0, 0, 20), 3, 0).is_empty());
    }

    #[test]
    fn short_area_still_shows_selected_row() {
        let grid = Grid::new(3, 9);
        let cells = grid.cells(Rect::new(0, 0, 30, 4), 3, 2);
        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(|(_, r)| r.height == 4));
    }
}
