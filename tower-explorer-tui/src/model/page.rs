//! 页面定义

use tower_explorer_core::ViewKind;

use crate::i18n::t;

/// 页面枚举
///
/// 与核心库的 `ViewKind` 一一对应，额外携带只与终端界面有关的属性
/// （网格列数、页面标题）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 塔楼总览
    #[default]
    Towers,
    /// 楼层列表
    Floors,
    /// 户型网格
    Apartments,
    /// 户型详情
    ApartmentDetail,
}

impl From<ViewKind> for Page {
    fn from(kind: ViewKind) -> Self {
        match kind {
            ViewKind::TowerList => Page::Towers,
            ViewKind::FloorList => Page::Floors,
            ViewKind::ApartmentGrid => Page::Apartments,
            ViewKind::ApartmentDetail => Page::ApartmentDetail,
        }
    }
}

impl Page {
    /// 卡片网格的列数
    pub fn columns(self) -> usize {
        match self {
            Page::Towers => 3,
            Page::Floors => 5,
            Page::Apartments => 4,
            Page::ApartmentDetail => 1,
        }
    }

    /// 返回按钮文字（总览页没有）
    pub fn back_label(self, floor_number: Option<u32>) -> Option<String> {
        let texts = t();
        match self {
            Page::Towers => None,
            Page::Floors => Some(texts.floors.back_to_towers.to_string()),
            Page::Apartments => Some(texts.apartments.back_to_floors.to_string()),
            Page::ApartmentDetail => Some(crate::i18n::fill(
                texts.detail.back_to_floor,
                floor_number.unwrap_or_default(),
            )),
        }
    }
}
