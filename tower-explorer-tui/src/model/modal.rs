//! 弹窗状态

use tower_explorer_core::Apartment;

/// 弹窗枚举：每种弹窗都是一个变体，携带该弹窗的所有数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 帮助信息
    Help,
    /// 预约看房确认
    ScheduleViewing {
        /// 单元 ID
        apartment_id: String,
        /// 户型名称
        unit_type: &'static str,
        /// 格式化后的价格
        price: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示预约看房弹窗，默认焦点在“确认”
    pub fn show_schedule_viewing(&mut self, apartment: &Apartment) {
        self.active = Some(Modal::ScheduleViewing {
            apartment_id: apartment.id.clone(),
            unit_type: apartment.unit_type.label(),
            price: apartment.formatted_price(),
            focus: 1,
        });
    }
}
