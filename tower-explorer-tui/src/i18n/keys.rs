//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `towers.*`, `detail.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 含 `{}` 的文本是模板，使用 [`super::fill`] 填充。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 塔楼总览页面文本
    pub towers: TowersTexts,
    /// 楼层列表页面文本
    pub floors: FloorsTexts,
    /// 户型网格页面文本
    pub apartments: ApartmentsTexts,
    /// 户型详情页面文本
    pub detail: DetailTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏消息
    pub status: StatusTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    /// "Unit {}"
    pub unit: &'static str,
    /// "Floor {}"
    pub floor: &'static str,
    pub area: &'static str,
    pub rooms: &'static str,
    pub bathrooms: &'static str,
    pub price: &'static str,
    /// 面积单位
    pub square_meters: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows: &'static str, // "←↑↓→"
    pub help: &'static str,   // "?"
    pub theme: &'static str,  // "Alt+t"
    pub language: &'static str,
    pub quit: &'static str,
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub open: &'static str,
    pub back: &'static str,
    pub schedule: &'static str,
    pub switch_button: &'static str,
    pub help: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 塔楼总览页面
pub struct TowersTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// "{} Floors Available"
    pub floors_available: &'static str,
    pub explore: &'static str,
}

/// 楼层列表页面
pub struct FloorsTexts {
    pub back_to_towers: &'static str,
    /// "{} units"
    pub units: &'static str,
}

/// 户型网格页面
pub struct ApartmentsTexts {
    pub back_to_floors: &'static str,
    /// "{} available units"
    pub available_units: &'static str,
    pub view_details: &'static str,
}

/// 户型详情页面
pub struct DetailTexts {
    /// "Back to Floor {}"
    pub back_to_floor: &'static str,
    pub layout: &'static str,
    pub thumbnail: &'static str,
    pub schedule_viewing: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub help: HelpTexts,
    pub schedule: ScheduleTexts,
}

/// 帮助弹窗
pub struct HelpTexts {
    pub title: &'static str,
    pub browsing: &'static str,
    pub move_cursor: &'static str,
    pub open: &'static str,
    pub back: &'static str,
    pub general: &'static str,
    pub toggle_theme: &'static str,
    pub switch_language: &'static str,
    pub quit: &'static str,
    pub close_hint: &'static str,
}

/// 预约看房弹窗
pub struct ScheduleTexts {
    pub title: &'static str,
    /// "Schedule a viewing of unit {}?"
    pub prompt: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

/// 状态栏消息
pub struct StatusTexts {
    /// "Viewing requested for unit {}"
    pub viewing_requested: &'static str,
    /// "Theme: {}"
    pub theme_changed: &'static str,
    /// "Language: {}"
    pub language_changed: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
    /// "Failed to save settings: {}"
    pub save_failed: &'static str,
    /// "Cannot open: {}"
    pub navigation_failed: &'static str,
}
