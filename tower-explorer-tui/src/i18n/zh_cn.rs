//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, ApartmentsTexts, CommonTexts, DetailTexts, FloorsTexts, HelpTexts, HintTexts,
    KeyNames, ModalTexts, ScheduleTexts, StatusTexts, TowersTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "楼盘浏览器",
        quit: "退出",
        cancel: "取消",
        confirm: "确认",
        close: "关闭",
        unit: "单元 {}",
        floor: "{} 层",
        area: "面积",
        rooms: "房间",
        bathrooms: "卫生间",
        price: "价格",
        square_meters: "平方米",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows: "←↑↓→",
            help: "?",
            theme: "Alt+t",
            language: "Alt+l",
            quit: "q",
        },
        actions: ActionTexts {
            navigate: "移动",
            open: "打开",
            back: "返回",
            schedule: "预约看房",
            switch_button: "切换",
            help: "帮助",
            theme: "主题",
            language: "语言",
        },
    },

    // ========================================================================
    // 页面
    // ========================================================================
    towers: TowersTexts {
        title: "精品住宅楼",
        subtitle: "三栋风格各异的住宅楼，配套齐全、景观绝佳，总有一套适合您。",
        floors_available: "{} 层可选",
        explore: "查看楼栋",
    },

    floors: FloorsTexts {
        back_to_towers: "返回楼栋列表",
        units: "{} 套",
    },

    apartments: ApartmentsTexts {
        back_to_floors: "返回楼层列表",
        available_units: "{} 套在售",
        view_details: "查看详情",
    },

    detail: DetailTexts {
        back_to_floor: "返回 {} 层",
        layout: "户型图",
        thumbnail: "缩略图",
        schedule_viewing: "预约看房",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help: HelpTexts {
            title: "帮助",
            browsing: "浏览",
            move_cursor: "在卡片间移动",
            open: "打开 / 预约看房",
            back: "返回上一级",
            general: "通用",
            toggle_theme: "切换深色/浅色主题",
            switch_language: "切换语言",
            quit: "退出",
            close_hint: "按 Esc 关闭帮助",
        },
        schedule: ScheduleTexts {
            title: "预约看房",
            prompt: "确定预约看房：单元 {}？",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        viewing_requested: "已提交看房预约：单元 {}",
        theme_changed: "主题：{}",
        language_changed: "语言：{}",
        theme_dark: "深色",
        theme_light: "浅色",
        save_failed: "保存设置失败：{}",
        navigation_failed: "无法打开：{}",
    },
};
