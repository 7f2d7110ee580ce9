//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, ApartmentsTexts, CommonTexts, DetailTexts, FloorsTexts, HelpTexts, HintTexts,
    KeyNames, ModalTexts, ScheduleTexts, StatusTexts, TowersTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Tower Explorer",
        quit: "Quit",
        cancel: "Cancel",
        confirm: "Confirm",
        close: "Close",
        unit: "Unit {}",
        floor: "Floor {}",
        area: "Area",
        rooms: "Rooms",
        bathrooms: "Bathrooms",
        price: "Price",
        square_meters: "m²",
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
            navigate: "Move",
            open: "Open",
            back: "Back",
            schedule: "Schedule viewing",
            switch_button: "Switch",
            help: "Help",
            theme: "Theme",
            language: "Language",
        },
    },

    // ========================================================================
    // 页面
    // ========================================================================
    towers: TowersTexts {
        title: "Premium Residential Towers",
        subtitle: "Discover your perfect home across our three distinctive towers, each offering unique amenities and stunning views.",
        floors_available: "{} Floors Available",
        explore: "Explore Tower",
    },

    floors: FloorsTexts {
        back_to_towers: "Back to Towers",
        units: "{} units",
    },

    apartments: ApartmentsTexts {
        back_to_floors: "Back to Floors",
        available_units: "{} available units",
        view_details: "View Details",
    },

    detail: DetailTexts {
        back_to_floor: "Back to Floor {}",
        layout: "Layout",
        thumbnail: "Thumbnail",
        schedule_viewing: "Schedule Viewing",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help: HelpTexts {
            title: "Help",
            browsing: "Browsing",
            move_cursor: "Move between cards",
            open: "Open / Schedule viewing",
            back: "Back one level",
            general: "General",
            toggle_theme: "Toggle dark/light theme",
            switch_language: "Switch language",
            quit: "Quit",
            close_hint: "Press Esc to close the help",
        },
        schedule: ScheduleTexts {
            title: "Schedule Viewing",
            prompt: "Schedule a viewing of unit {}?",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        viewing_requested: "Viewing requested for unit {}",
        theme_changed: "Theme: {}",
        language_changed: "Language: {}",
        theme_dark: "Dark",
        theme_light: "Light",
        save_failed: "Failed to save settings: {}",
        navigation_failed: "Cannot open: {}",
    },
};
