//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod browse;             // 卡片浏览子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 浏览更新（browse.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     方向键只移动光标；Enter 才会驱动核心库的 Navigator：
//!         - 塔楼总览   → select_tower(id)        重新生成该塔楼的楼层
//!         - 楼层列表   → select_floor(number)
//!         - 户型网格   → select_apartment(id)
//!         - 户型详情   → 打开预约看房弹窗
//!
//!     Navigator 拒绝的跳转（ExplorerError）不会改变状态，
//!     只记录 warn 日志并显示在状态栏。
//!
//!     返回上一级（Esc）时，光标落在刚离开的卡片上。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗更新（modal.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         - handle_simple_modal()        帮助弹窗
//!         - handle_schedule_viewing()    预约看房弹窗（Tab 切换按钮，Enter 确认）
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod browse;
mod modal;

use crate::i18n::{current_language, fill, set_language, t, Language};
use crate::message::AppMessage;
use crate::model::App;
use crate::view::theme::{set_theme, Theme};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            log::info!("Quit requested");
            app.should_quit = true;
        }

        AppMessage::Browse(browse_msg) => {
            browse::update(app, browse_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else {
                browse::back(app);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleTheme => {
            let theme = app.config.theme.toggle();
            set_theme(theme);
            app.config.theme = theme;

            let texts = t();
            let name = match theme {
                Theme::Dark => texts.status.theme_dark,
                Theme::Light => texts.status.theme_light,
            };
            app.set_status(fill(texts.status.theme_changed, name));
            app.save_config();
        }

        AppMessage::CycleLanguage => {
            let language = current_language().next();
            set_language(language);
            app.config.language = language.code().to_string();

            app.set_status(fill(t().status.language_changed, language.display_name()));
            app.save_config();
        }

        AppMessage::Noop => {}
    }
}

/// 启动时按配置应用主题与语言
pub fn apply_preferences(app: &App) {
    set_theme(app.config.theme);
    let language = Language::from_code(&app.config.language).unwrap_or_else(|| {
        log::warn!(
            "Unknown language '{}', falling back to {}",
            app.config.language,
            Language::default().code()
        );
        Language::default()
    });
    set_language(language);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::BrowseMessage;
    use crate::model::test_support::test_app;
    use crate::model::Page;

    #[test]
    fn quit_sets_flag() {
        let mut app = test_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn go_back_closes_modal_first() {
        let mut app = test_app();
        update(&mut app, AppMessage::Browse(BrowseMessage::Confirm));
        update(&mut app, AppMessage::ShowHelp);

        update(&mut app, AppMessage::GoBack);
        assert!(!app.modal.is_open());
        assert_eq!(app.page(), Page::Floors);

        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.page(), Page::Towers);
    }

    #[test]
    fn go_back_on_overview_is_noop() {
        let mut app = test_app();
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.page(), Page::Towers);
        assert!(!app.should_quit);
    }

    #[test]
    fn toggle_theme_updates_config() {
        let mut app = test_app();
        let before = app.config.theme;

        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.config.theme, before.toggle());
        assert!(app.status_message.is_some());

        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.config.theme, before);
    }

    #[test]
    fn cycle_language_round_trips() {
        let mut app = test_app();
        let before = current_language();

        update(&mut app, AppMessage::CycleLanguage);
        assert_eq!(app.config.language, before.next().code());

        update(&mut app, AppMessage::CycleLanguage);
        assert_eq!(current_language(), before);
        assert_eq!(app.config.language, before.code());
    }
}
