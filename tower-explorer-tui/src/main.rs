//! Tower Explorer TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置持久化 (`backend/`)
//!
//! 楼盘数据与导航状态机在 `tower-explorer-core` 中。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     load_or_default()           // 读取配置，失败时回退到默认配置
//!     init_logging()              // 文件日志，失败时仅放弃日志
//!     apply_preferences()         // 应用主题与语言
//!     init_terminal()             // 原始模式 + 备用屏幕 + panic hook
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;

use backend::{app_dir, load_or_default, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 读取配置
    let config_service = LocalConfigService::from_default_location();
    let (config, config_error) = load_or_default(&config_service);

    // 2. 初始化日志（日志不可用时照常运行）
    let logging_ready = init_logging(&app_dir().join("logs"), &config.log_level).is_ok();
    if logging_ready {
        log::info!(
            "Starting {} v{}, config at {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            config_service.path().display()
        );
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring unreadable config: {e:#}");
    }

    // 3. 创建应用实例并应用偏好
    let config_service: Arc<dyn ConfigService> = Arc::new(config_service);
    let mut app = model::App::new(config, config_service);
    update::apply_preferences(&app);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}
