//! 日志初始化
//!
//! TUI 占用了整个终端，日志不能写到 stdout/stderr，
//! 因此写入 `<config_dir>/tower-explorer/logs/tower-explorer.log`。
//! 代码中统一使用 `log` 宏，由 tracing-subscriber 桥接。

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 覆盖日志级别的环境变量
pub const LOG_ENV: &str = "TOWER_EXPLORER_LOG";

const LOG_FILE_NAME: &str = "tower-explorer.log";

/// 初始化文件日志
///
/// 优先使用环境变量 `TOWER_EXPLORER_LOG`，其次使用配置中的 `log_level`。
pub fn init_logging(log_dir: &Path, default_level: &str) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true),
        )
        .with(build_filter(std::env::var(LOG_ENV).ok().as_deref(), default_level))
        .try_init()?;

    Ok(())
}

/// 构造日志过滤器，无法解析时回退到 `info`
fn build_filter(env_value: Option<&str>, default_level: &str) -> EnvFilter {
    env_value
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
