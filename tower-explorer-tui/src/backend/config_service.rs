//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置目录名（位于系统配置目录下）
pub const APP_DIR_NAME: &str = "tower-explorer";

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    /// 语言代码，如 "en-US"
    pub language: String,
    /// 模拟数据的随机种子；为空时每次启动使用系统熵
    pub seed: Option<u64>,
    /// 日志级别（EnvFilter 语法）
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用指定的配置文件路径
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用系统配置目录：`<config_dir>/tower-explorer/config.json`
    pub fn from_default_location() -> Self {
        Self::new(app_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        log::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

/// 应用数据目录：`<config_dir>/tower-explorer`，无法确定系统配置目录时使用当前目录
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// 读取配置；读取失败时回退到默认配置，并把错误交给调用方记录
pub fn load_or_default(service: &dyn ConfigService) -> (AppConfig, Option<anyhow::Error>) {
    match service.load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// 内存配置服务（测试用）
#[cfg(test)]
#[derive(Default)]
pub struct MemoryConfigService {
    pub saved: std::sync::Mutex<Option<AppConfig>>,
}

#[cfg(test)]
impl ConfigService for MemoryConfigService {
    fn load(&self) -> Result<AppConfig> {
        Ok(self
            .saved
            .lock()
            .map_err(|_| anyhow::anyhow!("poisoned"))?
            .clone()
            .unwrap_or_default())
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        *self.saved.lock().map_err(|_| anyhow::anyhow!("poisoned"))? = Some(config.clone());
        Ok(())
    }
}
