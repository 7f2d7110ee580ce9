//!
//! src/backend/mod.rs
//! Backend 层：与 UI 无关的服务
//!
//! 楼盘数据与导航状态机都由 tower-explorer-core 提供（见 model 层的 App），
//! 这里只剩下需要与外部世界打交道的部分：配置文件的读写。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // `config_service`：配置服务（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         pub trait ConfigService: Send + Sync {
//!             fn load(&self) -> Result<AppConfig>;
//!             fn save(&self, config: &AppConfig) -> Result<()>;
//!         }
//!
//!     LocalConfigService 读写 `<config_dir>/tower-explorer/config.json`：
//!         - 文件不存在 → 返回默认配置
//!         - 文件格式错误 → load_or_default() 回退到默认配置，main.rs 记录警告
//!
//!     数据流：
//!         启动时 main.rs 调用 load()
//!             ↓
//!         用户按 Alt+t / Alt+l
//!             ↓
//!         update/mod.rs 修改 app.config 并调用 App::save_config()
//!             ↓
//!         ConfigService::save() 写回文件
//!

mod config_service;

#[cfg(test)]
pub use config_service::MemoryConfigService;
pub use config_service::{app_dir, load_or_default, AppConfig, ConfigService, LocalConfigService};
