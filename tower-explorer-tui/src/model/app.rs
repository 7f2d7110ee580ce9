//! 应用主状态结构

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tower_explorer_core::{Navigator, ViewKind};

use super::{Cursor, ModalState, Page};
use crate::backend::{AppConfig, ConfigService};
use crate::i18n::{fill, t};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 楼盘导航状态机（持有当前视图与生成的楼层数据）
    pub navigator: Navigator<StdRng>,

    /// 当前页面卡片网格的光标
    pub cursor: Cursor,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置
    pub config: AppConfig,

    /// 配置持久化
    config_service: Arc<dyn ConfigService>,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 配置了 `seed` 时使用确定性的随机源，否则使用系统熵。
    pub fn new(config: AppConfig, config_service: Arc<dyn ConfigService>) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                log::info!("Using fixed seed {seed} for mock data");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Self {
            should_quit: false,
            navigator: Navigator::new(rng),
            cursor: Cursor::default(),
            status_message: None,
            modal: ModalState::new(),
            config,
            config_service,
        }
    }

    /// 当前页面
    pub fn page(&self) -> Page {
        Page::from(self.navigator.kind())
    }

    /// 当前页面可选的卡片数量
    pub fn item_count(&self) -> usize {
        match self.navigator.kind() {
            ViewKind::TowerList => self.navigator.towers().len(),
            ViewKind::FloorList => self.navigator.floors().len(),
            ViewKind::ApartmentGrid => self
                .navigator
                .selected_floor()
                .map_or(0, |floor| floor.apartments.len()),
            ViewKind::ApartmentDetail => 0,
        }
    }

    /// 保存配置；失败时记录日志并在状态栏提示
    pub fn save_config(&mut self) {
        if let Err(e) = self.config_service.save(&self.config) {
            log::warn!("Failed to save config: {e:#}");
            self.set_status(fill(t().status.save_failed, e));
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::backend::MemoryConfigService;

    /// 使用固定种子和内存配置的应用实例
    pub fn test_app() -> App {
        let config = AppConfig {
            seed: Some(2024),
            ..AppConfig::default()
        };
        App::new(config, Arc::new(MemoryConfigService::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_app;
    use super::*;

    #[test]
    fn starts_on_tower_overview() {
        let app = test_app();
        assert_eq!(app.page(), Page::Towers);
        assert_eq!(app.item_count(), 3);
        assert_eq!(app.cursor.selected, 0);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn item_count_follows_the_view() {
        let mut app = test_app();
        app.navigator.select_tower("tower-c").unwrap();
        assert_eq!(app.item_count(), 18);
        app.navigator.select_floor(1).unwrap();
        assert_eq!(app.item_count(), 4);
    }

    #[test]
    fn same_seed_same_floors() {
        let mut a = test_app();
        let mut b = test_app();
        a.navigator.select_tower("tower-a").unwrap();
        b.navigator.select_tower("tower-a").unwrap();
        assert_eq!(a.navigator.floors(), b.navigator.floors());
    }
}
