//! 应用主状态结构

use tcpping_core::{CascadeController, Catalog, LocationDictionary};

use super::{FocusPanel, GeneratorState, ModalState, NavigationState, Page, SettingsState};
use crate::backend::{AppConfig, ConfigService};
use crate::util::ClipboardSink;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 只读数据 ===
    /// 位置字典
    pub dictionary: LocationDictionary,
    /// 级联规则
    pub controller: CascadeController,

    // === 各页面状态 ===
    /// 生成器页面状态
    pub generator: GeneratorState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 启动时的配置（保存设置时沿用其中的字典路径）
    pub config: AppConfig,

    // === 副作用出口 ===
    pub config_service: Box<dyn ConfigService>,
    pub clipboard: Box<dyn ClipboardSink>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        dictionary: LocationDictionary,
        config: AppConfig,
        config_service: Box<dyn ConfigService>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let controller = CascadeController::for_dictionary(&dictionary);
        let generator = GeneratorState::new(controller.initial_state());

        crate::view::theme::set_theme_index(config.theme.index());

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            dictionary,
            controller,
            generator,
            settings: SettingsState::new(config.theme, config.map_detail),
            modal: ModalState::new(),
            config,
            config_service,
            clipboard,
        }
    }

    /// 字典上的只读查询视图
    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.dictionary)
    }

    /// 当前选择对应的主机名，不完整时为空
    pub fn hostname(&self) -> String {
        tcpping_core::derive_url(&self.generator.selection, &self.dictionary)
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
