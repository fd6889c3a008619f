//! 页面状态定义

use super::navigation::NavItemId;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页：简介与当前选择摘要
    #[default]
    Home,
    /// 主机名生成器表单
    Generator,
    /// 世界地图
    Map,
    /// 设置
    Settings,
}

impl Page {
    /// 页面标题
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Generator => "Hostname Generator",
            Page::Map => "Map",
            Page::Settings => "Settings",
        }
    }
}

impl From<NavItemId> for Page {
    fn from(id: NavItemId) -> Self {
        match id {
            NavItemId::Home => Page::Home,
            NavItemId::Generator => Page::Generator,
            NavItemId::Map => Page::Map,
            NavItemId::Settings => Page::Settings,
        }
    }
}
