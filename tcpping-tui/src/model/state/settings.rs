//! 设置页面状态

use serde::{Deserialize, Serialize};

/// 主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 只有两个选项，prev 和 next 相同
    pub fn next(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// view 层使用的索引（0 = Dark, 1 = Light）
    pub fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }
}

/// 地图海岸线精度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapDetail {
    Low,
    #[default]
    High,
}

impl MapDetail {
    pub fn next(self) -> Self {
        match self {
            MapDetail::Low => MapDetail::High,
            MapDetail::High => MapDetail::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MapDetail::Low => "Low",
            MapDetail::High => "High",
        }
    }
}

/// 设置项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    MapDetail,
}

impl SettingItem {
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::MapDetail]
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingItem::Theme => "Theme",
            SettingItem::MapDetail => "Map Detail",
        }
    }
}

/// 设置页面状态
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    pub theme: Theme,
    pub map_detail: MapDetail,
}

impl SettingsState {
    pub fn new(theme: Theme, map_detail: MapDetail) -> Self {
        Self {
            selected_index: 0,
            theme,
            map_detail,
        }
    }

    fn item_count() -> usize {
        SettingItem::all().len()
    }

    /// 选择上一个设置项（循环）
    pub fn select_previous(&mut self) {
        self.selected_index = (self.selected_index + Self::item_count() - 1) % Self::item_count();
    }

    /// 选择下一个设置项（循环）
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % Self::item_count();
    }

    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::all().get(self.selected_index).copied()
    }

    /// 切换当前设置项的值；两个设置都只有两个取值，方向无关
    pub fn toggle(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.next(),
            Some(SettingItem::MapDetail) => self.map_detail = self.map_detail.next(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_selected_item_only() {
        let mut s = SettingsState::new(Theme::Dark, MapDetail::High);
        s.toggle();
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.map_detail, MapDetail::High);

        s.select_next();
        s.toggle();
        assert_eq!(s.map_detail, MapDetail::Low);
        assert_eq!(s.theme, Theme::Light);
    }

    #[test]
    fn selection_wraps() {
        let mut s = SettingsState::default();
        s.select_previous();
        assert_eq!(s.current_item(), Some(SettingItem::MapDetail));
        s.select_next();
        assert_eq!(s.current_item(), Some(SettingItem::Theme));
    }

    #[test]
    fn serde_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), r#""light""#);
        let detail: MapDetail = serde_json::from_str(r#""low""#).unwrap();
        assert_eq!(detail, MapDetail::Low);
    }
}
