//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod generator;
mod modal;
mod settings;

pub use generator::{cycle_value, FormRow, GeneratorState};
pub use modal::{Modal, ModalState};
pub use settings::{MapDetail, SettingItem, SettingsState, Theme};
