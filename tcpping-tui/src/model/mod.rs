//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod navigation;     // 导航栏状态与焦点面板
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态（生成器、设置、弹窗）
//!
//!     与 Page 的区别：
//!         - Page 只是“门牌号”，标识当前显示哪个页面；
//!         - State 存储页面的数据：生成器的选择状态、设置项、弹窗内容。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub navigation: NavigationState,    // 导航状态
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!
//!             pub dictionary: LocationDictionary, // 只读字典
//!             pub controller: CascadeController,  // 级联规则
//!
//!             pub generator: GeneratorState,      // 生成器页面状态
//!             pub settings: SettingsState,        // 设置页面状态
//!             pub modal: ModalState,              // 弹窗状态
//!
//!             config_service / clipboard          // 副作用出口（trait 对象）
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、生成器状态（GeneratorState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/generator.rs 中定义：
//!
//!         GeneratorState {
//!             selection: SelectionState,          // 核心库的选择状态
//!             selected: FormRow,                  // 当前高亮的表单行
//!             copied_until: Option<Instant>,      // "Copied!" 到期时间
//!         }
//!
//!     选择状态只能经由 CascadeController 修改；
//!     每次复制都会写入新的到期时间，旧的到期时间自然失效。
//!

mod app;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use navigation::{FocusPanel, NavigationState};
pub use page::Page;
pub use state::{
    cycle_value, FormRow, GeneratorState, MapDetail, Modal, ModalState, SettingItem, SettingsState,
    Theme,
};
