//! 生成器页面状态

use std::time::Instant;

use tcpping_core::{CascadeController, SelectionState, COPIED_FLASH};

/// 表单行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Protocol,
    Country,
    Province,
    City,
    Provider,
    Copy,
}

const HIERARCHICAL_ROWS: &[FormRow] = &[
    FormRow::Protocol,
    FormRow::Country,
    FormRow::Province,
    FormRow::City,
    FormRow::Provider,
    FormRow::Copy,
];

const FLAT_ROWS: &[FormRow] = &[
    FormRow::Protocol,
    FormRow::Country,
    FormRow::City,
    FormRow::Provider,
    FormRow::Copy,
];

impl FormRow {
    /// 可见的行；省份行只对层级国家显示
    pub fn visible(hierarchical: bool) -> &'static [FormRow] {
        if hierarchical {
            HIERARCHICAL_ROWS
        } else {
            FLAT_ROWS
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormRow::Protocol => "Protocol",
            FormRow::Country => "Country",
            FormRow::Province => "Province",
            FormRow::City => "City",
            FormRow::Provider => "Provider",
            FormRow::Copy => "Copy",
        }
    }
}

/// 生成器页面状态
#[derive(Debug, Clone)]
pub struct GeneratorState {
    /// 当前选择（只能经由 CascadeController 修改）
    pub selection: SelectionState,
    /// 当前高亮的表单行
    pub selected: FormRow,
    /// "Copied!" 提示的到期时间
    pub copied_until: Option<Instant>,
}

impl GeneratorState {
    pub fn new(selection: SelectionState) -> Self {
        Self {
            selection,
            selected: FormRow::Protocol,
            copied_until: None,
        }
    }

    /// 当前可见的行
    pub fn rows(&self, controller: &CascadeController) -> &'static [FormRow] {
        FormRow::visible(controller.is_hierarchical(self.selection.country()))
    }

    fn position(&self, rows: &[FormRow]) -> usize {
        rows.iter().position(|r| *r == self.selected).unwrap_or(0)
    }

    /// 上一行（循环）
    pub fn select_previous(&mut self, controller: &CascadeController) {
        let rows = self.rows(controller);
        let pos = self.position(rows);
        self.selected = rows[(pos + rows.len() - 1) % rows.len()];
    }

    /// 下一行（循环）
    pub fn select_next(&mut self, controller: &CascadeController) {
        let rows = self.rows(controller);
        let pos = self.position(rows);
        self.selected = rows[(pos + 1) % rows.len()];
    }

    pub fn select_first(&mut self) {
        self.selected = FormRow::Protocol;
    }

    pub fn select_last(&mut self) {
        self.selected = FormRow::Copy;
    }

    /// 接受一次级联转换的结果；任何 setter 都会放下 copied 标志
    pub fn apply(&mut self, selection: SelectionState, controller: &CascadeController) {
        self.selection = selection;
        self.copied_until = None;
        // 国家变为扁平国家时省份行消失
        if !self.rows(controller).contains(&self.selected) {
            self.selected = FormRow::Country;
        }
    }

    /// 复制成功：升起 copied 标志并写入新的到期时间
    pub fn mark_copied(&mut self, controller: &CascadeController, now: Instant) {
        self.selection = controller.mark_copied(&self.selection);
        self.copied_until = Some(now + COPIED_FLASH);
    }

    /// 到期则放下 copied 标志，返回是否发生了变化
    pub fn expire_copied(&mut self, controller: &CascadeController, now: Instant) -> bool {
        match self.copied_until {
            Some(deadline) if now >= deadline => {
                self.selection = controller.clear_copied(&self.selection);
                self.copied_until = None;
                true
            }
            _ => false,
        }
    }
}

/// 在选项中循环切换。
///
/// `None` 只有出现在 `options` 中时才可被选回；当前值不在列表中时，
/// 向前从第一项开始，向后从最后一项开始。列表为空时返回 `None`。
pub fn cycle_value<'a>(
    options: &[Option<&'a str>],
    current: Option<&str>,
    forward: bool,
) -> Option<Option<&'a str>> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match options.iter().position(|o| *o == current) {
        Some(pos) if forward => (pos + 1) % len,
        Some(pos) => (pos + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(options[next])
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn controller() -> CascadeController {
        CascadeController::new(Some("CN"))
    }

    #[test]
    fn province_row_only_for_hierarchical_country() {
        let ctl = controller();
        let mut state = GeneratorState::new(ctl.initial_state());
        assert!(state.rows(&ctl).contains(&FormRow::Province));

        state.selected = FormRow::Province;
        let us = ctl.set_country(&state.selection, Some("US"));
        state.apply(us, &ctl);
        assert!(!state.rows(&ctl).contains(&FormRow::Province));
        assert_eq!(state.selected, FormRow::Country);
    }

    #[test]
    fn row_selection_wraps() {
        let ctl = controller();
        let mut state = GeneratorState::new(ctl.initial_state());
        state.select_previous(&ctl);
        assert_eq!(state.selected, FormRow::Copy);
        state.select_next(&ctl);
        assert_eq!(state.selected, FormRow::Protocol);
    }

    #[test]
    fn flat_country_skips_province_row() {
        let ctl = controller();
        let us = ctl.set_country(&ctl.initial_state(), Some("US"));
        let mut state = GeneratorState::new(us);
        state.selected = FormRow::Country;
        state.select_next(&ctl);
        assert_eq!(state.selected, FormRow::City);
    }

    #[test]
    fn copied_flag_expires_after_flash() {
        let ctl = controller();
        let mut state = GeneratorState::new(ctl.initial_state());
        let t0 = Instant::now();
        state.mark_copied(&ctl, t0);
        assert!(state.selection.copied());

        assert!(!state.expire_copied(&ctl, t0 + Duration::from_millis(500)));
        assert!(state.selection.copied());

        assert!(state.expire_copied(&ctl, t0 + COPIED_FLASH));
        assert!(!state.selection.copied());
        assert!(state.copied_until.is_none());
    }

    #[test]
    fn second_copy_extends_deadline() {
        let ctl = controller();
        let mut state = GeneratorState::new(ctl.initial_state());
        let t0 = Instant::now();
        state.mark_copied(&ctl, t0);
        state.mark_copied(&ctl, t0 + Duration::from_millis(1000));

        // the first deadline has passed but the second has not
        assert!(!state.expire_copied(&ctl, t0 + Duration::from_millis(1300)));
        assert!(state.selection.copied());
    }

    #[test]
    fn edit_after_copy_drops_flag_and_deadline() {
        let ctl = controller();
        let mut state = GeneratorState::new(ctl.initial_state());
        state.mark_copied(&ctl, Instant::now());
        let next = ctl.set_protocol(&state.selection, tcpping_core::Protocol::V6);
        state.apply(next, &ctl);
        assert!(!state.selection.copied());
        assert!(state.copied_until.is_none());
    }

    #[test]
    fn cycle_value_wraps_and_handles_unset() {
        let opts = [None, Some("a"), Some("b")];
        assert_eq!(cycle_value(&opts, None, true), Some(Some("a")));
        assert_eq!(cycle_value(&opts, Some("b"), true), Some(None));
        assert_eq!(cycle_value(&opts, None, false), Some(Some("b")));

        // unset not selectable: start from either end
        let opts = [Some("a"), Some("b")];
        assert_eq!(cycle_value(&opts, None, true), Some(Some("a")));
        assert_eq!(cycle_value(&opts, None, false), Some(Some("b")));
        assert_eq!(cycle_value(&opts, Some("a"), false), Some(Some("b")));

        assert_eq!(cycle_value(&[], None, true), None);
    }
}
