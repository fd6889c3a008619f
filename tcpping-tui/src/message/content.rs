//! 内容面板消息

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    /// 上一行 / 上一个设置项
    SelectPrevious,
    /// 下一行 / 下一个设置项
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Enter：在复制行上复制，其他行等同于 ToggleNext
    Confirm,

    /// 当前行切换到上一个值
    TogglePrev,
    /// 当前行切换到下一个值
    ToggleNext,

    /// 复制主机名
    Copy,
}
