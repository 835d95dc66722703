//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

use std::time::Duration;

/// 事件轮询间隔，同时决定忙碌动画与轮询结果的刷新频率
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// 日志页翻页步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// 灵敏度滑块每次按键的步长
pub const SENSITIVITY_STEP: u32 = 5;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 确认对话框
    pub const CONFIRM: PopupSize = PopupSize::new(60, 30);
    /// 提示对话框
    pub const ALERT: PopupSize = PopupSize::new(60, 30);
    /// 文本输入
    pub const INPUT: PopupSize = PopupSize::new(60, 25);
    /// 帮助
    pub const HELP: PopupSize = PopupSize::new(80, 85);
}

/// 颜色
pub mod colors {
    use ratatui::style::Color;

    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}
