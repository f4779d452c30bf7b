//! Action 枚举定义 (Intent)
//!
//! 按键转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SliderDecrease,
    SliderIncrease,

    // 宿主侧操作
    StartBindInput,
    Unbind,
    Refresh,

    // 表单/通用交互
    Cancel,      // Esc
    Submit,      // Enter
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
