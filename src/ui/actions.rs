//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    // 表单按钮
    Compute, // CALCULAR
    Reset,   // LIMPAR

    // 输入框编辑
    Input(char),
    Paste(String),
    DeleteChar,

    // 关闭错误弹窗
    Dismiss,
}
