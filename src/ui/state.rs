//! App 状态定义 (Model)

use crate::locale::NumberFormat;
use crate::session::Session;
use crate::validator::Field;

/// 应用状态
pub struct App {
    pub session: Session,
    pub focus: Field,
    pub mode: AppMode,
    pub message: Option<String>,
    pub invalid_fields: Vec<Field>, // 上次计算失败的字段
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Editing,
    Alert(String), // 错误提示文本
}

impl App {
    /// 创建新的应用实例
    pub fn new(format: NumberFormat) -> Self {
        Self {
            session: Session::new(format),
            focus: Field::Weight,
            mode: AppMode::Editing,
            message: None,
            invalid_fields: Vec::new(),
        }
    }

    /// 当前焦点输入框的文本
    pub fn focused_text(&self) -> &str {
        self.session.text(self.focus)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(NumberFormat::default())
    }
}
