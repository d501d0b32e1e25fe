//! 业务逻辑处理 (Update/Dispatch)

use super::actions::Action;
use super::state::{App, AppMode};
use crate::validator::Field;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext | Action::FocusPrev => self.focus = self.focus.other(),

            Action::Compute => self.compute(),
            Action::Reset => self.reset(),

            Action::Input(c) => {
                let mut raw = self.focused_text().to_string();
                raw.push(c);
                self.apply_raw(&raw);
            }
            Action::Paste(text) => {
                let raw = format!("{}{}", self.focused_text(), text);
                self.apply_raw(&raw);
            }
            Action::DeleteChar => {
                let mut raw = self.focused_text().to_string();
                raw.pop();
                self.apply_raw(&raw);
            }

            Action::Dismiss => self.mode = AppMode::Editing,
        }
        false
    }

    /// 按键后的原始文本交给清洗器
    fn apply_raw(&mut self, raw: &str) {
        self.session.input(self.focus, raw);
        self.message = None;
    }

    // ============ 按钮 ============

    /// CALCULAR
    pub fn compute(&mut self) {
        match self.session.compute() {
            Ok(_) => {
                self.invalid_fields.clear();
                self.message = Some("IMC calculado".to_string());
            }
            Err(e) => {
                self.invalid_fields = e.fields();
                if let Some(&first) = self.invalid_fields.first() {
                    self.focus = first;
                }
                self.message = None;
                self.mode = AppMode::Alert(e.to_string());
            }
        }
    }

    /// LIMPAR
    pub fn reset(&mut self) {
        self.session.reset();
        self.invalid_fields.clear();
        self.focus = Field::Weight;
        self.message = Some("Campos limpos".to_string());
    }
}
