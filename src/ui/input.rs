//! 键盘事件映射 (Input -> Action)
//!
//! 将按键/粘贴事件转换为 Action

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::actions::Action;
use super::state::{App, AppMode};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        AppMode::Editing => match key.code {
            KeyCode::Enter => Some(Action::Compute),
            KeyCode::Esc => Some(Action::Reset),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Alert(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::Dismiss),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if let Some(action) = get_action(&app.mode, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理终端事件，返回是否退出
pub fn handle_event(app: &mut App, event: Event) -> io::Result<bool> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Paste(text) if app.mode == AppMode::Editing => Ok(app.dispatch(Action::Paste(text))),
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn editing_keys() {
        let mode = AppMode::Editing;
        assert_eq!(get_action(&mode, key(KeyCode::Enter)), Some(Action::Compute));
        assert_eq!(get_action(&mode, key(KeyCode::Esc)), Some(Action::Reset));
        assert_eq!(get_action(&mode, key(KeyCode::Tab)), Some(Action::FocusNext));
        assert_eq!(get_action(&mode, key(KeyCode::Up)), Some(Action::FocusPrev));
        assert_eq!(get_action(&mode, key(KeyCode::Backspace)), Some(Action::DeleteChar));
        assert_eq!(get_action(&mode, key(KeyCode::Char('7'))), Some(Action::Input('7')));
        assert_eq!(get_action(&mode, key(KeyCode::Char('q'))), Some(Action::Input('q')));
        assert_eq!(get_action(&mode, key(KeyCode::F(1))), None);
    }

    #[test]
    fn ctrl_quits_in_every_mode() {
        for mode in [AppMode::Editing, AppMode::Alert("x".to_string())] {
            let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(get_action(&mode, event), Some(Action::Quit));
            let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
            assert_eq!(get_action(&mode, event), Some(Action::Quit));
        }
    }

    #[test]
    fn alert_only_dismisses() {
        let mode = AppMode::Alert("erro".to_string());
        assert_eq!(get_action(&mode, key(KeyCode::Enter)), Some(Action::Dismiss));
        assert_eq!(get_action(&mode, key(KeyCode::Esc)), Some(Action::Dismiss));
        assert_eq!(get_action(&mode, key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn paste_goes_through_sanitizer() {
        let mut app = App::default();
        let quit = handle_event(&mut app, Event::Paste("70,5 kg".to_string())).unwrap();
        assert!(!quit);
        assert_eq!(app.session.weight, "70,5");
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = App::default();
        let mut event = key(KeyCode::Char('7'));
        event.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(event)).unwrap();
        assert_eq!(app.session.weight, "");
    }
}
