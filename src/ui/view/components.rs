//! 通用 UI 组件
//!
//! 对话框、输入框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 数字输入框，空值时显示占位提示
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    is_invalid: bool,
) {
    let border = if is_invalid {
        Style::default().fg(Color::Red)
    } else if is_focused {
        Style::default().fg(Color::Rgb(255, 165, 0))
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = if value.is_empty() {
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        let style = if is_focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(Span::styled(value, style))
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);

    if is_focused && area.height > 2 {
        if let Some(x) = cursor_x(area, value) {
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

/// 光标放在文本末尾（边框内），放不下时返回 `None`
fn cursor_x(area: Rect, value: &str) -> Option<u16> {
    let len = u16::try_from(value.chars().count()).ok()?;
    let x = area.x.checked_add(1)?.checked_add(len)?;
    (x < area.right().saturating_sub(1)).then_some(x)
}
