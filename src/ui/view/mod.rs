//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

use super::state::{App, AppMode};
use crate::bmi::{Band, BmiResult};
use crate::validator::Field;
use components::{render_dialog_framework, render_input_widget};
use layouts::centered_rect;

const ACCENT: Color = Color::Rgb(255, 165, 0);
const HIGHLIGHT: Color = Color::Rgb(255, 221, 0);

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 体重
            Constraint::Length(3), // 身高
            Constraint::Min(4),    // 结果
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_field(frame, app, Field::Weight, chunks[1]);
    render_field(frame, app, Field::Height, chunks[2]);
    render_result(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);

    if let AppMode::Alert(text) = &app.mode {
        render_alert(frame, text);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("♥ Minha calculadora - IMC")
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_field(frame: &mut Frame, app: &App, field: Field, area: Rect) {
    render_input_widget(
        frame,
        area,
        field.label(),
        app.session.text(field),
        field.placeholder(),
        app.mode == AppMode::Editing && app.focus == field,
        app.invalid_fields.contains(&field),
    );
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("Resultado").borders(Borders::ALL);

    // 只有计算成功后才显示结果面板内容
    let (Some(result), Some(ratio)) = (app.session.result, app.session.rendered_ratio()) else {
        let hint = Paragraph::new("Preencha peso e altura e pressione [Enter] para calcular.")
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let value_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let summary = Paragraph::new(vec![
        Line::from(vec![Span::raw("IMC: "), Span::styled(ratio, value_style)]),
        Line::from(vec![
            Span::raw("Classificação: "),
            Span::styled(result.band.description(), value_style),
        ]),
    ]);
    frame.render_widget(summary, chunks[0]);

    let table_title = Paragraph::new("Tabela de Classificação")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(table_title, chunks[1]);

    frame.render_widget(band_table(&result), chunks[2]);
}

/// 分级参考表，当前分级高亮
fn band_table(result: &BmiResult) -> Table<'static> {
    let rows = Band::ALL.iter().map(|band| {
        let row = Row::new(vec![band.range_text(), band.label()]);
        if *band == result.band {
            row.style(Style::default().fg(Color::Black).bg(HIGHLIGHT))
        } else {
            row.style(Style::default().fg(Color::White))
        }
    });

    Table::new(rows, [Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Editing => {
            "[Enter] CALCULAR  [Esc] LIMPAR  [Tab/↑/↓] trocar campo  [Ctrl+C] sair"
        }
        AppMode::Alert(_) => "[Enter] fechar",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_alert(frame: &mut Frame, text: &str) {
    let area = centered_rect(70, 40, frame.area());
    let inner = render_dialog_framework(frame, area, "Erro", Color::Red);

    let dialog = Paragraph::new(format!("{}\n\n[Enter] OK", text))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });

    frame.render_widget(dialog, inner);
}
