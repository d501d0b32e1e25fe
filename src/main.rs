use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use imc::config::{load_config, load_required_config};
use imc::logging;
use imc::ui::{self, App, render};

/// Calculadora de IMC no terminal
#[derive(Debug, Parser)]
#[command(name = "imc", version, about)]
struct Cli {
    /// Arquivo de configuração (padrão: ~/.config/imc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Nível de log, sobrepõe RUST_LOG e o arquivo de configuração
    #[arg(long)]
    log_level: Option<String>,
}

/// 默认配置文件路径 (~/.config/imc/config.toml)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("imc").join("config.toml"))
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // 加载配置
    // 显式指定的文件必须存在，默认路径缺失时使用默认值
    let config = match (&cli.config, default_config_path()) {
        (Some(path), _) => load_required_config(path)?,
        (None, Some(path)) => load_config(&path)?,
        (None, None) => Default::default(),
    };
    let format = config.number_format()?;

    let log_path = logging::init(
        &logging::data_dir()?,
        cli.log_level.as_deref(),
        &config.log.level,
    )?;
    info!(?format, log = %log_path.display(), "iniciando");

    // 创建应用状态
    let mut app = App::new(format);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    info!("encerrando");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if ui::handle_event(app, crossterm::event::read()?)? {
            break;
        }
    }
    Ok(())
}
