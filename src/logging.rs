//! 日志初始化
//!
//! 终端处于备用屏幕时不能写 stdout，日志统一写入数据目录下的文件。
//! 级别优先顺序：`--log-level` > `RUST_LOG` > 配置文件。

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// 日志文件名
pub const LOG_FILE: &str = "imc.log";

/// 获取数据目录路径 (~/.local/share/imc/)
pub fn data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "diretório de dados indisponível"))?
        .join("imc");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 构造过滤器：命令行级别 > `RUST_LOG` > 配置的级别
pub fn build_filter(cli_level: Option<&str>, config_level: &str) -> io::Result<EnvFilter> {
    let parse = |level: &str| {
        EnvFilter::try_new(level).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    };

    if let Some(level) = cli_level {
        return parse(level);
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    parse(config_level)
}

/// 初始化全局订阅者，日志追加写入 `dir/imc.log`
pub fn init(dir: &Path, cli_level: Option<&str>, config_level: &str) -> io::Result<PathBuf> {
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(cli_level, config_level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(path)
}
