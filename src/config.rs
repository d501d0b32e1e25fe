use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::locale::NumberFormat;

/// 配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub locale: LocaleConfig,
    pub log: LogConfig,
}

/// 数字格式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: NumberFormat::PT_BR.decimal,
            grouping_separator: NumberFormat::PT_BR.grouping,
        }
    }
}

/// 日志
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// 从 TOML 文本解析并校验
    pub fn from_toml_str(content: &str) -> io::Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.number_format()?;
        Ok(config)
    }

    /// 配置的数字格式
    pub fn number_format(&self) -> io::Result<NumberFormat> {
        NumberFormat::new(
            self.locale.decimal_separator,
            self.locale.grouping_separator,
        )
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}

/// 加载用户显式指定的配置文件，文件必须存在
pub fn load_required_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("arquivo de configuração não encontrado: {}", path.display()),
        ));
    }
    load_config(path)
}
