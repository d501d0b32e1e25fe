//! 区域数字格式
//!
//! 巴西葡语约定：`,` 为小数点，`.` 为千位分隔符。
//! 清洗、解析与渲染都以 [`NumberFormat`] 为参数，默认使用 [`NumberFormat::PT_BR`]。

use thiserror::Error;

/// 解析失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("texto vazio")]
    Empty,
    #[error("nenhum dígito em {0:?}")]
    NoDigits(String),
    #[error("{0:?} não é um número válido")]
    InvalidLiteral(String),
    #[error("{0:?} está fora do intervalo representável")]
    NotFinite(String),
}

/// 数字分隔符约定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// 小数分隔符
    pub decimal: char,
    /// 千位分隔符（解析时丢弃）
    pub grouping: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::PT_BR
    }
}

impl NumberFormat {
    pub const PT_BR: Self = Self {
        decimal: ',',
        grouping: '.',
    };

    /// 校验后构造（用于配置文件）
    pub fn new(decimal: char, grouping: char) -> Result<Self, String> {
        for c in [decimal, grouping] {
            if !c.is_ascii_punctuation() {
                return Err(format!("separador inválido: {c:?}"));
            }
        }
        if decimal == grouping {
            return Err(format!(
                "separador decimal e de milhar não podem ser iguais ({decimal:?})"
            ));
        }
        Ok(Self { decimal, grouping })
    }

    /// 字符是否可以留在输入框中
    pub fn is_allowed(&self, c: char) -> bool {
        c.is_ascii_digit() || c == self.decimal || c == self.grouping
    }

    /// 将清洗后的文本解析为数值
    ///
    /// 先删除全部千位分隔符，再把小数分隔符换成 `.`，最后按标准浮点字面量解析。
    pub fn parse(&self, text: &str) -> Result<f64, ParseFailure> {
        if text.is_empty() {
            return Err(ParseFailure::Empty);
        }
        if !text.chars().any(|c| c.is_ascii_digit()) {
            return Err(ParseFailure::NoDigits(text.to_string()));
        }

        let mut literal = String::with_capacity(text.len());
        for c in text.chars() {
            if c == self.grouping {
                continue;
            }
            if c == self.decimal {
                literal.push('.');
            } else if c.is_ascii_digit() {
                literal.push(c);
            } else {
                return Err(ParseFailure::InvalidLiteral(text.to_string()));
            }
        }

        let value: f64 = literal
            .parse()
            .map_err(|_| ParseFailure::InvalidLiteral(text.to_string()))?;
        if !value.is_finite() {
            return Err(ParseFailure::NotFinite(text.to_string()));
        }
        Ok(value)
    }

    /// 以两位小数渲染数值，整数部分每三位插入千位分隔符
    ///
    /// 舍入规则：对 `value * 100` 四舍五入（远离零）。
    /// `value * 100` 溢出时数值本身已是整数，小数部分固定为 `00`。
    pub fn format_decimal(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let scaled = value.abs() * 100.0;
        let digits = if scaled.is_finite() {
            format!("{:03.0}", scaled.round())
        } else {
            format!("{:.0}00", value.abs())
        };
        let (integer, fraction) = digits.split_at(digits.len() - 2);

        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
        if value < 0.0 && digits.bytes().any(|b| b != b'0') {
            out.push('-');
        }
        for (i, c) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push(self.grouping);
            }
            out.push(c);
        }
        out.push(self.decimal);
        out.push_str(fraction);
        out
    }
}

/// 使用 pt-BR 约定解析
pub fn parse(text: &str) -> Result<f64, ParseFailure> {
    NumberFormat::PT_BR.parse(text)
}
