//! 字段校验
//!
//! 空文本、无法解析、非正数三种情况都会拒绝。

use std::fmt;

use thiserror::Error;

use crate::locale::{NumberFormat, ParseFailure};

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Height,
}

impl Field {
    /// 面向用户的字段名
    pub fn name(&self) -> &'static str {
        match self {
            Field::Weight => "peso",
            Field::Height => "altura",
        }
    }

    /// 输入框标题
    pub fn label(&self) -> &'static str {
        match self {
            Field::Weight => "Peso (Kg)*",
            Field::Height => "Altura (m)*",
        }
    }

    /// 输入框占位提示
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Weight => "Ex: 70,5",
            Field::Height => "Ex: 1,75",
        }
    }

    /// 另一个字段
    pub fn other(&self) -> Field {
        match self {
            Field::Weight => Field::Height,
            Field::Height => Field::Weight,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 校验失败原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidKind {
    EmptyField,
    NotNumeric(ParseFailure),
    NonPositive,
}

impl InvalidKind {
    /// 面向用户的原因说明
    pub fn reason(&self) -> &'static str {
        match self {
            InvalidKind::EmptyField => "o campo está vazio",
            InvalidKind::NotNumeric(_) => "o valor não é numérico",
            InvalidKind::NonPositive => "o valor deve ser maior que zero",
        }
    }
}

/// 字段校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Por favor, insira um valor válido e positivo para {field} ({}).", .kind.reason())]
pub struct InvalidFieldError {
    pub field: Field,
    pub kind: InvalidKind,
}

impl NumberFormat {
    /// 校验并解析一个字段
    pub fn validate(&self, text: &str, field: Field) -> Result<f64, InvalidFieldError> {
        let fail = |kind| InvalidFieldError { field, kind };

        if text.is_empty() {
            return Err(fail(InvalidKind::EmptyField));
        }
        let value = self
            .parse(text)
            .map_err(|e| fail(InvalidKind::NotNumeric(e)))?;
        if value <= 0.0 {
            return Err(fail(InvalidKind::NonPositive));
        }
        Ok(value)
    }
}

/// 使用 pt-BR 约定校验
pub fn validate(text: &str, field: Field) -> Result<f64, InvalidFieldError> {
    NumberFormat::PT_BR.validate(text, field)
}
