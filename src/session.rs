//! 表单会话
//!
//! 两个输入框的文本与当前结果，由调用方持有并传入管线。

use thiserror::Error;
use tracing::{info, warn};

use crate::bmi::{self, BmiResult};
use crate::locale::NumberFormat;
use crate::validator::{Field, InvalidFieldError};

/// 一次计算中全部失败的字段（按 体重、身高 顺序）
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeError {
    #[error("{}", notice(.0))]
    Invalid(Vec<InvalidFieldError>),
    #[error("Não foi possível calcular o IMC com os valores informados.")]
    NotFinite,
}

fn notice(errors: &[InvalidFieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl ComputeError {
    /// 失败的字段
    pub fn fields(&self) -> Vec<Field> {
        match self {
            ComputeError::Invalid(errors) => errors.iter().map(|e| e.field).collect(),
            ComputeError::NotFinite => Vec::new(),
        }
    }
}

/// 会话状态
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub format: NumberFormat,
    pub weight: String,
    pub height: String,
    pub result: Option<BmiResult>,
}

impl Session {
    pub fn new(format: NumberFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// 字段当前显示的文本
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Weight => &self.weight,
            Field::Height => &self.height,
        }
    }

    fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
        }
    }

    /// 按键后更新字段：清洗原始文本并保存
    pub fn input(&mut self, field: Field, raw: &str) -> &str {
        let sanitized = self.format.sanitize(self.text(field), raw);
        let slot = self.text_mut(field);
        *slot = sanitized;
        slot
    }

    /// 校验两个字段并计算
    ///
    /// 失败时清除旧结果。
    pub fn compute(&mut self) -> Result<BmiResult, ComputeError> {
        self.result = None;

        let weight = self.format.validate(&self.weight, Field::Weight);
        let height = self.format.validate(&self.height, Field::Height);

        let (weight, height) = match (weight, height) {
            (Ok(w), Ok(h)) => (w, h),
            (w, h) => {
                let errors: Vec<_> = [w.err(), h.err()].into_iter().flatten().collect();
                for e in &errors {
                    warn!(field = e.field.name(), kind = ?e.kind, "campo inválido");
                }
                return Err(ComputeError::Invalid(errors));
            }
        };

        let result = bmi::compute(weight, height).ok_or(ComputeError::NotFinite)?;
        info!(
            weight,
            height,
            ratio = result.ratio,
            band = result.band.label(),
            "IMC calculado"
        );
        self.result = Some(result);
        Ok(result)
    }

    /// 清空两个字段与结果
    pub fn reset(&mut self) {
        self.weight.clear();
        self.height.clear();
        self.result = None;
    }

    /// 渲染后的比值文本
    pub fn rendered_ratio(&self) -> Option<String> {
        self.result.map(|r| self.format.format_decimal(r.ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::Band;
    use crate::validator::InvalidKind;

    fn filled(weight: &str, height: &str) -> Session {
        let mut session = Session::default();
        session.input(Field::Weight, weight);
        session.input(Field::Height, height);
        session
    }

    #[test]
    fn end_to_end() {
        let mut session = filled("70,5", "1,75");
        assert_eq!(session.weight, "70,5");
        assert_eq!(session.height, "1,75");

        let result = session.compute().unwrap();
        assert_eq!(result.band, Band::NormalWeight);
        assert_eq!(session.rendered_ratio().as_deref(), Some("23,02"));
        assert_eq!(session.result, Some(result));
    }

    #[test]
    fn empty_weight_is_rejected_and_clears_result() {
        let mut session = filled("70,5", "1,75");
        session.compute().unwrap();

        session.input(Field::Weight, "");
        let err = session.compute().unwrap_err();
        let ComputeError::Invalid(errors) = &err else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Weight);
        assert_eq!(errors[0].kind, InvalidKind::EmptyField);
        assert_eq!(session.result, None);
        assert_eq!(session.rendered_ratio(), None);
    }

    #[test]
    fn both_fields_are_checked() {
        let mut session = filled(",", "0");
        let err = session.compute().unwrap_err();
        assert_eq!(err.fields(), vec![Field::Weight, Field::Height]);

        let text = err.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("peso"));
        assert!(lines[1].contains("altura"));
    }

    #[test]
    fn input_is_sanitized() {
        let mut session = Session::default();
        assert_eq!(session.input(Field::Weight, "7a0,5,"), "70,5");
        assert_eq!(session.text(Field::Weight), "70,5");
        assert_eq!(session.text(Field::Height), "");
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = filled("90", "1,80");
        session.compute().unwrap();
        session.reset();
        assert!(session.weight.is_empty());
        assert!(session.height.is_empty());
        assert_eq!(session.result, None);
    }

    #[test]
    fn dot_is_read_as_thousands_mark() {
        let mut session = filled("80", "1.80");
        let result = session.compute().unwrap();
        assert_eq!(result.band, Band::Underweight);
        assert_eq!(session.rendered_ratio().as_deref(), Some("0,00"));
    }

    #[test]
    fn huge_ratio_renders_two_fraction_digits() {
        let weight = format!("1{}", "0".repeat(307));
        let mut session = filled(&weight, "1");
        let result = session.compute().unwrap();
        assert_eq!(result.band, Band::ObesityIII);

        let rendered = session.rendered_ratio().unwrap();
        assert!(rendered.ends_with(",00"), "{rendered}");
        assert!(!rendered.contains("inf"));
        let back = session.format.parse(&rendered).unwrap();
        assert!((back - 1e307).abs() <= 1e307 * 1e-15);
    }

    #[test]
    fn overflowing_ratio_is_not_finite() {
        let huge = format!("{},", "9".repeat(300));
        let tiny = format!("0,{}1", "0".repeat(300));
        let mut session = filled(&huge, &tiny);
        assert_eq!(session.compute(), Err(ComputeError::NotFinite));
        assert_eq!(session.result, None);
    }
}
