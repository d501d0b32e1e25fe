//! IMC 计算与分级

use tracing::warn;

/// 分级区间（下界包含，上界不包含）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    Underweight,
    NormalWeight,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl Band {
    /// 全部分级，按升序排列
    pub const ALL: [Band; 6] = [
        Band::Underweight,
        Band::NormalWeight,
        Band::Overweight,
        Band::ObesityI,
        Band::ObesityII,
        Band::ObesityIII,
    ];

    /// 区间下界，第一个区间没有下界
    pub fn lower_bound(&self) -> f64 {
        match self {
            Band::Underweight => f64::NEG_INFINITY,
            Band::NormalWeight => 18.5,
            Band::Overweight => 25.0,
            Band::ObesityI => 30.0,
            Band::ObesityII => 35.0,
            Band::ObesityIII => 40.0,
        }
    }

    /// 区间上界（不包含）
    pub fn upper_bound(&self) -> f64 {
        match self {
            Band::ObesityIII => f64::INFINITY,
            band => Band::ALL[*band as usize + 1].lower_bound(),
        }
    }

    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.lower_bound() && ratio < self.upper_bound()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Underweight => "Abaixo do peso",
            Band::NormalWeight => "Peso normal",
            Band::Overweight => "Sobrepeso",
            Band::ObesityI => "Obesidade grau I",
            Band::ObesityII => "Obesidade grau II",
            Band::ObesityIII => "Obesidade grau III",
        }
    }

    /// 参考表中的区间文字
    pub fn range_text(&self) -> &'static str {
        match self {
            Band::Underweight => "< 18,5",
            Band::NormalWeight => "18,5 - 24,9",
            Band::Overweight => "25 - 29,9",
            Band::ObesityI => "30 - 34,9",
            Band::ObesityII => "35 - 39,9",
            Band::ObesityIII => "40 ou mais",
        }
    }

    /// 计算结果中显示的分级说明
    pub fn description(&self) -> &'static str {
        match self {
            Band::Underweight => "Abaixo do peso (menor que 18,5)",
            Band::NormalWeight => "Peso normal (18,5 a 24,9)",
            Band::Overweight => "Sobrepeso (25 a 29,9)",
            Band::ObesityI => "Obesidade grau I (30 a 34,9)",
            Band::ObesityII => "Obesidade grau II (35 a 39,9)",
            Band::ObesityIII => "Obesidade grau III (40 ou mais)",
        }
    }
}

/// 将比值映射到分级
pub fn classify(ratio: f64) -> Band {
    Band::ALL
        .into_iter()
        .rev()
        .find(|band| ratio >= band.lower_bound())
        .unwrap_or(Band::Underweight)
}

/// 一次成功计算的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub ratio: f64,
    pub band: Band,
}

/// 计算 IMC = 体重 / 身高²
///
/// 比值不是有限数时返回 `None`。
pub fn compute(weight: f64, height: f64) -> Option<BmiResult> {
    let ratio = weight / height.powi(2);
    if !ratio.is_finite() {
        warn!(weight, height, "IMC não é um número finito");
        return None;
    }
    Some(BmiResult {
        ratio,
        band: classify(ratio),
    })
}
