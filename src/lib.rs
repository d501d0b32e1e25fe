//! IMC (Índice de Massa Corporal) 计算器
//!
//! 核心管线：清洗 -> 区域解析 -> 校验 -> 计算/分级

pub mod bmi;
pub mod config;
pub mod locale;
pub mod logging;
pub mod sanitizer;
pub mod session;
pub mod ui;
pub mod validator;

pub use bmi::{Band, BmiResult, classify, compute};
pub use locale::{NumberFormat, ParseFailure, parse};
pub use sanitizer::sanitize;
pub use session::{ComputeError, Session};
pub use validator::{Field, InvalidFieldError, InvalidKind, validate};
