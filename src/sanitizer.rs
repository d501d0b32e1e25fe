//! 输入清洗
//!
//! 每次按键都会对输入框的完整文本重新清洗：
//! 只保留数字与两种分隔符，且每种分隔符最多保留第一次出现。

use tracing::debug;

use crate::locale::NumberFormat;

impl NumberFormat {
    /// 清洗一次按键后的原始文本
    ///
    /// `previous` 是按键前输入框显示的文本，只用于记录被拒绝的按键，
    /// 结果完全由 `raw` 决定。
    pub fn sanitize(&self, previous: &str, raw: &str) -> String {
        let filtered: String = raw.chars().filter(|&c| self.is_allowed(c)).collect();
        let sanitized = keep_first(&keep_first(&filtered, self.decimal), self.grouping);

        if sanitized != raw {
            debug!(
                previous,
                raw,
                sanitized = %sanitized,
                unchanged = (sanitized == previous),
                "entrada reescrita"
            );
        }
        sanitized
    }
}

/// 只保留 `sep` 的第一次出现，其后的片段直接拼接
fn keep_first(text: &str, sep: char) -> String {
    let mut seen = false;
    text.chars()
        .filter(|&c| {
            if c != sep {
                return true;
            }
            let keep = !seen;
            seen = true;
            keep
        })
        .collect()
}

/// 使用 pt-BR 约定清洗
pub fn sanitize(previous: &str, raw: &str) -> String {
    NumberFormat::PT_BR.sanitize(previous, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_text_is_unchanged() {
        assert_eq!(sanitize("70,", "70,5"), "70,5");
        assert_eq!(sanitize("1,7", "1,75"), "1,75");
        assert_eq!(sanitize("1.23", "1.234,5"), "1.234,5");
    }

    #[test]
    fn strips_foreign_characters() {
        assert_eq!(sanitize("", "70kg"), "70");
        assert_eq!(sanitize("", " 1,75 m"), "1,75");
        assert_eq!(sanitize("", "-5"), "5");
        assert_eq!(sanitize("", "1e5"), "15");
        assert_eq!(sanitize("", "abc"), "");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(sanitize("", ""), "");
    }

    #[test]
    fn extra_commas_merge_into_fraction() {
        assert_eq!(sanitize("70,5", "70,5,"), "70,5");
        assert_eq!(sanitize("", "1,2,3,4"), "1,234");
        assert_eq!(sanitize("", ",,,"), ",");
    }

    #[test]
    fn extra_dots_merge_independently() {
        assert_eq!(sanitize("", "1.000.000"), "1.000000");
        assert_eq!(sanitize("", "1.2,3.4,5"), "1.2,345");
        assert_eq!(sanitize("", "..,,"), ".,");
    }

    #[test]
    fn rejected_keystroke_keeps_previous_text() {
        assert_eq!(sanitize("70", "70x"), "70");
        assert_eq!(sanitize("1,7", "1,7,"), "1,7");
    }

    #[test]
    fn alternative_convention_collapses_its_own_separators() {
        let fmt = NumberFormat::new('.', '\'').unwrap();
        assert_eq!(fmt.sanitize("", "1'000.5.5,"), "1'000.55");
    }
}
