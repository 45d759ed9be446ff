//! 比较选项（模块）
use serde::Deserialize;

use crate::error::ConfigError;

/// 结果上报策略
/// - Suppress：未达到显著性时，除标志位外全部清零（默认，与参考行为一致）。
/// - Raw：无论是否显著，都原样上报各检测器的统计值。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    #[default]
    Suppress,
    Raw,
}

/// 回退扫描在多个窗口都通过比例检查时的取舍
/// - FirstAccepted：保留第一个被接受的窗口（默认）。
/// - BestRatio：保留一致率最高的窗口；相同比例时保留先出现者。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPick {
    #[default]
    FirstAccepted,
    BestRatio,
}

/// 比较选项
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    /// 精确匹配的最短长度
    pub exact_min_len: usize,
    /// 精确匹配的最长长度（从这里开始向下尝试）
    pub exact_max_len: usize,
    /// 长匹配的最短长度，同时是回退扫描的窗口大小
    pub long_min_len: usize,
    /// 长匹配的最低一致率
    pub long_match_ratio: f64,
    /// 精确匹配总长相对较短序列长度的显著性比例
    pub exact_significance: f64,
    /// 最长匹配相对较短序列长度的显著性比例
    pub long_significance: f64,
    pub report_mode: ReportMode,
    pub fallback_pick: FallbackPick,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            exact_min_len: 10,
            exact_max_len: 20,
            long_min_len: 30,
            long_match_ratio: 0.8,
            exact_significance: 0.2,
            long_significance: 0.3,
            report_mode: ReportMode::Suppress,
            fallback_pick: FallbackPick::FirstAccepted,
        }
    }
}

impl CompareOptions {
    /// 回退扫描的步长：窗口的四分之一
    pub fn fallback_stride(&self) -> usize {
        (self.long_min_len / 4).max(1)
    }

    /// 校验参数组合
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exact_min_len == 0 {
            return Err(ConfigError::Invalid("exact_min_len must be at least 1".into()));
        }
        if self.exact_min_len > self.exact_max_len {
            return Err(ConfigError::Invalid(format!(
                "exact_min_len ({}) exceeds exact_max_len ({})",
                self.exact_min_len, self.exact_max_len
            )));
        }
        if self.long_min_len < 4 {
            return Err(ConfigError::Invalid(format!(
                "long_min_len ({}) must be at least 4",
                self.long_min_len
            )));
        }
        let ratios = [
            ("long_match_ratio", self.long_match_ratio),
            ("exact_significance", self.exact_significance),
            ("long_significance", self.long_significance),
        ];
        for (field, v) in ratios {
            if !(0.0..=1.0).contains(&v) {
                return Err(ConfigError::Invalid(format!("{field} ({v}) not in [0, 1]")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let opts = CompareOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.fallback_stride(), 7);
    }

    #[test]
    fn test_rejects_inverted_exact_range() {
        let opts = CompareOptions { exact_min_len: 21, ..Default::default() };
        assert!(matches!(opts.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_exact_min() {
        let opts = CompareOptions { exact_min_len: 0, ..Default::default() };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_rejects_small_window() {
        let opts = CompareOptions { long_min_len: 3, ..Default::default() };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_rejects_ratio_out_of_range() {
        let opts = CompareOptions { long_significance: 1.5, ..Default::default() };
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("long_significance"));
        let opts = CompareOptions { long_match_ratio: f64::NAN, ..Default::default() };
        assert!(opts.validate().is_err());
    }
}
