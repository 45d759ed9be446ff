//! 比较主流程：精确匹配 + 长匹配 → 判定合并
//!
//! 每次调用自带占用标记、指纹表与 DP 行，调用结束即释放；无全局可变状态，可重入。
use crate::approx::find_long_match;
use crate::combine::combine;
use crate::exact::find_exact_matches;
use crate::options::CompareOptions;
use crate::types::{ComparisonReport, ComparisonResult, Token};

/// 使用默认选项比较两个 token 序列
pub fn compare(a: &[Token], b: &[Token]) -> ComparisonResult {
    compare_with(a, b, &CompareOptions::default())
}

/// 使用指定选项比较两个 token 序列
pub fn compare_with(a: &[Token], b: &[Token], opts: &CompareOptions) -> ComparisonResult {
    compare_detailed(a, b, opts).result
}

/// 比较并保留各检测器的原始输出（精确匹配列表、原始最长匹配）
pub fn compare_detailed(a: &[Token], b: &[Token], opts: &CompareOptions) -> ComparisonReport {
    tracing::debug!(len_a = a.len(), len_b = b.len(), "comparing sequences");

    let exact_matches = find_exact_matches(a, b, opts);
    let exact_total: usize = exact_matches.iter().map(|m| m.len).sum();
    let long_match = find_long_match(a, b, opts);

    let result = combine(a.len(), b.len(), exact_total, long_match, opts);
    ComparisonReport { result, exact_matches, raw_long_match: long_match.map(Into::into) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ReportMode;

    #[test]
    fn test_report_totals_agree() {
        let s: Vec<Token> = (0..60).collect();
        let report = compare_detailed(&s, &s, &CompareOptions::default());
        assert_eq!(report.raw_exact_total(), report.result.exact_total);
        assert_eq!(report.raw_long_match.map(|m| m.len), Some(60));
    }

    #[test]
    fn test_raw_evidence_kept_when_suppressed() {
        // 长度 200，仅 12 个 token 相同：低于阈值，结果清零但报告仍保留证据
        let mut a: Vec<Token> = (0..200).map(|x| x + 10_000).collect();
        let b: Vec<Token> = (0..200).map(|x| x + 20_000).collect();
        let shared: Vec<Token> = b[50..62].to_vec();
        a.splice(100..112, shared);
        let report = compare_detailed(&a, &b, &CompareOptions::default());
        assert!(!report.result.significant);
        assert_eq!(report.result.exact_total, 0);
        assert_eq!(report.raw_exact_total(), 12);

        let raw = CompareOptions { report_mode: ReportMode::Raw, ..Default::default() };
        assert_eq!(compare_with(&a, &b, &raw).exact_total, 12);
    }
}
