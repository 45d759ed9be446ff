//! 判定合并：按较短序列长度归一化，套用显著性阈值
use crate::options::{CompareOptions, ReportMode};
use crate::types::{ComparisonResult, MatchCandidate};

/// 阈值为 `min_len * ratio` 截断取整后的整数，比较为 `>=`（含边界）
fn scaled_threshold(min_len: usize, ratio: f64) -> usize {
    (min_len as f64 * ratio) as usize
}

/// 合并两个检测器的输出
///
/// 空序列一律不显著；非空但极短（少于 5 个 token）的序列阈值截断为 0，
/// 此时 `0 >= 0` 成立，判为显著。
pub(crate) fn combine(
    len_a: usize,
    len_b: usize,
    exact_total: usize,
    long_match: Option<MatchCandidate>,
    opts: &CompareOptions,
) -> ComparisonResult {
    let min_len = len_a.min(len_b);
    let long_len = long_match.map_or(0, |m| m.len);

    let exact_hit = exact_total >= scaled_threshold(min_len, opts.exact_significance);
    let long_hit = long_len >= scaled_threshold(min_len, opts.long_significance);
    let significant = min_len > 0 && (exact_hit || long_hit);

    tracing::debug!(min_len, exact_total, long_len, exact_hit, long_hit, "significance decided");

    if significant || opts.report_mode == ReportMode::Raw {
        ComparisonResult { significant, exact_total, longest_match: long_match.map(Into::into) }
    } else {
        ComparisonResult::default()
    }
}
