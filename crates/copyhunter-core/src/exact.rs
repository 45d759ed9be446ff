//! 精确匹配检测（长度区间内的连续完全一致片段）
//!
//! 认领顺序是固定的决策规则：
//! - 长度从大到小尝试，长片段先认领 token，短片段只能使用剩余位置；
//! - 同一长度下按 A 中起点升序，B 中候选按起点升序，第一个确认的候选胜出。
//! 指纹相等只是候选，必须逐元素比对确认。
use std::collections::HashMap;
use std::ops::Range;

use crate::hasher::{window_fingerprints, Fingerprint};
use crate::options::CompareOptions;
use crate::types::{MatchCandidate, Token};

/// 位置占用标记：每个位置只能由 unused 变为 used，不可回退
#[derive(Debug, Clone)]
pub(crate) struct UsageMask {
    used: Vec<bool>,
}

impl UsageMask {
    pub(crate) fn new(len: usize) -> Self {
        Self { used: vec![false; len] }
    }

    /// 区间内全部未占用（越界视为不可用）
    pub(crate) fn is_free(&self, range: Range<usize>) -> bool {
        match self.used.get(range) {
            Some(slots) => !slots.iter().any(|&u| u),
            None => false,
        }
    }

    pub(crate) fn claim(&mut self, range: Range<usize>) {
        for slot in &mut self.used[range] {
            *slot = true;
        }
    }

    #[cfg(test)]
    pub(crate) fn count_used(&self) -> usize {
        self.used.iter().filter(|&&u| u).count()
    }
}

/// 指纹 → B 中窗口起点（升序）
fn index_windows(seq: &[Token], len: usize) -> HashMap<Fingerprint, Vec<usize>> {
    let mut index: HashMap<Fingerprint, Vec<usize>> = HashMap::new();
    for (start, h) in window_fingerprints(seq, len).into_iter().enumerate() {
        index.entry(h).or_default().push(start);
    }
    index
}

/// 查找所有精确匹配，返回按认领顺序排列的匹配列表
///
/// 任一序列短于 `exact_min_len` 时结果为空。
pub(crate) fn find_exact_matches(a: &[Token], b: &[Token], opts: &CompareOptions) -> Vec<MatchCandidate> {
    let mut used_a = UsageMask::new(a.len());
    let mut used_b = UsageMask::new(b.len());
    let mut matches = Vec::new();

    // 超过较短序列的长度不可能命中，直接截断上限
    let max_len = opts.exact_max_len.min(a.len().min(b.len()));
    for len in (opts.exact_min_len.max(1)..=max_len).rev() {
        let index_b = index_windows(b, len);
        let hashes_a = window_fingerprints(a, len);

        for (i, h) in hashes_a.iter().enumerate() {
            if !used_a.is_free(i..i + len) {
                continue;
            }
            let Some(starts) = index_b.get(h) else { continue };
            let hit = starts
                .iter()
                .copied()
                .find(|&j| used_b.is_free(j..j + len) && a[i..i + len] == b[j..j + len]);
            if let Some(j) = hit {
                used_a.claim(i..i + len);
                used_b.claim(j..j + len);
                matches.push(MatchCandidate::exact(i, j, len));
            }
        }
    }

    tracing::trace!(count = matches.len(), "exact matches confirmed");
    matches
}
