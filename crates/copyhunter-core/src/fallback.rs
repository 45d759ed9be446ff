//! 回退扫描：按步长滑动窗口 + 指纹表，找一致率达标的窗口
//!
//! 窗口大小取 `long_min_len`，步长为窗口的四分之一。只比较步长对齐的窗口，
//! 是分辨率与开销的折中，并非穷举。
use std::collections::HashMap;

use crate::hasher::{window_fingerprints, Fingerprint};
use crate::options::{CompareOptions, FallbackPick};
use crate::types::{MatchCandidate, Token};

/// 回退扫描命中的窗口
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WindowHit {
    pub(crate) candidate: MatchCandidate,
    pub(crate) ratio: f64,
}

/// 两个等长窗口中逐位相同的比例；空窗口定义为 0
pub(crate) fn agreement_ratio(x: &[Token], y: &[Token]) -> f64 {
    let len = x.len().min(y.len());
    if len == 0 {
        return 0.0;
    }
    let same = x.iter().zip(y).filter(|(p, q)| p == q).count();
    same as f64 / len as f64
}

/// 扫描 A、B 中步长对齐的窗口，返回被接受的窗口（取舍见 `FallbackPick`）
pub(crate) fn scan_windows(a: &[Token], b: &[Token], opts: &CompareOptions) -> Option<WindowHit> {
    let window = opts.long_min_len;
    let stride = opts.fallback_stride();
    if window == 0 || window > a.len() || window > b.len() {
        return None;
    }

    let mut index_b: HashMap<Fingerprint, Vec<usize>> = HashMap::new();
    for (j, h) in window_fingerprints(b, window).into_iter().enumerate().step_by(stride) {
        index_b.entry(h).or_default().push(j);
    }

    let mut best: Option<WindowHit> = None;
    for (i, h) in window_fingerprints(a, window).into_iter().enumerate().step_by(stride) {
        let Some(starts) = index_b.get(&h) else { continue };
        for &j in starts {
            let ratio = agreement_ratio(&a[i..i + window], &b[j..j + window]);
            if ratio < opts.long_match_ratio {
                continue;
            }
            let hit = WindowHit { candidate: MatchCandidate::approximate(i, j, window), ratio };
            match opts.fallback_pick {
                FallbackPick::FirstAccepted => {
                    tracing::trace!(start_a = i, start_b = j, ratio, "window scan accepted");
                    return Some(hit);
                }
                FallbackPick::BestRatio => {
                    if best.map_or(true, |cur| ratio > cur.ratio) {
                        best = Some(hit);
                    }
                }
            }
        }
    }
    if let Some(hit) = best {
        tracing::trace!(start_a = hit.candidate.start_a, start_b = hit.candidate.start_b, ratio = hit.ratio, "window scan best");
    }
    best
}
