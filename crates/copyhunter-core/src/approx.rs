//! 长匹配查找（两行滚动 DP 求最长连续公共段）
//!
//! `row[j]` 表示以 `a[i-1]`、`b[j-1]` 结尾的连续公共段长度，失配即归零，
//! 因此求的是连续段而不是允许间隔的公共子序列。内存只保留两行，O(len(B))。
//! DP 没有找到合格段时，交给回退扫描（见 `fallback`）。
use crate::fallback::scan_windows;
use crate::options::CompareOptions;
use crate::types::{MatchCandidate, Token};

/// DP 主路径：返回长度 ≥ `long_min_len` 且满足一致率的最长连续段
///
/// 只有严格更长才替换当前最优，所以同长度下保留最先发现的段（A 主序）。
pub(crate) fn longest_common_run(a: &[Token], b: &[Token], opts: &CompareOptions) -> Option<MatchCandidate> {
    let min_len = opts.long_min_len;
    if a.len() < min_len || b.len() < min_len {
        return None;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    let mut best: Option<MatchCandidate> = None;

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            if a[i - 1] != b[j - 1] {
                curr[j] = 0;
                continue;
            }
            let run = prev[j - 1] + 1;
            curr[j] = run;
            // 窗口取 max(run, min_len)；run 达到下限后窗口即 run 本身
            let window = run.max(min_len);
            let qualifies = run >= min_len && run as f64 >= window as f64 * opts.long_match_ratio;
            if qualifies && best.map_or(true, |m| run > m.len) {
                best = Some(MatchCandidate::exact(i - run, j - run, run));
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

/// 长匹配查找：DP 优先，未命中时走回退扫描
pub(crate) fn find_long_match(a: &[Token], b: &[Token], opts: &CompareOptions) -> Option<MatchCandidate> {
    if let Some(m) = longest_common_run(a, b, opts) {
        tracing::trace!(len = m.len, start_a = m.start_a, start_b = m.start_b, "dp long match");
        return Some(m);
    }
    tracing::trace!("dp found no long run, trying window scan");
    scan_windows(a, b, opts).map(|hit| hit.candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> CompareOptions {
        CompareOptions::default()
    }

    #[test]
    fn test_identical_sequences() {
        let s: Vec<Token> = (0..45).collect();
        let m = longest_common_run(&s, &s, &opts()).unwrap();
        assert_eq!((m.len, m.start_a, m.start_b), (45, 0, 0));
    }

    #[test]
    fn test_run_below_floor_ignored() {
        let s: Vec<Token> = (0..29).collect();
        assert_eq!(longest_common_run(&s, &s, &opts()), None);
        assert_eq!(find_long_match(&s, &s, &opts()), None);
    }

    #[test]
    fn test_offsets_of_embedded_run() {
        let core: Vec<Token> = (1000..1035).collect();
        let mut a: Vec<Token> = vec![-1, -2, -3];
        a.extend(&core);
        let mut b: Vec<Token> = (0..10).map(|x| x + 500).collect();
        b.extend(&core);
        b.push(7);
        let m = longest_common_run(&a, &b, &opts()).unwrap();
        assert_eq!((m.len, m.start_a, m.start_b), (35, 3, 10));
    }

    #[test]
    fn test_mismatch_resets_run() {
        // 两段各 20 的公共段被一个不同 token 隔开，连续段只有 20
        let mut a: Vec<Token> = (0..20).collect();
        a.push(-1);
        a.extend(20..40);
        let mut b: Vec<Token> = (0..20).collect();
        b.push(-2);
        b.extend(20..40);
        assert_eq!(longest_common_run(&a, &b, &opts()), None);
    }

    #[test]
    fn test_equal_length_keeps_earliest() {
        let block: Vec<Token> = (0..30).collect();
        let mut a = block.clone();
        a.push(-1);
        a.extend(&block);
        let m = longest_common_run(&a, &block, &opts()).unwrap();
        assert_eq!((m.start_a, m.start_b), (0, 0));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(find_long_match(&[], &[], &opts()), None);
        assert_eq!(find_long_match(&[], &[1, 2, 3], &opts()), None);
    }
}
