//! 公共类型（对外暴露）
use serde::Serialize;

/// 单个 token 的整数标识（由上游词法器产生，本库视为不透明值）
pub type Token = i64;

/// 匹配种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// 完全一致的连续片段
    Exact,
    /// 近似片段（DP 连续公共段或回退扫描命中的窗口）
    Approximate,
}

/// 检测器产出的候选匹配（只在一次比较内部流转）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchCandidate {
    pub start_a: usize,
    pub start_b: usize,
    pub len: usize,
    pub kind: MatchKind,
}

impl MatchCandidate {
    pub(crate) fn exact(start_a: usize, start_b: usize, len: usize) -> Self {
        Self { start_a, start_b, len, kind: MatchKind::Exact }
    }

    pub(crate) fn approximate(start_a: usize, start_b: usize, len: usize) -> Self {
        Self { start_a, start_b, len, kind: MatchKind::Approximate }
    }

    /// A 中覆盖的区间 `[start_a, start_a + len)`
    pub fn range_a(&self) -> std::ops::Range<usize> {
        self.start_a..self.start_a + self.len
    }

    /// B 中覆盖的区间 `[start_b, start_b + len)`
    pub fn range_b(&self) -> std::ops::Range<usize> {
        self.start_b..self.start_b + self.len
    }
}

/// 最长近似匹配：长度与两侧起始偏移总是成组出现
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LongMatch {
    pub len: usize,
    pub start_a: usize,
    pub start_b: usize,
    /// 来源：DP 连续段记为 Exact，回退扫描窗口记为 Approximate
    pub kind: MatchKind,
}

impl From<MatchCandidate> for LongMatch {
    fn from(c: MatchCandidate) -> Self {
        Self { len: c.len, start_a: c.start_a, start_b: c.start_b, kind: c.kind }
    }
}

/// 比较结果（唯一对外可见的产物）
///
/// 无匹配时 `longest_match` 为 `None`，访问器统一返回 0 作为哨兵值，
/// 因此两个起始偏移不会出现“一个有效、一个哨兵”的混合状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub significant: bool,
    pub exact_total: usize,
    pub longest_match: Option<LongMatch>,
}

impl ComparisonResult {
    pub fn longest_len(&self) -> usize {
        self.longest_match.map_or(0, |m| m.len)
    }

    pub fn start_a(&self) -> usize {
        self.longest_match.map_or(0, |m| m.start_a)
    }

    pub fn start_b(&self) -> usize {
        self.longest_match.map_or(0, |m| m.start_b)
    }
}

/// 带证据的比较报告：最终结果 + 各检测器的原始输出
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonReport {
    pub result: ComparisonResult,
    /// 按认领顺序排列的精确匹配（长度优先，再按 A 中位置）
    pub exact_matches: Vec<MatchCandidate>,
    /// 未经阈值裁决的原始最长匹配
    pub raw_long_match: Option<LongMatch>,
}

impl ComparisonReport {
    /// 原始精确匹配总长（不受抑制策略影响）
    pub fn raw_exact_total(&self) -> usize {
        self.exact_matches.iter().map(|m| m.len).sum()
    }
}
