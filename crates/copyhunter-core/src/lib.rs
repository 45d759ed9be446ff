//! token 序列相似度核心库
//!
//! 设计要点：
//! - 两个独立检测器作用于同一对序列：精确匹配（10~20 个 token）与长匹配（≥30 个 token）。
//! - 指纹只做剪枝，任何候选都要逐元素确认，不把哈希相等当作相等。
//! - 精确匹配长度优先认领，占用标记保证同一位置不被计数两次。
//! - 判定按较短序列长度归一化；未达显著性时默认清零细节（可切换为原样上报）。
//! - 单次调用同步执行、无全局状态，多对序列可由调用方自行并行。

mod approx;
mod combine;
mod compare;
mod config;
mod error;
mod exact;
mod fallback;
mod hasher;
mod options;
mod report;
mod tokens;
mod types;

pub use compare::{compare, compare_detailed, compare_with};
pub use config::{load_options, parse_options};
pub use error::{ConfigError, TokenError};
pub use hasher::{fingerprint, segment_fingerprint, window_fingerprints, Fingerprint, HASH_BASE, HASH_MODULUS};
pub use options::{CompareOptions, FallbackPick, ReportMode};
pub use report::{write_report, OutputFormat};
pub use tokens::{parse_tokens, read_tokens};
pub use types::{ComparisonReport, ComparisonResult, LongMatch, MatchCandidate, MatchKind, Token};
