//! 片段指纹（多项式滚动哈希）
//!
//! 指纹定义：`hash = Σ token[i] * BASE^i mod MODULUS`，i 为窗口内相对下标。
//! - 哈希只用于剪枝：任何指纹相等的候选都必须再做逐元素比对才算命中。
//! - 常量在两侧序列间共享，保证同内容同长度的窗口得到同一指纹。
//! - MODULUS < 2^30，两个余数相乘不超过 2^60，u64 运算不会回绕。
use crate::types::Token;

/// 多项式底数
pub const HASH_BASE: u64 = 31;
/// 模数（素数 1e9+9）
pub const HASH_MODULUS: u64 = 1_000_000_009;

const _: () = assert!(HASH_MODULUS < (1 << 30) && HASH_BASE < HASH_MODULUS);

/// 片段指纹
pub type Fingerprint = u64;

#[inline]
fn residue(token: Token) -> u64 {
    // 负数 token 先归一到 [0, MODULUS)
    token.rem_euclid(HASH_MODULUS as i64) as u64
}

#[inline]
fn mul_mod(a: u64, b: u64) -> u64 {
    (a * b) % HASH_MODULUS
}

#[inline]
fn add_mod(a: u64, b: u64) -> u64 {
    (a + b) % HASH_MODULUS
}

#[inline]
fn sub_mod(a: u64, b: u64) -> u64 {
    (a + HASH_MODULUS - b) % HASH_MODULUS
}

fn pow_mod(mut base: u64, mut exp: u64) -> u64 {
    let mut acc = 1u64;
    base %= HASH_MODULUS;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base);
        }
        base = mul_mod(base, base);
        exp >>= 1;
    }
    acc
}

/// 计算整个窗口的指纹（O(len)）
pub fn fingerprint(window: &[Token]) -> Fingerprint {
    let mut hash = 0u64;
    let mut power = 1u64;
    for &t in window {
        hash = add_mod(hash, mul_mod(residue(t), power));
        power = mul_mod(power, HASH_BASE);
    }
    hash
}

/// 计算 `seq[start..start + len]` 的指纹；越界返回 None
pub fn segment_fingerprint(seq: &[Token], start: usize, len: usize) -> Option<Fingerprint> {
    let end = start.checked_add(len)?;
    seq.get(start..end).map(fingerprint)
}

/// 计算所有长度为 `len` 的窗口指纹（下标即窗口起点）
///
/// 首个窗口直接计算，其后每次右移一位用增量更新：
/// 去掉出窗 token，整体乘 BASE 的逆元，再补上入窗 token 的最高次项。
/// `len == 0` 或 `len > seq.len()` 时返回空表。
pub fn window_fingerprints(seq: &[Token], len: usize) -> Vec<Fingerprint> {
    if len == 0 || len > seq.len() {
        return Vec::new();
    }
    // MODULUS 为素数，费马小定理求逆元
    let inv_base = pow_mod(HASH_BASE, HASH_MODULUS - 2);
    let top_power = pow_mod(HASH_BASE, (len - 1) as u64);

    let mut out = Vec::with_capacity(seq.len() - len + 1);
    let mut hash = fingerprint(&seq[..len]);
    out.push(hash);
    for start in 1..=seq.len() - len {
        let outgoing = residue(seq[start - 1]);
        let incoming = residue(seq[start + len - 1]);
        hash = mul_mod(sub_mod(hash, outgoing), inv_base);
        hash = add_mod(hash, mul_mod(incoming, top_power));
        out.push(hash);
    }
    out
}
