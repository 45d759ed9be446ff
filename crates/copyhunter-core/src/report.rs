//! 结果输出（文本 / JSON）
use std::io::Write;

use crate::types::ComparisonReport;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 将比较报告写入 `out`
/// - 总是输出五个字段：显著性、精确匹配总长、最长匹配长度、两侧起始偏移
/// - `with_matches` 为真时附带每个已确认的精确匹配
pub fn write_report(
    out: &mut dyn Write,
    report: &ComparisonReport,
    format: OutputFormat,
    with_matches: bool,
) -> std::io::Result<()> {
    let r = &report.result;
    match format {
        OutputFormat::Text => {
            writeln!(out, "Significant: {}", r.significant)?;
            writeln!(out, "Total Exact Match Length: {}", r.exact_total)?;
            writeln!(out, "Longest Approximate Match Length: {}", r.longest_len())?;
            writeln!(out, "Start Index in A: {}", r.start_a())?;
            writeln!(out, "Start Index in B: {}", r.start_b())?;
            if with_matches {
                for m in &report.exact_matches {
                    writeln!(out, "Exact Match: A[{}..{}] B[{}..{}] len {}", m.start_a, m.start_a + m.len, m.start_b, m.start_b + m.len, m.len)?;
                }
            }
        }
        OutputFormat::Json => {
            let mut item = serde_json::json!({
                "significant": r.significant,
                "exact_total": r.exact_total,
                "longest_len": r.longest_len(),
                "start_a": r.start_a(),
                "start_b": r.start_b(),
            });
            if with_matches {
                item["exact_matches"] = serde_json::to_value(&report.exact_matches)?;
            }
            serde_json::to_writer(&mut *out, &item)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare_detailed;
    use crate::options::CompareOptions;
    use crate::types::Token;

    fn sample() -> ComparisonReport {
        let s: Vec<Token> = (0..40).collect();
        compare_detailed(&s, &s, &CompareOptions::default())
    }

    #[test]
    fn test_text_output() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample(), OutputFormat::Text, true).unwrap();
        let txt = String::from_utf8(buf).unwrap();
        assert!(txt.starts_with("Significant: true\n"));
        assert!(txt.contains("Longest Approximate Match Length: 40\n"));
        assert!(txt.contains("Exact Match: A[0..20] B[0..20] len 20\n"));
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample(), OutputFormat::Json, false).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["significant"], true);
        assert_eq!(v["exact_total"], 40);
        assert_eq!(v["longest_len"], 40);
        assert!(v.get("exact_matches").is_none());
    }
}
