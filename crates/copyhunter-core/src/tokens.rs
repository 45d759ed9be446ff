//! token 文件读取
//!
//! 格式：整数之间以空白或逗号分隔；`#` 之后到行尾为注释。空文件即空序列。
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::TokenError;
use crate::types::Token;

fn separators() -> &'static Regex {
    static SEP: OnceLock<Regex> = OnceLock::new();
    SEP.get_or_init(|| Regex::new(r"[\s,]+").expect("build separator regex"))
}

/// 解析 token 文本；`path` 仅用于错误信息
pub fn parse_tokens(txt: &str, path: &Path) -> Result<Vec<Token>, TokenError> {
    let mut out = Vec::new();
    for line in txt.lines() {
        // 去掉行内注释
        let body = line.split_once('#').map_or(line, |(head, _)| head);
        for item in separators().split(body).filter(|s| !s.is_empty()) {
            let token = item.parse::<Token>().map_err(|_| TokenError::Malformed {
                path: path.to_path_buf(),
                position: out.len() + 1,
                text: item.to_string(),
            })?;
            out.push(token);
        }
    }
    Ok(out)
}

/// 读取 token 文件
pub fn read_tokens(path: &Path) -> Result<Vec<Token>, TokenError> {
    let txt = std::fs::read_to_string(path)
        .map_err(|source| TokenError::Io { path: path.to_path_buf(), source })?;
    let tokens = parse_tokens(&txt, path)?;
    tracing::debug!(?path, count = tokens.len(), "tokens loaded");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(txt: &str) -> Result<Vec<Token>, TokenError> {
        parse_tokens(txt, Path::new("t.txt"))
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(parse("1, 2,3\n4\t5  -6\n").unwrap(), vec![1, 2, 3, 4, 5, -6]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let txt = "# header\n10 11 # trailing\n\n12\n";
        assert_eq!(parse(txt).unwrap(), vec![10, 11, 12]);
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse(" ,\n# only comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_reports_position() {
        match parse("1 2 x3 4") {
            Err(TokenError::Malformed { position, text, .. }) => {
                assert_eq!(position, 3);
                assert_eq!(text, "x3");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(parse("1.5").is_err());
        assert!(parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_read_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "7 8 9").unwrap();
        assert_eq!(read_tokens(f.path()).unwrap(), vec![7, 8, 9]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read_tokens(&dir.path().join("none")), Err(TokenError::Io { .. })));
    }
}
