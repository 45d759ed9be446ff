//! 错误类型
use std::path::PathBuf;
use thiserror::Error;

/// 配置文件加载与校验错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// token 文件读取错误
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("read tokens {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// position 为 1 起始的条目序号
    #[error("malformed token #{position} in {path}: {text:?}")]
    Malformed {
        path: PathBuf,
        position: usize,
        text: String,
    },
}
