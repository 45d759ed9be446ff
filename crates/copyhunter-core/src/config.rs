//! 配置文件加载（TOML）
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use crate::options::CompareOptions;

/// 顶层配置文件结构
///
/// ```toml
/// [compare]
/// exact_min_len = 10
/// report_mode = "raw"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    compare: CompareOptions,
}

/// 从 TOML 文本解析并校验比较选项；缺省字段取默认值
pub fn parse_options(txt: &str, path: &Path) -> Result<CompareOptions, ConfigError> {
    let parsed: ConfigFile = toml::from_str(txt)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
    parsed.compare.validate()?;
    Ok(parsed.compare)
}

/// 从 TOML 配置文件加载比较选项
pub fn load_options(path: &Path) -> Result<CompareOptions, ConfigError> {
    let txt = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let opts = parse_options(&txt, path)?;
    tracing::debug!(?path, ?opts, "loaded compare options");
    Ok(opts)
}
