//! 链接转换
//!
//! 把 Google Drive 分享链接改写为直链，或原样使用自定义 URL，
//! 并可选地附加密码片段。

pub mod password;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub use password::{DecodeError, decode_password, encode_password, encode_password_bytes};

static FILE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([A-Za-z0-9_-]+)").unwrap());

/// 直链前缀，后接文件 ID
pub const DIRECT_DOWNLOAD_PREFIX: &str = "https://drive.google.com/uc?export=download&id=";

/// 转换模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionMode {
    #[default]
    GoogleDrive,
    CustomDomain,
}

impl ConversionMode {
    pub const ALL: [Self; 2] = [Self::GoogleDrive, Self::CustomDomain];

    /// 序列化 / 命令行中使用的标识
    pub fn id(self) -> &'static str {
        match self {
            Self::GoogleDrive => "google-drive",
            Self::CustomDomain => "custom-domain",
        }
    }

    /// 模式选择器中的选项文字
    pub fn label(self) -> &'static str {
        match self {
            Self::GoogleDrive => "Google Drive Link",
            Self::CustomDomain => "Custom Domain",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::GoogleDrive => "Google Drive Direct Link Converter",
            Self::CustomDomain => "Custom URL Converter",
        }
    }

    pub fn url_prompt(self) -> &'static str {
        match self {
            Self::GoogleDrive => "Paste your Google Drive Share Link:",
            Self::CustomDomain => "Paste your Custom Domain URL:",
        }
    }

    pub fn url_placeholder(self) -> &'static str {
        match self {
            Self::GoogleDrive => "https://drive.google.com/file/d/YOUR_FILE_ID/view?usp=sharing",
            Self::CustomDomain => "https://example.com/path/to/file",
        }
    }

    /// 另一个模式
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::GoogleDrive => Self::CustomDomain,
            Self::CustomDomain => Self::GoogleDrive,
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// 无法识别的模式名
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown conversion mode '{0}' (expected google-drive or custom-domain)")]
pub struct UnknownMode(pub String);

impl std::str::FromStr for ConversionMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// 提取分享链接中第一个 `/d/<id>` 的文件 ID
pub fn extract_file_id(url: &str) -> Option<&str> {
    FILE_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 由文件 ID 构造直链
pub fn direct_download_url(file_id: &str) -> String {
    format!("{DIRECT_DOWNLOAD_PREFIX}{file_id}")
}

/// 计算输出链接
///
/// - `GoogleDrive`: 找不到文件 ID 时返回空串（即使有密码也不附加片段）
/// - `CustomDomain`: 以输入 URL 原样作为基础
///
/// 密码非空且可编码时附加 `#<encoded>`。
pub fn convert(mode: ConversionMode, url: &str, password: &str) -> String {
    let mut output = match mode {
        ConversionMode::GoogleDrive => match extract_file_id(url) {
            Some(file_id) => direct_download_url(file_id),
            None => return String::new(),
        },
        ConversionMode::CustomDomain => url.to_string(),
    };

    if let Some(encoded) = encode_password(password) {
        output.push('#');
        output.push_str(&encoded);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHARE_URL: &str = "https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing";

    #[test]
    fn test_google_drive_share_link() {
        assert_eq!(
            convert(ConversionMode::GoogleDrive, SHARE_URL, ""),
            "https://drive.google.com/uc?export=download&id=1A2b3C4d5E"
        );
    }

    #[test]
    fn test_google_drive_with_password() {
        assert_eq!(
            convert(ConversionMode::GoogleDrive, SHARE_URL, "hi"),
            "https://drive.google.com/uc?export=download&id=1A2b3C4d5E#aGk="
        );
    }

    #[test]
    fn test_first_match_wins() {
        let url = "https://x/d/first_id/y/d/second-id";
        assert_eq!(extract_file_id(url), Some("first_id"));
    }

    #[test]
    fn test_id_stops_at_disallowed_char() {
        assert_eq!(extract_file_id("/d/ab-C_9.zip"), Some("ab-C_9"));
        assert_eq!(extract_file_id("/d/?x"), None);
    }

    #[test]
    fn test_google_drive_without_id_is_empty() {
        for url in ["", "https://drive.google.com/open?id=abc", "not a url"] {
            assert_eq!(convert(ConversionMode::GoogleDrive, url, ""), "");
            assert_eq!(convert(ConversionMode::GoogleDrive, url, "secret"), "");
        }
    }

    #[test]
    fn test_custom_domain_identity() {
        let url = "https://example.com/a/b";
        assert_eq!(convert(ConversionMode::CustomDomain, url, ""), url);
        // 不做任何校验
        assert_eq!(
            convert(ConversionMode::CustomDomain, "  ::odd input", ""),
            "  ::odd input"
        );
    }

    #[test]
    fn test_custom_domain_with_password() {
        let url = "https://example.com/a/b";
        let expected = format!("{url}#{}", encode_password("p@ss word").unwrap());
        assert_eq!(
            convert(ConversionMode::CustomDomain, url, "p@ss word"),
            expected
        );
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!(
            "google-drive".parse::<ConversionMode>(),
            Ok(ConversionMode::GoogleDrive)
        );
        assert_eq!(
            "Custom-Domain".parse::<ConversionMode>(),
            Ok(ConversionMode::CustomDomain)
        );
        assert!("dropbox".parse::<ConversionMode>().is_err());
        assert_eq!(ConversionMode::CustomDomain.to_string(), "custom-domain");
        assert_eq!(
            ConversionMode::GoogleDrive.toggled(),
            ConversionMode::CustomDomain
        );
    }
}
