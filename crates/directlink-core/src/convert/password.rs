//! 密码片段编解码
//!
//! 片段格式: `#` + base64(encodeURIComponent(密码))
//!
//! 先做百分号转义再 base64，非 ASCII 密码才能保持原样往返。
//! 编码失败时按顺序降级，最终省略片段，错误不会传给调用方。

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// 与 `encodeURIComponent` 相同的转义集合
///
/// 保留 ASCII 字母数字和 `-_.!~*'()`，其余字节全部转义为 `%XX`。
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 编码失败原因
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("password is not valid UTF-8 (at byte {0})")]
    InvalidUtf8(usize),
}

/// 片段解码错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("fragment is empty")]
    Empty,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded fragment is not percent-escaped ASCII")]
    NotAscii,

    #[error("escaped password is not valid UTF-8")]
    InvalidUtf8,
}

/// 编码策略，按 [`PasswordEncoding::CHAIN`] 顺序尝试
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordEncoding {
    /// UTF-8 → 百分号转义 → base64
    UriComponent,
    /// 直接对原始字节做 base64
    Raw,
}

impl PasswordEncoding {
    pub const CHAIN: [Self; 2] = [Self::UriComponent, Self::Raw];

    pub fn try_encode(self, secret: &[u8]) -> Result<String, EncodeError> {
        match self {
            Self::UriComponent => {
                let text = std::str::from_utf8(secret)
                    .map_err(|e| EncodeError::InvalidUtf8(e.valid_up_to()))?;
                let escaped = utf8_percent_encode(text, URI_COMPONENT).to_string();
                Ok(STANDARD.encode(escaped))
            }
            Self::Raw => Ok(STANDARD.encode(secret)),
        }
    }
}

/// 编码密码，返回不含 `#` 的片段内容
///
/// 空密码或所有策略都失败时返回 `None`。
pub fn encode_password(password: &str) -> Option<String> {
    encode_password_bytes(password.as_bytes())
}

/// 同 [`encode_password`]，接受可能不是 UTF-8 的原始字节
pub fn encode_password_bytes(secret: &[u8]) -> Option<String> {
    if secret.is_empty() {
        return None;
    }

    PasswordEncoding::CHAIN
        .iter()
        .find_map(|encoding| match encoding.try_encode(secret) {
            Ok(encoded) if !encoded.is_empty() => Some(encoded),
            Ok(_) => None,
            Err(e) => {
                debug!("{encoding:?} password encoding failed: {e}");
                None
            }
        })
}

/// 还原片段中的密码，可带或不带前导 `#`
pub fn decode_password(fragment: &str) -> Result<String, DecodeError> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment).trim();
    if fragment.is_empty() {
        return Err(DecodeError::Empty);
    }

    let bytes = STANDARD.decode(fragment)?;
    let escaped = String::from_utf8(bytes).map_err(|_| DecodeError::NotAscii)?;
    if !escaped.is_ascii() {
        return Err(DecodeError::NotAscii);
    }

    percent_decode_str(&escaped)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}
