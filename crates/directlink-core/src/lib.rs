//! Directlink Core Library
//!
//! 把 Google Drive 分享链接（或任意自定义 URL）转换为直链，
//! 可附加 base64 编码的密码片段，并提供复制到剪贴板的状态管理。
//!
//! # 模块
//!
//! - **convert**: 文件 ID 提取、直链构造、密码片段编解码
//! - **converter**: 转换器状态（输入、派生输出、复制反馈）
//! - **clipboard**: 剪贴板抽象与 arboard 实现
//! - **config**: 只读的界面设置
//! - **logging**: 各 UI 共用的日志条目
//!
//! # 使用示例
//!
//! ```
//! use directlink_core::{ConversionMode, LinkConverter, convert};
//!
//! let url = "https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing";
//! assert_eq!(
//!     convert(ConversionMode::GoogleDrive, url, "hi"),
//!     "https://drive.google.com/uc?export=download&id=1A2b3C4d5E#aGk="
//! );
//!
//! let mut converter = LinkConverter::default();
//! converter.set_url(url);
//! assert!(converter.output_url().ends_with("id=1A2b3C4d5E"));
//! ```

pub mod clipboard;
pub mod config;
pub mod convert;
pub mod converter;
pub mod logging;

pub use clipboard::{ClipboardError, ClipboardSink, MemoryClipboard, SystemClipboard};
pub use config::AppSettings;
pub use convert::{
    ConversionMode, DIRECT_DOWNLOAD_PREFIX, DecodeError, UnknownMode, convert, decode_password,
    direct_download_url, encode_password, encode_password_bytes, extract_file_id,
};
pub use converter::{COPY_FEEDBACK, CopyFeedback, CopyOutcome, LinkConverter};
pub use logging::{LogEntry, LogLevel};
