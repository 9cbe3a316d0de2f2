//! 界面状态
//!
//! 转换器本身放在 Dioxus signal 中，这里是渲染用的快照。

use directlink_core::{ConversionMode, LinkConverter};
use std::time::Instant;

/// 某一时刻的转换器快照
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterView {
    pub mode: ConversionMode,
    pub url: String,
    pub password: String,
    pub output: String,
    pub copied: bool,
}

impl ConverterView {
    pub fn capture(converter: &LinkConverter, now: Instant) -> Self {
        Self {
            mode: converter.mode(),
            url: converter.input_url().to_string(),
            password: converter.input_password().to_string(),
            output: converter.output_url().to_string(),
            copied: converter.is_copied(now),
        }
    }

    /// 只有生成了链接才显示输出区
    pub fn has_output(&self) -> bool {
        !self.output.is_empty()
    }
}

/// 临时提示
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Notice {
    #[default]
    None,
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use directlink_core::MemoryClipboard;

    #[test]
    fn test_capture_reflects_converter() {
        let now = Instant::now();
        let mut converter = LinkConverter::default();
        let view = ConverterView::capture(&converter, now);
        assert!(!view.has_output());
        assert!(!view.copied);

        converter.set_url("https://drive.google.com/file/d/abc/view");
        converter
            .copy(&mut MemoryClipboard::default(), now)
            .unwrap();
        let view = ConverterView::capture(&converter, now);
        assert_eq!(view.mode, ConversionMode::GoogleDrive);
        assert_eq!(
            view.output,
            "https://drive.google.com/uc?export=download&id=abc"
        );
        assert!(view.copied);
    }
}
