//! 剪贴板写入

/// 剪贴板错误
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// 可写入文本的剪贴板
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// 系统剪贴板 (arboard)
///
/// 首次写入时才连接，无图形环境时返回 [`ClipboardError::Unavailable`]。
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable("not connected".to_string()));
        };

        if let Err(e) = clipboard.set_text(text) {
            // 连接可能已失效，下次重新建立
            self.inner = None;
            return Err(ClipboardError::WriteFailed(e.to_string()));
        }
        Ok(())
    }
}

/// 内存剪贴板，记录写入内容
///
/// `fail` 为 true 时模拟写入失败。
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub writes: usize,
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::WriteFailed("simulated failure".to_string()));
        }
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}
