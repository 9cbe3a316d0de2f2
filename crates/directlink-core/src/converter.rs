//! 转换器状态
//!
//! 组件挂载时创建，随输入事件更新，卸载时直接丢弃。
//! 输出链接只由 (模式, URL, 密码) 决定，每次修改输入都会重新计算。

use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::convert::{ConversionMode, convert};
use log::debug;
use std::time::{Duration, Instant};

/// 复制成功后 "Copied!" 的显示时长
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// 复制反馈
///
/// 以截止时间表示，重复复制会刷新截止时间；过期后的 `tick`
/// 不会清掉更新的窗口，也没有需要取消的定时器。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    duration: Duration,
    until: Option<Instant>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK)
    }
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// 开始（或重新开始）显示窗口
    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + self.duration);
    }

    pub fn reset(&mut self) {
        self.until = None;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// 清除已过期的窗口，返回状态是否改变
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.until.is_some() && !self.is_active(now) {
            self.until = None;
            return true;
        }
        false
    }

    /// 距离过期的剩余时间
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.until
            .and_then(|until| until.checked_duration_since(now))
            .filter(|d| !d.is_zero())
    }
}

/// 复制结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// 输出为空，未写入剪贴板
    NothingToCopy,
}

/// 链接转换器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConverter {
    mode: ConversionMode,
    input_url: String,
    input_password: String,
    output_url: String,
    feedback: CopyFeedback,
}

impl Default for LinkConverter {
    fn default() -> Self {
        Self::new(ConversionMode::default(), COPY_FEEDBACK)
    }
}

impl LinkConverter {
    pub fn new(mode: ConversionMode, feedback: Duration) -> Self {
        Self {
            mode,
            input_url: String::new(),
            input_password: String::new(),
            output_url: String::new(),
            feedback: CopyFeedback::new(feedback),
        }
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    pub fn input_url(&self) -> &str {
        &self.input_url
    }

    pub fn input_password(&self) -> &str {
        &self.input_password
    }

    pub fn output_url(&self) -> &str {
        &self.output_url
    }

    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    /// 切换模式，清空所有输入、输出和复制状态
    pub fn set_mode(&mut self, mode: ConversionMode) {
        debug!("Mode changed: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.input_url.clear();
        self.input_password.clear();
        self.output_url.clear();
        self.feedback.reset();
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.input_url = url.into();
        self.refresh();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.input_password = password.into();
        self.refresh();
    }

    pub fn push_url_char(&mut self, c: char) {
        self.input_url.push(c);
        self.refresh();
    }

    pub fn pop_url_char(&mut self) {
        if self.input_url.pop().is_some() {
            self.refresh();
        }
    }

    pub fn push_password_char(&mut self, c: char) {
        self.input_password.push(c);
        self.refresh();
    }

    pub fn pop_password_char(&mut self) {
        if self.input_password.pop().is_some() {
            self.refresh();
        }
    }

    /// 重新计算输出；任何输入变化都会清除 "Copied!" 状态
    fn refresh(&mut self) {
        self.output_url = convert(self.mode, &self.input_url, &self.input_password);
        self.feedback.reset();
        debug!(
            "Recomputed output ({} mode): {} chars",
            self.mode,
            self.output_url.len()
        );
    }

    /// 复制输出链接
    ///
    /// 写入失败时复制状态保持不变，错误交给调用方展示。
    pub fn copy(
        &mut self,
        clipboard: &mut dyn ClipboardSink,
        now: Instant,
    ) -> Result<CopyOutcome, ClipboardError> {
        if self.output_url.is_empty() {
            return Ok(CopyOutcome::NothingToCopy);
        }

        clipboard.set_text(&self.output_url)?;
        self.feedback.trigger(now);
        debug!("Copied output to clipboard");
        Ok(CopyOutcome::Copied)
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.feedback.is_active(now)
    }

    /// 推进时间，返回复制状态是否刚刚过期
    pub fn tick(&mut self, now: Instant) -> bool {
        self.feedback.tick(now)
    }

    /// 复制按钮文字
    pub fn copy_label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) { "Copied!" } else { "Copy" }
    }
}
