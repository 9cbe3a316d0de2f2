//! Application state

use directlink_core::{
    AppSettings, ClipboardSink, ConversionMode, CopyOutcome, LinkConverter, LogEntry, LogLevel,
    SystemClipboard,
};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const MAX_LOGS: usize = 200;
const STATUS_TTL: Duration = Duration::from_secs(3);

/// 异步事件（目前只有日志层转发的消息）
#[derive(Debug)]
pub enum AppEvent {
    LogMessage { level: String, message: String },
}

/// 当前获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Mode,
    Url,
    Password,
    Copy,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Mode => Self::Url,
            Self::Url => Self::Password,
            Self::Password => Self::Copy,
            Self::Copy => Self::Mode,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Mode => Self::Copy,
            Self::Url => Self::Mode,
            Self::Password => Self::Url,
            Self::Copy => Self::Password,
        }
    }
}

pub struct App {
    pub converter: LinkConverter,
    pub focus: Focus,
    pub settings: AppSettings,
    pub logs: Vec<LogEntry>,
    pub log_level: LogLevel,
    /// 临时状态消息及其过期时间
    pub status: Option<(LogEntry, Instant)>,
    pub event_tx: mpsc::Sender<AppEvent>,
    event_rx: mpsc::Receiver<AppEvent>,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        Self::with_clipboard(settings, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(settings: AppSettings, clipboard: Box<dyn ClipboardSink>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(256);
        Self {
            converter: settings.new_converter(),
            focus: Focus::Url,
            settings,
            logs: vec![LogEntry::new(
                LogLevel::Info,
                "Tab 切换控件, Enter 复制, Esc 退出",
            )],
            log_level: LogLevel::Info,
            status: None,
            event_tx,
            event_rx,
            clipboard,
        }
    }

    pub fn add_log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.logs.push(LogEntry::new(level, message));
        if self.logs.len() > MAX_LOGS {
            let excess = self.logs.len() - MAX_LOGS;
            self.logs.drain(..excess);
        }
    }

    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }

    pub fn toggle_log_level(&mut self) {
        self.log_level = self.log_level.next_verbosity();
        let message = format!("日志显示级别: {}", self.log_level);
        self.add_log(LogLevel::Info, message);
    }

    pub fn visible_logs(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.logs.iter().filter(|e| e.level <= self.log_level)
    }

    fn set_status(&mut self, level: LogLevel, message: impl Into<String>) {
        self.status = Some((LogEntry::new(level, message), Instant::now() + STATUS_TTL));
    }

    /// 切换焦点；没有输出时复制按钮不渲染，跳过它
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
        if self.focus == Focus::Copy && !self.has_output() {
            self.focus = self.focus.next();
        }
    }

    pub fn previous_focus(&mut self) {
        self.focus = self.focus.previous();
        if self.focus == Focus::Copy && !self.has_output() {
            self.focus = self.focus.previous();
        }
    }

    fn has_output(&self) -> bool {
        !self.converter.output_url().is_empty()
    }

    pub fn select_mode(&mut self, mode: ConversionMode) {
        self.converter.set_mode(mode);
        tracing::info!("切换到 {} 模式", mode.label());
    }

    pub fn toggle_mode(&mut self) {
        self.select_mode(self.converter.mode().toggled());
    }

    /// 向当前输入框追加字符
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Focus::Url => self.converter.push_url_char(c),
            Focus::Password => self.converter.push_password_char(c),
            Focus::Mode | Focus::Copy => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Url => self.converter.pop_url_char(),
            Focus::Password => self.converter.pop_password_char(),
            Focus::Mode | Focus::Copy => {}
        }
    }

    /// 清空当前输入框
    pub fn clear_field(&mut self) {
        match self.focus {
            Focus::Url => self.converter.set_url(""),
            Focus::Password => self.converter.set_password(""),
            Focus::Mode | Focus::Copy => {}
        }
    }

    /// 粘贴（bracketed paste）到当前输入框
    pub fn paste(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        match self.focus {
            Focus::Url => {
                let url = format!("{}{text}", self.converter.input_url());
                self.converter.set_url(url);
            }
            Focus::Password => {
                let password = format!("{}{text}", self.converter.input_password());
                self.converter.set_password(password);
            }
            Focus::Mode | Focus::Copy => {}
        }
    }

    pub fn copy_output(&mut self) {
        match self.converter.copy(self.clipboard.as_mut(), Instant::now()) {
            Ok(CopyOutcome::Copied) => {
                tracing::info!("已复制直链到剪贴板");
            }
            Ok(CopyOutcome::NothingToCopy) => {
                self.set_status(LogLevel::Warn, "没有可复制的链接");
            }
            Err(e) => {
                tracing::warn!("复制失败: {e}");
                self.set_status(LogLevel::Error, format!("复制失败: {e}"));
            }
        }
    }

    pub fn is_copied(&self) -> bool {
        self.converter.is_copied(Instant::now())
    }

    pub fn copy_label(&self) -> &'static str {
        self.converter.copy_label(Instant::now())
    }

    pub fn status(&self) -> Option<&LogEntry> {
        self.status.as_ref().map(|(entry, _)| entry)
    }

    /// Update app state (drain async events, expire timers)
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.converter.tick(now);

        if self.status.as_ref().is_some_and(|(_, until)| now >= *until) {
            self.status = None;
        }

        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::LogMessage { level, message } => {
                    let level = level.parse().unwrap_or(LogLevel::Info);
                    self.add_log(level, message);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directlink_core::MemoryClipboard;

    fn app_with(clipboard: MemoryClipboard) -> App {
        App::with_clipboard(AppSettings::default(), Box::new(clipboard))
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Mode;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Mode);
        assert_eq!(Focus::Mode.previous(), Focus::Copy);
    }

    #[test]
    fn test_copy_focus_needs_output() {
        let mut app = app_with(MemoryClipboard::default());
        app.focus = Focus::Password;
        app.next_focus();
        assert_eq!(app.focus, Focus::Mode);
        app.previous_focus();
        assert_eq!(app.focus, Focus::Password);

        app.focus = Focus::Url;
        app.paste("https://drive.google.com/file/d/xyz/view");
        app.next_focus();
        app.next_focus();
        assert_eq!(app.focus, Focus::Copy);
        app.next_focus();
        assert_eq!(app.focus, Focus::Mode);
        app.previous_focus();
        assert_eq!(app.focus, Focus::Copy);
    }

    #[test]
    fn test_typing_updates_output() {
        let mut app = app_with(MemoryClipboard::default());
        for c in "https://drive.google.com/file/d/abc_123/view".chars() {
            app.input_char(c);
        }
        assert_eq!(
            app.converter.output_url(),
            "https://drive.google.com/uc?export=download&id=abc_123"
        );

        app.focus = Focus::Password;
        app.input_char('h');
        app.input_char('i');
        assert!(app.converter.output_url().ends_with("#aGk="));

        app.backspace();
        app.backspace();
        assert!(!app.converter.output_url().contains('#'));
    }

    #[test]
    fn test_mode_fields_ignore_text_input() {
        let mut app = app_with(MemoryClipboard::default());
        app.focus = Focus::Mode;
        app.input_char('x');
        assert_eq!(app.converter.input_url(), "");
    }

    #[test]
    fn test_toggle_mode_clears_input() {
        let mut app = app_with(MemoryClipboard::default());
        app.paste("https://example.com/file\n");
        assert_eq!(app.converter.input_url(), "https://example.com/file");

        app.toggle_mode();
        assert_eq!(app.converter.mode(), ConversionMode::CustomDomain);
        assert_eq!(app.converter.input_url(), "");
        assert_eq!(app.converter.output_url(), "");
    }

    #[test]
    fn test_copy_sets_label() {
        let mut app = app_with(MemoryClipboard::default());
        app.paste("https://drive.google.com/file/d/xyz/view");
        app.copy_output();
        assert!(app.is_copied());
        assert_eq!(app.copy_label(), "Copied!");
    }

    #[test]
    fn test_copy_failure_shows_status() {
        let mut app = app_with(MemoryClipboard::failing());
        app.paste("https://drive.google.com/file/d/xyz/view");
        app.copy_output();
        assert!(!app.is_copied());
        assert_eq!(app.status().map(|s| s.level), Some(LogLevel::Error));
    }

    #[test]
    fn test_log_events_are_drained() {
        let mut app = app_with(MemoryClipboard::default());
        app.event_tx
            .try_send(AppEvent::LogMessage {
                level: "DEBUG".to_string(),
                message: "hidden by default".to_string(),
            })
            .unwrap();
        app.tick();
        assert_eq!(app.logs.last().map(|e| e.level), Some(LogLevel::Debug));
        assert!(app.visible_logs().all(|e| e.level <= LogLevel::Info));

        app.toggle_log_level();
        assert!(app.visible_logs().any(|e| e.level == LogLevel::Debug));
    }
}
