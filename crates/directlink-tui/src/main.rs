//! Directlink TUI - 终端中的链接转换器
//!
//! 使用 ratatui 提供模式选择、链接/密码输入与一键复制。
//!
//! # 日志
//!
//! 日志默认显示在界面底部的日志面板中。
//! 如需输出到文件进行调试，设置 RUST_LOG 环境变量：
//!
//! ```bash
//! RUST_LOG=debug cargo run -p directlink-tui 2>> /tmp/directlink.log
//! ```

mod app;
mod tui_log;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use directlink_core::{AppSettings, ConversionMode, LogLevel};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use app::{App, Focus};
use tui_log::TuiLogLayer;

fn main() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(AppSettings::load());

    // 初始化日志系统，发送到 TUI 日志面板
    if let Err(e) = init_logging(app.event_tx.clone()) {
        app.add_log(LogLevel::Warn, format!("日志系统初始化失败: {e}"));
    }
    tracing::info!("Directlink TUI 启动 ({} 模式)", app.converter.mode());

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    res
}

/// 初始化日志系统
///
/// - 总是将日志发送到 TUI 日志面板
/// - 如果设置了 RUST_LOG，同时输出到 stderr（用于调试）
/// - directlink-core 的 `log` 记录由 tracing-subscriber 默认的 tracing-log 特性在 `try_init` 时桥接
fn init_logging(
    log_tx: tokio::sync::mpsc::Sender<app::AppEvent>,
) -> Result<(), TryInitError> {
    let tui_layer = TuiLogLayer::new(log_tx);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,directlink_core=debug"));

    if std::env::var("RUST_LOG").is_ok() {
        use tracing_subscriber::fmt;

        let stderr_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .compact();

        tracing_subscriber::registry()
            .with(filter)
            .with(tui_layer)
            .with(stderr_layer)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tui_layer)
            .try_init()
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // 使用 poll 避免无限阻塞，同时保证 "Copied!" 按时复原
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if !handle_key(&mut app, key) {
                        return Ok(());
                    }
                }
                Event::Paste(text) => app.paste(&text),
                _ => {}
            }
        }

        // Update app state (handle async events)
        app.tick();
    }
}

/// 处理按键，返回 false 表示退出
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return false,
        KeyCode::Char('c') if ctrl => return false,
        KeyCode::Char('u') if ctrl => app.clear_field(),
        KeyCode::Tab | KeyCode::Down => app.next_focus(),
        KeyCode::BackTab | KeyCode::Up => app.previous_focus(),
        KeyCode::F(2) => app.toggle_log_level(),
        KeyCode::F(3) => app.clear_logs(),
        KeyCode::Enter => match app.focus {
            Focus::Mode => app.toggle_mode(),
            _ => app.copy_output(),
        },
        _ if app.focus == Focus::Mode => handle_mode_key(app, key.code),
        KeyCode::Char(' ') if app.focus == Focus::Copy => app.copy_output(),
        KeyCode::Char(c) if !ctrl => app.input_char(c),
        KeyCode::Backspace => app.backspace(),
        _ => {}
    }
    true
}

fn handle_mode_key(app: &mut App, code: KeyCode) {
    let target = match code {
        KeyCode::Left | KeyCode::Char('h') => ConversionMode::GoogleDrive,
        KeyCode::Right | KeyCode::Char('l') => ConversionMode::CustomDomain,
        KeyCode::Char(' ') => app.converter.mode().toggled(),
        _ => return,
    };

    // 与下拉框一致：只有选择变化时才重置
    if target != app.converter.mode() {
        app.select_mode(target);
    }
}
