//! UI rendering module

use directlink_core::{ConversionMode, LogLevel};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};

use crate::app::{App, Focus};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode selector
            Constraint::Length(3), // URL
            Constraint::Length(3), // Password
            Constraint::Length(4), // Output
            Constraint::Min(4),    // Log
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    draw_mode_selector(frame, app, chunks[0]);
    draw_url_field(frame, app, chunks[1]);
    draw_password_field(frame, app, chunks[2]);
    draw_output(frame, app, chunks[3]);
    draw_log(frame, app, chunks[4]);
    draw_status_bar(frame, app, chunks[5]);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn draw_mode_selector(frame: &mut Frame, app: &App, area: Rect) {
    let mode = app.converter.mode();
    let titles: Vec<&str> = ConversionMode::ALL.iter().map(|m| m.label()).collect();
    let selected = ConversionMode::ALL
        .iter()
        .position(|m| *m == mode)
        .unwrap_or_default();

    let title = format!(" {} ", mode.title());
    let tabs = Tabs::new(titles)
        .block(field_block(&title, app.focus == Focus::Mode))
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).bold());

    frame.render_widget(tabs, area);
}

/// 输入框内容；为空时显示灰色占位符
fn input_line<'a>(value: &'a str, placeholder: &'a str, focused: bool) -> Line<'a> {
    let mut spans = if value.is_empty() {
        vec![Span::styled(placeholder, Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::raw(value)]
    };
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

fn draw_url_field(frame: &mut Frame, app: &App, area: Rect) {
    let mode = app.converter.mode();
    let focused = app.focus == Focus::Url;
    let title = format!(" {} ", mode.url_prompt());

    let input = Paragraph::new(input_line(
        app.converter.input_url(),
        mode.url_placeholder(),
        focused,
    ))
    .block(field_block(&title, focused));

    frame.render_widget(input, area);
}

fn draw_password_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Password;
    let password = app.converter.input_password();
    let shown = if app.settings.mask_password {
        "•".repeat(password.chars().count())
    } else {
        password.to_string()
    };

    let input = Paragraph::new(input_line(&shown, "Optional password", focused)).block(
        field_block(
            " Optional avatar password (will be base64-encoded and appended) ",
            focused,
        ),
    );

    frame.render_widget(input, area);
}

fn draw_output(frame: &mut Frame, app: &App, area: Rect) {
    let output = app.converter.output_url();
    let focused = app.focus == Focus::Copy;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(13)])
        .split(area);

    // 输出为空时不显示链接和复制按钮
    if output.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "—",
            Style::default().fg(Color::DarkGray),
        ))
        .block(field_block(" Direct Download Link: ", false));
        frame.render_widget(empty, area);
        return;
    }

    let link = Paragraph::new(vec![
        Line::from(Span::styled(output, Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(
            "Use this link as your BEE File URL in Basis",
            Style::default().fg(Color::DarkGray).italic(),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(field_block(" Direct Download Link: ", false));
    frame.render_widget(link, chunks[0]);

    let (icon, color) = if app.is_copied() {
        ("✔", Color::Green)
    } else {
        ("⧉", Color::White)
    };
    let button = Paragraph::new(format!("{icon} {}", app.copy_label()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bold())
        .block(field_block("", focused));
    frame.render_widget(button, chunks[1]);
}

fn level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(Color::Red),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Info => Style::default(),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(Color::DarkGray),
    }
}

fn draw_log(frame: &mut Frame, app: &App, area: Rect) {
    let height = usize::from(area.height.saturating_sub(2));
    let items: Vec<ListItem> = app
        .visible_logs()
        .rev()
        .take(height)
        .map(|entry| ListItem::new(entry.to_string()).style(level_style(entry.level)))
        .collect();

    let title = format!(" 📋 日志 [{}] ", app.log_level);
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(list, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.status() {
        Some(entry) => Line::from(Span::styled(entry.to_string(), level_style(entry.level))),
        None => Line::from(
            " [Tab]切换 [←/→]模式 [Enter]复制 [Ctrl+U]清空 [F2]日志级别 [F3]清空日志 [Esc]退出",
        ),
    };

    let status = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}
