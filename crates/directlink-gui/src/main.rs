//! Directlink GUI Application
//!
//! 基于 Dioxus 的桌面版链接转换器：选择模式，填入分享链接和可选密码，
//! 即时得到直链并一键复制。
//!
//! # 数据流
//!
//! ```text
//!  settings.toml ──► AppSettings ──► Signal<LinkConverter>
//!                                        │        ▲
//!           ┌──────────── ConverterView ◄┘        │ set_mode / set_url /
//!           ▼                                     │ set_password / copy
//!  ┌─────────────────────────────────────────┐    │
//!  │ Header        标题 + Notice（复制失败）   │    │
//!  │ ModeSelector  Google Drive / 自定义域名  ├────┤
//!  │ LinkForm      URL + 密码输入             ├────┤
//!  │ OutputPanel   直链 + Copy / Copied!      ├────┘
//!  └─────────────────────────────────────────┘
//!                      │ copy 成功
//!                      ▼
//!        spawn(sleep(remaining)) ──► LinkConverter::tick
//! ```
//!
//! "Copied!" 的截止时间保存在转换器中，迟到的 tick 不会清除更新的复制状态。

mod app;
mod components;
mod state;
mod styles;

fn main() {
    // 初始化日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Directlink GUI...");

    // 启动 Dioxus 桌面应用
    dioxus::launch(app::App);
}
