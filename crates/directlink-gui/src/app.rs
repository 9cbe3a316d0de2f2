//! 主应用组件

use dioxus::prelude::*;
use std::time::Instant;

use crate::components::{Header, LinkForm, ModeSelector, OutputPanel};
use crate::state::{ConverterView, Notice};
use crate::styles::GLOBAL_CSS;

use directlink_core::{AppSettings, ConversionMode, CopyOutcome, SystemClipboard};

/// 主应用
#[component]
pub fn App() -> Element {
    // 应用状态
    let settings = use_signal(AppSettings::load);
    let mut converter = use_signal(move || settings.peek().new_converter());
    let mut clipboard = use_signal(SystemClipboard::new);
    let mut notice = use_signal(Notice::default);

    let view = ConverterView::capture(&converter.read(), Instant::now());

    // 事件处理器
    let on_mode_change = move |mode: ConversionMode| {
        converter.with_mut(|c| c.set_mode(mode));
        notice.set(Notice::None);
        log::info!("Switched to {mode} mode");
    };

    let on_url = move |url: String| {
        converter.with_mut(|c| c.set_url(url));
    };

    let on_password = move |password: String| {
        converter.with_mut(|c| c.set_password(password));
    };

    let on_copy = move |()| {
        let result = {
            let mut sink = clipboard.write();
            converter.with_mut(|c| c.copy(&mut *sink, Instant::now()))
        };

        match result {
            Ok(CopyOutcome::Copied) => {
                notice.set(Notice::None);
                let Some(remaining) = converter.peek().feedback().remaining(Instant::now()) else {
                    return;
                };

                // 到期后重新渲染；期间再次复制会推迟截止时间，旧任务只做一次无效检查
                spawn(async move {
                    tokio::time::sleep(remaining).await;
                    converter.with_mut(|c| {
                        c.tick(Instant::now());
                    });
                });
            }
            Ok(CopyOutcome::NothingToCopy) => {}
            Err(e) => {
                log::warn!("Clipboard write failed: {e}");
                notice.set(Notice::Error(format!("复制失败: {e}")));
            }
        }
    };

    rsx! {
        style { "{GLOBAL_CSS}" }

        div { class: "app-container",
            div { class: "bento-tile header-tile",
                Header { mode: view.mode, notice: notice.read().clone() }
            }

            div { class: "bento-tile form-tile",
                ModeSelector {
                    current_mode: view.mode,
                    on_change: on_mode_change,
                }

                LinkForm {
                    mode: view.mode,
                    url: view.url.clone(),
                    password: view.password.clone(),
                    on_url: on_url,
                    on_password: on_password,
                }

                if view.has_output() {
                    OutputPanel {
                        output: view.output.clone(),
                        copied: view.copied,
                        on_copy: on_copy,
                    }
                }
            }
        }
    }
}
