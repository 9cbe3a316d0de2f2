//! 模式选择器组件

use directlink_core::ConversionMode;
use dioxus::prelude::*;

/// Google Drive / 自定义域名模式选择器
///
/// 点击当前已选中的模式不会触发 `on_change`。
#[component]
pub fn ModeSelector(
    current_mode: ConversionMode,
    on_change: EventHandler<ConversionMode>,
) -> Element {
    let modes = [
        (ConversionMode::GoogleDrive, "🗂️", "drive.google.com/file/d/…"),
        (ConversionMode::CustomDomain, "🌐", "任意 URL，原样使用"),
    ];

    rsx! {
        label { class: "field-label", "Conversion Mode:" }
        div { class: "mode-row",
            for (mode, icon, desc) in modes {
                div {
                    key: "{mode}",
                    class: if current_mode == mode { "mode-card active" } else { "mode-card" },
                    onclick: move |_| {
                        if mode != current_mode {
                            on_change.call(mode);
                        }
                    },
                    div { class: "mode-card-icon", "{icon}" }
                    div { class: "mode-card-title", "{mode.label()}" }
                    div { class: "mode-card-desc", "{desc}" }
                }
            }
        }
    }
}
