//! 头部组件

use crate::state::Notice;
use directlink_core::ConversionMode;
use dioxus::prelude::*;

/// 应用头部
#[component]
pub fn Header(mode: ConversionMode, notice: Notice) -> Element {
    rsx! {
        div { class: "logo",
            h1 { "{mode.title()}" }
        }

        match notice {
            Notice::None => rsx! {
                div { class: "status-badge", "{mode.label()}" }
            },
            Notice::Error(message) => rsx! {
                div { class: "status-badge error", "{message}" }
            },
        }
    }
}
