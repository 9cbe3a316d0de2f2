//! 输出面板组件

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct OutputPanelProps {
    pub output: String,
    pub copied: bool,
    pub on_copy: EventHandler<()>,
}

/// 直链与复制按钮
#[component]
pub fn OutputPanel(props: OutputPanelProps) -> Element {
    rsx! {
        div { class: "field",
            label { class: "field-label", "Direct Download Link:" }
            div { class: "output-row",
                input {
                    class: "text-input output",
                    r#type: "text",
                    value: "{props.output}",
                    readonly: true,
                }
                button {
                    class: if props.copied { "btn btn-success" } else { "btn btn-primary" },
                    onclick: move |_| props.on_copy.call(()),
                    if props.copied {
                        span { "✔" }
                        span { "Copied!" }
                    } else {
                        span { "⧉" }
                        span { "Copy" }
                    }
                }
            }
            p { class: "hint",
                "Use this link as your "
                strong { "BEE File URL" }
                " in Basis"
            }
        }
    }
}
