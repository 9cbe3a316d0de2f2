//! 输入表单组件

use directlink_core::ConversionMode;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LinkFormProps {
    pub mode: ConversionMode,
    pub url: String,
    pub password: String,
    pub on_url: EventHandler<String>,
    pub on_password: EventHandler<String>,
}

/// 链接与密码输入
#[component]
pub fn LinkForm(props: LinkFormProps) -> Element {
    let mode = props.mode;

    rsx! {
        div { class: "field",
            label { class: "field-label", "{mode.url_prompt()}" }
            input {
                class: "text-input",
                r#type: "text",
                value: "{props.url}",
                placeholder: "{mode.url_placeholder()}",
                oninput: move |evt: FormEvent| props.on_url.call(evt.value()),
            }
        }

        div { class: "field",
            label { class: "field-label",
                "Optional avatar password (will be base64-encoded and appended)"
            }
            input {
                class: "text-input",
                r#type: "password",
                value: "{props.password}",
                placeholder: "Optional password",
                oninput: move |evt: FormEvent| props.on_password.call(evt.value()),
            }
        }
    }
}
