#![allow(non_snake_case)]

use std::{fmt::Display, str::FromStr};

use dioxus::prelude::*;
use log::error;

const INPUT_VALID_STYLE: &str = "input-valid";
const INPUT_INVALID_STYLE: &str = "input-invalid";
const FLOATING_LABEL_VALID_STYLE: &str = "floating-label-valid";
const FLOATING_LABEL_INVALID_STYLE: &str = "floating-label-invalid";

/// Text input with a label floating above it once it holds a value.
///
/// The input is controlled: `value` is rendered as is and every keystroke
/// is forwarded to `oninput`. `error` is displayed under the input.
#[component]
pub fn FloatingLabelInput(
    name: String,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] required: bool,
    value: String,
    error: Option<String>,
    #[props(default)] autofocus: bool,
    oninput: EventHandler<String>,
    onfocusout: Option<EventHandler<()>>,
) -> Element {
    let required_label_style = required
        .then_some("after:content-['*'] after:ml-0.5 after:text-red-500")
        .unwrap_or_default();
    let (input_style, label_style) = if error.is_some() {
        (INPUT_INVALID_STYLE, FLOATING_LABEL_INVALID_STYLE)
    } else {
        (INPUT_VALID_STYLE, FLOATING_LABEL_VALID_STYLE)
    };

    rsx! {
        div {
            class: "relative z-0 grow",
            input {
                r#type: "{input_type}",
                name: "{name}",
                id: "{name}",
                class: "{input_style} block py-2.5 px-0 w-full text-sm bg-transparent border-0 border-b-2 focus:outline-none focus:ring-0 peer",
                placeholder: " ",
                required,
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
                onfocusout: move |_| {
                    if let Some(onfocusout) = onfocusout {
                        onfocusout.call(());
                    }
                },
                onmounted: move |evt| async move {
                    if autofocus {
                        if let Err(err) = evt.set_focus(true).await {
                            error!("Error focusing input: {err:?}");
                        }
                    }
                },
            }
            label {
                r#for: "{name}",
                class: "{label_style} {required_label_style} absolute text-sm duration-300 transform -translate-y-6 scale-75 top-3 -z-10 origin-[0] peer-focus:left-0 peer-placeholder-shown:scale-100 peer-placeholder-shown:translate-y-0 peer-focus:scale-75 peer-focus:-translate-y-6",
                "{label}"
            }
            if let Some(error) = error {
                ErrorMessage { message: error }
            }
        }
    }
}

#[component]
fn ErrorMessage(message: String) -> Element {
    rsx! {
        p {
            class: "mt-2 text-sm text-red-600 dark:text-red-500",
            span { class: "font-medium", "{message}" }
        }
    }
}

/// Error message of parsing `value` as a `T`, if any.
pub fn validate_value<T>(value: &str) -> Option<String>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    T::from_str(value).err().map(|error| error.to_string())
}
