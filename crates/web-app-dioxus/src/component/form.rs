use dioxus::prelude::*;

/// Text input for a decimal number, marked as erroneous while `error` is set.
#[component]
pub fn NumberField(
    label: String,
    value: String,
    error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "control",
                input {
                    class: "input has-text-right",
                    class: if error.is_some() { "is-danger" },
                    r#type: "text",
                    inputmode: "decimal",
                    value: "{value}",
                    oninput: move |evt| oninput.call(evt),
                }
            }
            if let Some(ref error) = error {
                p { class: "help is-danger", "{error}" }
            }
        }
    }
}

#[component]
pub fn ButtonSelectField<T: Clone + PartialEq + 'static>(
    label: String,
    options: Vec<ButtonSelectOption<T>>,
    selected: T,
    onclick: EventHandler<(MouseEvent, T)>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "label", "{label}" }
            div {
                class: "field has-addons",
                for option in options {
                    div {
                        class: "control",
                        div {
                            class: "button",
                            class: if option.value == selected { "is-link" },
                            onclick: {
                                let value = option.value.clone();
                                move |event| {
                                    let value = value.clone();
                                    onclick((event, value));
                                }
                            },
                            {option.text}
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ButtonSelectOption<T> {
    pub text: String,
    pub value: T,
}
