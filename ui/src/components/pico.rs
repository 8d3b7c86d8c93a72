//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component. Inside a `form` without an `on_click`
/// handler it acts as the submit button.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (&props.button_type, props.outline) {
        (ButtonType::Primary, false) => "",
        (ButtonType::Primary, true) | (ButtonType::Secondary, _) => "secondary",
        (ButtonType::Contrast, _) => "contrast",
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    value: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
    #[props(default = false)]
    disabled: bool,
}

/// A labeled, controlled form input field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                value: "{props.value}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                disabled: props.disabled,
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
}

pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                article {
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |_| props.is_open.set(false)
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
