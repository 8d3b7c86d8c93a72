// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod board;
mod components;
pub mod hooks;
mod screens;

pub use board::Board;
pub use board::BoardError;

use components::pico::Container;
use hooks::use_ledger_checker::LedgerConnectionStatus;
use screens::board::BoardScreen;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    .post-row {
        cursor: pointer;
        margin-bottom: 0.25rem;
    }

    .post-row.selected {
        color: var(--pico-primary);
        text-decoration: underline;
    }

    .response-row {
        color: var(--pico-ins-color);
        margin-bottom: 0.25rem;
    }

    .muted {
        color: var(--pico-muted-color);
    }

    .connection-banner {
        background-color: var(--pico-form-element-invalid-border-color);
        padding: 0.5rem 1rem;
        margin-bottom: 1rem;
    }
"#;

    rsx! {
        style { "{app_css}" }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Shared connection status, flipped by the ledger checker hook whenever
    // an API call fails in a connection-shaped way.
    use_context_provider(|| Signal::new(LedgerConnectionStatus::Connected));

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li {
                            h1 {
                                style: "margin: 0; font-size: 1.5rem;",
                                "Post Board"
                            }
                        }
                    }
                }
            }
            ConnectionBanner {}
            div {
                class: "content",
                BoardScreen {}
            }
        }
    }
}

#[component]
fn ConnectionBanner() -> Element {
    let status = use_context::<Signal<LedgerConnectionStatus>>();
    rsx! {
        match status() {
            LedgerConnectionStatus::Disconnected(msg) => rsx! {
                article {
                    class: "connection-banner",
                    "Ledger unreachable: {msg}"
                }
            },
            LedgerConnectionStatus::Connected => rsx! {},
        }
    }
}
