//=============================================================================
// File: src/screens/board.rs
//=============================================================================
use api::LedgerRemote;
use dioxus::prelude::*;

use crate::board::Board;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::hooks::use_ledger_checker::use_ledger_checker;

#[derive(Clone, PartialEq)]
enum HydrationState {
    Loading,
    Ready,
    Failed(String),
}

#[component]
pub fn BoardScreen() -> Element {
    let mut board = use_signal(|| Board::new(LedgerRemote));
    let mut hydration_state = use_signal(|| HydrationState::Loading);
    let mut checker = use_ledger_checker();
    let mut error_modal_open = use_signal(|| false);
    let mut error_message = use_signal(String::new);

    // Full read-through of the ledger on mount (and on Retry).
    let mut hydration = use_future(move || async move {
        hydration_state.set(HydrationState::Loading);
        let mut b = (*board.peek()).clone();
        let result = b.hydrate().await;
        checker.check_ref(&result);
        board.write().adopt_hydration(b);
        match result {
            Ok(()) => hydration_state.set(HydrationState::Ready),
            Err(e) => {
                dioxus_logger::tracing::warn!("hydration failed: {}", e);
                hydration_state.set(HydrationState::Failed(e.to_string()));
            }
        }
    });

    let mut on_select = move |index: usize| {
        let generation = board.write().begin_select(index);
        spawn(async move {
            let mut b = (*board.peek()).clone();
            let result = b.load_responses().await;
            checker.check_ref(&result);
            if let Err(e) = &result {
                dioxus_logger::tracing::warn!("response load failed: {}", e);
            }
            // A newer selection may have started while this load was in
            // flight; only the latest one's result may land.
            if board.peek().load_generation() == generation {
                board.write().adopt_response_load(b);
            }
        });
    };

    let on_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let mut b = (*board.peek()).clone();
            let result = b.create_post().await;
            if checker.check_ref(&result) {
                board.write().adopt_post_submission(b);
            } else if let Err(e) = result {
                dioxus_logger::tracing::warn!("create post failed: {}", e);
                error_message.set(e.to_string());
                error_modal_open.set(true);
            }
        });
    };

    let on_respond = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let mut b = (*board.peek()).clone();
            let result = b.respond_to_post().await;
            if checker.check_ref(&result) {
                board.write().adopt_response_submission(b);
            } else if let Err(e) = result {
                dioxus_logger::tracing::warn!("respond failed: {}", e);
                error_message.set(e.to_string());
                error_modal_open.set(true);
            }
        });
    };

    let posts = board.read().posts().to_vec();
    let responses = board.read().responses().to_vec();
    let responses_current = board.read().responses_are_current();
    let selected = board.read().selected();
    let selected_cid = board.read().selected_post().map(|p| p.cid.to_string());
    let post_draft = board.read().post_draft().to_string();
    let response_draft = board.read().response_draft().to_string();

    let create_disabled = post_draft.trim().is_empty();
    let respond_disabled = response_draft.trim().is_empty() || selected_cid.is_none();

    rsx! {
        Modal {
            is_open: error_modal_open,
            title: "Submission Failed".to_string(),
            p { "{error_message}" }
            footer {
                Button {
                    on_click: move |_| error_modal_open.set(false),
                    "Close"
                }
            }
        }
        match hydration_state() {
            HydrationState::Loading => rsx! {
                Card {
                    h3 { "Questions" }
                    p { "Loading..." }
                    progress {}
                }
            },
            HydrationState::Failed(e) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load posts: {e}" }
                    button { onclick: move |_| hydration.restart(), "Retry" }
                }
            },
            HydrationState::Ready => rsx! {
                Card {
                    h3 { "Questions" }
                    if posts.is_empty() {
                        p { class: "muted", "No posts yet. Ask the first question below." }
                    }
                    for (index, post) in posts.clone().into_iter().enumerate() {
                        p {
                            key: "{index}",
                            class: if selected == index { "post-row selected" } else { "post-row" },
                            onclick: move |_| on_select(index),
                            "{post.cid}"
                            small { " · {post.response_count} responses" }
                        }
                    }
                }
                Card {
                    h3 { "Responses" }
                    match &selected_cid {
                        Some(cid) => rsx! {
                            p { class: "muted", "For: {cid}" }
                        },
                        None => rsx! {
                            p { class: "muted", "Select a question above to see its responses." }
                        },
                    }
                    if responses_current {
                        if responses.is_empty() && selected_cid.is_some() {
                            p { "No responses yet." }
                        }
                        for (index, response) in responses.clone().into_iter().enumerate() {
                            p {
                                key: "{index}",
                                class: "response-row",
                                "{response.cid}"
                            }
                        }
                    } else {
                        // The list on hand belongs to an earlier selection
                        // (load in flight, or failed).
                        p { class: "muted", "Responses are not loaded. Click the question to load them." }
                    }
                    form {
                        onsubmit: on_respond,
                        div {
                            role: "group",
                            Input {
                                label: "".to_string(),
                                name: "response_cid",
                                placeholder: "Content id of your response".to_string(),
                                value: "{response_draft}",
                                on_input: move |evt: FormEvent| board.write().set_response_draft(evt.value()),
                            }
                            Button {
                                disabled: respond_disabled,
                                "Respond to Post"
                            }
                        }
                    }
                }
                Card {
                    h3 { "Create Post" }
                    form {
                        onsubmit: on_create,
                        div {
                            role: "group",
                            Input {
                                label: "".to_string(),
                                name: "post_cid",
                                placeholder: "Content id of your question".to_string(),
                                value: "{post_draft}",
                                on_input: move |evt: FormEvent| board.write().set_post_draft(evt.value()),
                            }
                            Button {
                                disabled: create_disabled,
                                "Create Post"
                            }
                        }
                    }
                }
            }
        }
    }
}
