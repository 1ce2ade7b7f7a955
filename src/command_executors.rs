//! Interpreters for the reducer's `Command`s: network calls, DOM effects,
//! navigation and timers. Async work goes through `spawn_local` and reports
//! back by dispatching an outcome message; nothing here blocks.

use futures::future::join_all;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::components::{batch_toolbar, chat_list};
use crate::dom_utils;
use crate::messages::{BusyTarget, Command, Message};
use crate::network::api_client::ApiClient;
use crate::state::dispatch_global_message;
use crate::toast;

pub fn execute_command(cmd: Command) {
    match cmd {
        Command::DeleteThreadApi {
            thread_id,
            is_current_chat,
        } => {
            spawn_local(async move {
                let outcome = ApiClient::delete_thread(&thread_id).await;
                dispatch_global_message(Message::ThreadDeleteCompleted {
                    thread_id,
                    is_current_chat,
                    outcome,
                });
            });
        }

        Command::ClearChatsApi => {
            spawn_local(async {
                let outcome = ApiClient::clear_chats().await;
                dispatch_global_message(Message::ClearAllCompleted { outcome });
            });
        }

        Command::DeleteSelectedApi { thread_ids } => {
            spawn_local(async move {
                let total = thread_ids.len();
                // All requests go out together; the join resolves only once
                // every one of them has settled.
                let outcomes =
                    join_all(thread_ids.iter().map(|id| ApiClient::delete_thread(id))).await;
                let failed = outcomes.iter().filter(|o| !o.is_success()).count();
                dispatch_global_message(Message::BatchDeleteSettled { total, failed });
            });
        }

        Command::ShowToast { message, kind } => toast::show(&message, kind),

        Command::SetBusy(target) => with_busy_targets(&target, |el, label| {
            dom_utils::set_busy(el, label);
        }),

        Command::ClearBusy(target) => with_busy_targets(&target, |el, _| {
            dom_utils::clear_busy(el);
        }),

        Command::RemoveChatItem { thread_id } => {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                chat_list::remove_item_with_fade(&document, &thread_id);
            }
        }

        Command::NavigateTo { href } => {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&href) {
                    web_sys::console::error_1(&format!("Navigation failed: {:?}", e).into());
                }
            }
        }

        Command::ScheduleReload { delay_ms } => {
            spawn_local(async move {
                if delay_ms > 0 {
                    TimeoutFuture::new(delay_ms).await;
                }
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().reload() {
                        web_sys::console::error_1(&format!("Reload failed: {:?}", e).into());
                    }
                }
            });
        }

        Command::RenderBatchSelection { selected } => {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                batch_toolbar::render_selection(&document, &selected);
            }
        }

        Command::TearDownBatchUi => {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                batch_toolbar::tear_down(&document);
            }
        }
    }
}

// Resolve a busy target to its trigger elements and apply `f`. The clear-all
// button keeps its label next to the spinner, per-thread buttons do not.
fn with_busy_targets<F>(target: &BusyTarget, f: F)
where
    F: Fn(&web_sys::Element, Option<&str>),
{
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };
    match target {
        BusyTarget::ThreadButtons { thread_id } => {
            for btn in chat_list::trigger_buttons(&document, thread_id) {
                f(&btn, None);
            }
        }
        BusyTarget::ClearAllButton => {
            if let Some(btn) = document.get_element_by_id(crate::constants::CLEAR_ALL_BTN_ID) {
                f(&btn, Some("Deleting..."));
            }
        }
    }
}
