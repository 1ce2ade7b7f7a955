// src/update.rs
//
// Pure reducer for the chat list controller. Takes the current state and one
// message, mutates the selection set where needed and returns the side
// effects to run. No DOM or network access happens here, which is what lets
// the deletion flows be unit-tested off-browser.
//
use crate::constants::{
    delete_error_message, partial_batch_failure_message, DASHBOARD_PATH, DEFAULT_CLEAR_SUCCESS,
    DEFAULT_DELETE_SUCCESS, NETWORK_ERROR, NO_CHATS_TO_DELETE, RELOAD_DELAY_MS,
};
use crate::messages::{BusyTarget, Command, Message};
use crate::models::DeleteOutcome;
use crate::state::AppState;
use crate::toast::ToastKind;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    match msg {
        Message::DeleteThreadConfirmed {
            thread_id,
            is_current_chat,
        } => vec![
            Command::SetBusy(BusyTarget::ThreadButtons {
                thread_id: thread_id.clone(),
            }),
            Command::DeleteThreadApi {
                thread_id,
                is_current_chat,
            },
        ],

        Message::ThreadDeleteCompleted {
            thread_id,
            is_current_chat,
            outcome,
        } => {
            let mut commands = vec![Command::ClearBusy(BusyTarget::ThreadButtons {
                thread_id: thread_id.clone(),
            })];
            match outcome {
                DeleteOutcome::Success { message } => {
                    commands.push(Command::ShowToast {
                        message: message.unwrap_or_else(|| DEFAULT_DELETE_SUCCESS.to_string()),
                        kind: ToastKind::Success,
                    });
                    if is_current_chat {
                        commands.push(Command::NavigateTo {
                            href: DASHBOARD_PATH.to_string(),
                        });
                    } else {
                        commands.push(Command::RemoveChatItem { thread_id });
                    }
                }
                DeleteOutcome::BusinessError { error } => {
                    commands.push(Command::ShowToast {
                        message: delete_error_message(&error),
                        kind: ToastKind::Error,
                    });
                }
                DeleteOutcome::TransportError => {
                    commands.push(Command::ShowToast {
                        message: delete_error_message(NETWORK_ERROR),
                        kind: ToastKind::Error,
                    });
                }
            }
            commands
        }

        Message::ClearAllRequested { chat_count } => {
            if chat_count == 0 {
                vec![Command::ShowToast {
                    message: NO_CHATS_TO_DELETE.to_string(),
                    kind: ToastKind::Info,
                }]
            } else {
                vec![
                    Command::SetBusy(BusyTarget::ClearAllButton),
                    Command::ClearChatsApi,
                ]
            }
        }

        Message::ClearAllCompleted { outcome } => {
            let mut commands = vec![Command::ClearBusy(BusyTarget::ClearAllButton)];
            match outcome {
                DeleteOutcome::Success { message } => {
                    commands.push(Command::ShowToast {
                        message: message.unwrap_or_else(|| DEFAULT_CLEAR_SUCCESS.to_string()),
                        kind: ToastKind::Success,
                    });
                    // Reload is delayed so the toast is visible before the
                    // page is torn down.
                    commands.push(Command::ScheduleReload {
                        delay_ms: RELOAD_DELAY_MS,
                    });
                }
                DeleteOutcome::BusinessError { error } => {
                    commands.push(Command::ShowToast {
                        message: delete_error_message(&error),
                        kind: ToastKind::Error,
                    });
                }
                DeleteOutcome::TransportError => {
                    commands.push(Command::ShowToast {
                        message: delete_error_message(NETWORK_ERROR),
                        kind: ToastKind::Error,
                    });
                }
            }
            commands
        }

        Message::ThreadSelectionToggled {
            thread_id,
            selected,
        } => {
            if selected {
                state.selected_threads.insert(thread_id);
            } else {
                state.selected_threads.remove(&thread_id);
            }
            vec![Command::RenderBatchSelection {
                selected: state.selected_threads.clone(),
            }]
        }

        Message::BatchDeleteConfirmed => {
            if state.selected_threads.is_empty() {
                return Vec::new();
            }
            let thread_ids: Vec<String> = state.selected_threads.iter().cloned().collect();
            state.selected_threads.clear();
            vec![Command::DeleteSelectedApi { thread_ids }]
        }

        Message::BatchDeleteSettled { total, failed } => {
            if failed > 0 {
                vec![
                    Command::ShowToast {
                        message: partial_batch_failure_message(failed, total),
                        kind: ToastKind::Error,
                    },
                    Command::ScheduleReload {
                        delay_ms: RELOAD_DELAY_MS,
                    },
                ]
            } else {
                vec![Command::ScheduleReload { delay_ms: 0 }]
            }
        }

        Message::BatchModeCancelled => {
            state.selected_threads.clear();
            state.batch_mode = false;
            vec![Command::TearDownBatchUi]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new()
    }

    fn success(message: Option<&str>) -> DeleteOutcome {
        DeleteOutcome::Success {
            message: message.map(str::to_string),
        }
    }

    fn api_commands(commands: &[Command]) -> Vec<&Command> {
        commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    Command::DeleteThreadApi { .. }
                        | Command::ClearChatsApi
                        | Command::DeleteSelectedApi { .. }
                )
            })
            .collect()
    }

    #[test]
    fn confirmed_delete_issues_exactly_one_request_for_that_thread() {
        let commands = update(
            &mut state(),
            Message::DeleteThreadConfirmed {
                thread_id: "42".into(),
                is_current_chat: false,
            },
        );
        assert_eq!(
            commands,
            vec![
                Command::SetBusy(BusyTarget::ThreadButtons {
                    thread_id: "42".into()
                }),
                Command::DeleteThreadApi {
                    thread_id: "42".into(),
                    is_current_chat: false,
                },
            ]
        );
        assert_eq!(api_commands(&commands).len(), 1);
    }

    #[test]
    fn successful_delete_of_non_current_removes_only_that_item() {
        let commands = update(
            &mut state(),
            Message::ThreadDeleteCompleted {
                thread_id: "42".into(),
                is_current_chat: false,
                outcome: success(None),
            },
        );
        assert!(commands.contains(&Command::ClearBusy(BusyTarget::ThreadButtons {
            thread_id: "42".into()
        })));
        assert!(commands.contains(&Command::ShowToast {
            message: DEFAULT_DELETE_SUCCESS.into(),
            kind: ToastKind::Success,
        }));
        assert!(commands.contains(&Command::RemoveChatItem {
            thread_id: "42".into()
        }));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, Command::NavigateTo { .. })));
    }

    #[test]
    fn successful_delete_of_current_chat_navigates_instead_of_removing() {
        let commands = update(
            &mut state(),
            Message::ThreadDeleteCompleted {
                thread_id: "42".into(),
                is_current_chat: true,
                outcome: success(Some("Chat \"x\" deleted successfully")),
            },
        );
        assert!(commands.contains(&Command::NavigateTo {
            href: DASHBOARD_PATH.into()
        }));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, Command::RemoveChatItem { .. })));
        // Server-supplied message wins over the default.
        assert!(commands.contains(&Command::ShowToast {
            message: "Chat \"x\" deleted successfully".into(),
            kind: ToastKind::Success,
        }));
    }

    #[test]
    fn business_error_surfaces_server_text_and_restores_button() {
        let commands = update(
            &mut state(),
            Message::ThreadDeleteCompleted {
                thread_id: "42".into(),
                is_current_chat: false,
                outcome: DeleteOutcome::BusinessError {
                    error: "Chat not found".into(),
                },
            },
        );
        assert_eq!(
            commands[0],
            Command::ClearBusy(BusyTarget::ThreadButtons {
                thread_id: "42".into()
            })
        );
        assert!(commands.contains(&Command::ShowToast {
            message: "Error deleting chat: Chat not found".into(),
            kind: ToastKind::Error,
        }));
        assert!(api_commands(&commands).is_empty());
    }

    #[test]
    fn transport_error_shows_generic_message_and_restores_button() {
        let commands = update(
            &mut state(),
            Message::ThreadDeleteCompleted {
                thread_id: "42".into(),
                is_current_chat: false,
                outcome: DeleteOutcome::TransportError,
            },
        );
        assert!(commands.contains(&Command::ClearBusy(BusyTarget::ThreadButtons {
            thread_id: "42".into()
        })));
        assert!(commands.contains(&Command::ShowToast {
            message: format!("Error deleting chat: {}", NETWORK_ERROR),
            kind: ToastKind::Error,
        }));
    }

    #[test]
    fn clear_all_with_no_items_shows_info_toast_and_no_request() {
        let commands = update(&mut state(), Message::ClearAllRequested { chat_count: 0 });
        assert_eq!(
            commands,
            vec![Command::ShowToast {
                message: NO_CHATS_TO_DELETE.into(),
                kind: ToastKind::Info,
            }]
        );
    }

    #[test]
    fn clear_all_with_items_goes_busy_and_fires_one_request() {
        let commands = update(&mut state(), Message::ClearAllRequested { chat_count: 5 });
        assert_eq!(
            commands,
            vec![
                Command::SetBusy(BusyTarget::ClearAllButton),
                Command::ClearChatsApi,
            ]
        );
    }

    #[test]
    fn clear_all_success_schedules_exactly_one_delayed_reload() {
        let commands = update(
            &mut state(),
            Message::ClearAllCompleted {
                outcome: success(None),
            },
        );
        let reloads: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c, Command::ScheduleReload { .. }))
            .collect();
        assert_eq!(reloads.len(), 1);
        assert_eq!(
            reloads[0],
            &Command::ScheduleReload {
                delay_ms: RELOAD_DELAY_MS
            }
        );
        assert!(commands.contains(&Command::ShowToast {
            message: DEFAULT_CLEAR_SUCCESS.into(),
            kind: ToastKind::Success,
        }));
    }

    #[test]
    fn clear_all_failure_never_reloads() {
        for outcome in [
            DeleteOutcome::BusinessError {
                error: "nope".into(),
            },
            DeleteOutcome::TransportError,
        ] {
            let commands = update(&mut state(), Message::ClearAllCompleted { outcome });
            assert!(commands.contains(&Command::ClearBusy(BusyTarget::ClearAllButton)));
            assert!(!commands
                .iter()
                .any(|c| matches!(c, Command::ScheduleReload { .. })));
        }
    }

    #[test]
    fn selection_toggles_drive_toolbar_projection() {
        let mut st = state();
        let commands = update(
            &mut st,
            Message::ThreadSelectionToggled {
                thread_id: "a".into(),
                selected: true,
            },
        );
        match &commands[0] {
            Command::RenderBatchSelection { selected } => {
                assert!(selected.contains("a"));
                assert_eq!(selected.len(), 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let commands = update(
            &mut st,
            Message::ThreadSelectionToggled {
                thread_id: "a".into(),
                selected: false,
            },
        );
        match &commands[0] {
            Command::RenderBatchSelection { selected } => assert!(selected.is_empty()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn batch_delete_dispatches_every_selected_id_once() {
        let mut st = state();
        for id in ["a", "b", "c"] {
            update(
                &mut st,
                Message::ThreadSelectionToggled {
                    thread_id: id.into(),
                    selected: true,
                },
            );
        }
        let commands = update(&mut st, Message::BatchDeleteConfirmed);
        assert_eq!(
            commands,
            vec![Command::DeleteSelectedApi {
                thread_ids: vec!["a".into(), "b".into(), "c".into()]
            }]
        );
        // Selection is consumed by the dispatch.
        assert!(st.selected_threads.is_empty());
    }

    #[test]
    fn batch_delete_with_empty_selection_is_a_no_op() {
        assert!(update(&mut state(), Message::BatchDeleteConfirmed).is_empty());
    }

    #[test]
    fn batch_settled_reloads_once_and_reports_partial_failure() {
        let commands = update(
            &mut state(),
            Message::BatchDeleteSettled {
                total: 3,
                failed: 0,
            },
        );
        assert_eq!(commands, vec![Command::ScheduleReload { delay_ms: 0 }]);

        let commands = update(
            &mut state(),
            Message::BatchDeleteSettled {
                total: 3,
                failed: 2,
            },
        );
        assert_eq!(
            commands,
            vec![
                Command::ShowToast {
                    message: "2 of 3 conversations could not be deleted".into(),
                    kind: ToastKind::Error,
                },
                Command::ScheduleReload {
                    delay_ms: RELOAD_DELAY_MS
                },
            ]
        );
    }

    #[test]
    fn cancelling_batch_mode_clears_selection_and_tears_down_ui() {
        let mut st = state();
        st.batch_mode = true;
        update(
            &mut st,
            Message::ThreadSelectionToggled {
                thread_id: "a".into(),
                selected: true,
            },
        );
        let commands = update(&mut st, Message::BatchModeCancelled);
        assert_eq!(commands, vec![Command::TearDownBatchUi]);
        assert!(st.selected_threads.is_empty());
        assert!(!st.batch_mode);
    }
}
