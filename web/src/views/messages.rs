use dioxus::prelude::*;
use types::{ContactMessage, ReplyForm};
use ui::{
    Modal, ModalFrame, MutationMessages, PaginationControls, SearchBox, TableMessage,
    use_resource_list,
};

use super::components::format_date;
use crate::config::Config;

#[derive(Clone, PartialEq)]
struct ReplyDraft {
    message: ContactMessage,
    form: ReplyForm,
}

#[component]
pub fn Messages() -> Element {
    let config = use_context::<Config>();
    let list = use_resource_list::<api::ContactMessages>(config.page_size);
    let mut replying = use_signal(Modal::<ReplyDraft>::default);

    let send_reply = move |_: MouseEvent| {
        let Some(draft) = replying.write().submit() else {
            return;
        };
        let client = list.client();
        list.mutate(
            async move { client.reply_to_message(&draft.message, &draft.form).await },
            MutationMessages::new("Reply sent successfully!", "Failed to send reply"),
            move |ok| replying.write().finish(ok),
        );
    };

    let state = list.state.read();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Contact Messages" }
                    p { class: "page-subtitle", "Questions sent through the contact form." }
                }
            }

            div { class: "toolbar",
                SearchBox {
                    value: state.raw_search().to_string(),
                    placeholder: "Search messages",
                    on_input: move |text| list.set_search(text),
                }
            }

            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "From" }
                                th { "Subject" }
                                th { "Message" }
                                th { "Received" }
                                th { "" }
                            }
                        }
                        tbody {
                            if state.is_loading() && state.items().is_empty() {
                                TableMessage { columns: 5, message: "Loading messages..." }
                            } else if state.items().is_empty() {
                                TableMessage { columns: 5, message: "No messages" }
                            }
                            for message in state.items().iter().cloned() {
                                {
                                    let draft = ReplyDraft {
                                        form: ReplyForm::for_message(&message),
                                        message: message.clone(),
                                    };
                                    rsx! {
                                        tr { key: "{message.id}",
                                            td {
                                                div { "{message.name}" }
                                                div { class: "text-muted text-sm", "{message.email}" }
                                            }
                                            td { {message.subject.clone().unwrap_or_else(|| "(no subject)".into())} }
                                            td { class: "message-preview", "{message.message}" }
                                            td { "{format_date(message.created_at)}" }
                                            td {
                                                button {
                                                    class: "btn btn-link",
                                                    onclick: move |_| replying.write().open(draft.clone()),
                                                    "Reply"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                PaginationControls {
                    page: state.page(),
                    last_page: state.last_page(),
                    total: state.pagination().total,
                    on_previous: move |_| list.previous_page(),
                    on_next: move |_| list.next_page(),
                }
            }

            if let Some(draft) = replying.read().target().cloned() {
                ModalFrame {
                    title: format!("Reply to {}", draft.message.name),
                    busy: replying.read().is_busy(),
                    on_close: move |_| replying.write().close(),
                    div { class: "modal-body",
                        blockquote { class: "quoted-message", "{draft.message.message}" }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "reply_subject", "Subject" }
                            input {
                                id: "reply_subject",
                                class: "form-input",
                                r#type: "text",
                                value: "{draft.form.subject}",
                                oninput: move |e| {
                                    if let Some(draft) = replying.write().target_mut() {
                                        draft.form.subject = e.value();
                                    }
                                },
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "reply_body", "Reply" }
                            textarea {
                                id: "reply_body",
                                class: "form-input",
                                rows: "6",
                                value: "{draft.form.body}",
                                oninput: move |e| {
                                    if let Some(draft) = replying.write().target_mut() {
                                        draft.form.body = e.value();
                                    }
                                },
                            }
                        }
                    }
                    div { class: "modal-footer",
                        button {
                            class: "btn btn-secondary",
                            disabled: replying.read().is_busy(),
                            onclick: move |_| replying.write().close(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: replying.read().is_busy(),
                            onclick: send_reply,
                            if replying.read().is_busy() { "Sending..." } else { "Send Reply" }
                        }
                    }
                }
            }
        }
    }
}
