use dioxus::prelude::*;

use crate::{NoticeKind, use_notifier};

/// Renders the toasts held by the [`crate::Notifier`]. Clicking one dismisses it.
#[component]
pub fn ToastStack() -> Element {
    let mut notifier = use_notifier();
    let notices = notifier.notices();

    rsx! {
        div { class: "toast-stack",
            for toast in notices.read().toasts().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: match toast.notice.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    },
                    onclick: move |_| notifier.dismiss(toast.id),
                    "{toast.notice.message}"
                }
            }
        }
    }
}

#[component]
pub fn PaginationControls(
    page: u32,
    last_page: u32,
    total: u64,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let last_page = last_page.max(1);

    rsx! {
        div { class: "pagination",
            span { class: "pagination-info", "Page {page} of {last_page} ({total} total)" }
            div { class: "pagination-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: page <= 1,
                    onclick: move |_| on_previous.call(()),
                    "Previous"
                }
                button {
                    class: "btn btn-secondary",
                    disabled: page >= last_page,
                    onclick: move |_| on_next.call(()),
                    "Next"
                }
            }
        }
    }
}

#[component]
pub fn SearchBox(
    #[props(into)] value: String,
    #[props(into)] placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            class: "form-input search-input",
            r#type: "search",
            placeholder,
            value,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}

/// Overlay, header and close button shared by every dialog.
#[component]
pub fn ModalFrame(
    #[props(into)] title: String,
    #[props(default)] busy: bool,
    #[props(default)] small: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !busy { on_close.call(()) },
            div { class: if small { "modal modal-sm" } else { "modal" },
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    if !busy {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn ConfirmDialog(
    #[props(into)] title: String,
    #[props(into)] message: String,
    #[props(into)] confirm_label: String,
    busy: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        ModalFrame { title, busy, small: true, on_close,
            div { class: "modal-body",
                p { "{message}" }
                p { class: "text-muted", "This action cannot be undone." }
            }
            div { class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    disabled: busy,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(()),
                    if busy { "Working..." } else { "{confirm_label}" }
                }
            }
        }
    }
}

#[component]
pub fn StatusBadge(#[props(into)] label: String, tone: &'static str) -> Element {
    rsx! {
        span { class: "badge badge-{tone}", "{label}" }
    }
}

/// A table body row spanning every column, for loading and empty states.
#[component]
pub fn TableMessage(columns: usize, #[props(into)] message: String) -> Element {
    rsx! {
        tr {
            td { class: "table-message", colspan: "{columns}", "{message}" }
        }
    }
}
