use dioxus::prelude::*;
use types::DocumentKind;
use ui::{DocumentEditor, ModalFrame, NoticeKind, use_document_editor};

use super::components::format_date;

#[component]
pub fn Terms() -> Element {
    rsx! { DocumentPage { kind: DocumentKind::Terms } }
}

#[component]
pub fn Privacy() -> Element {
    rsx! { DocumentPage { kind: DocumentKind::Privacy } }
}

#[component]
fn DocumentPage(kind: DocumentKind) -> Element {
    let handle = use_document_editor(kind);
    let mut state = handle.state;
    let editor = state.read();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "{kind.title()}" }
                    p { class: "page-subtitle", "The version shown to users of the public site." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: editor.is_loading(),
                        onclick: move |_| state.write().open_dialog(),
                        if editor.document().is_some() { "Edit" } else { "Create" }
                    }
                }
            }

            if editor.is_loading() {
                div { class: "loading", "Loading..." }
            } else if let Some(document) = editor.document() {
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "{document.title}" }
                        if document.is_active {
                            span { class: "badge badge-success", "Active" }
                        } else {
                            span { class: "badge badge-muted", "Inactive" }
                        }
                    }
                    div { class: "card-body",
                        div { class: "document-meta",
                            span { "Version {document.version}" }
                            if !document.effective_date.is_empty() {
                                span { "Effective {document.effective_date}" }
                            }
                            if !document.last_modified_by.is_empty() {
                                span { "Last modified by {document.last_modified_by}" }
                            }
                            span { "Updated {format_date(document.updated_at)}" }
                        }
                        if !document.changes_summary.is_empty() {
                            p { class: "text-muted", "{document.changes_summary}" }
                        }
                        div { class: "document-content", "{document.content}" }
                    }
                }
            } else {
                div { class: "empty-state",
                    p { "No {kind.title()} has been published yet." }
                }
            }

            if editor.is_dialog_open() {
                ModalFrame {
                    title: format!("Edit {}", kind.title()),
                    busy: editor.is_saving(),
                    on_close: move |_| state.write().close_dialog(),
                    DocumentForm { state, on_save: move |_| handle.save() }
                }
            }
        }
    }
}

#[component]
fn DocumentForm(state: Signal<DocumentEditor>, on_save: EventHandler<()>) -> Element {
    let mut state = state;
    let (form, saving, banner) = {
        let editor = state.read();
        (editor.form().clone(), editor.is_saving(), editor.banner().cloned())
    };

    rsx! {
        div { class: "modal-body",
            if let Some(banner) = banner {
                div {
                    class: match banner.kind {
                        NoticeKind::Success => "banner banner-success",
                        NoticeKind::Error => "banner banner-error",
                    },
                    "{banner.message}"
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "doc_title", "Title *" }
                input {
                    id: "doc_title",
                    class: "form-input",
                    r#type: "text",
                    value: "{form.title}",
                    oninput: move |e| state.write().form_mut().title = e.value(),
                }
            }
            div { class: "form-row",
                div { class: "form-group",
                    label { class: "form-label", r#for: "doc_version", "Version *" }
                    input {
                        id: "doc_version",
                        class: "form-input",
                        r#type: "text",
                        value: "{form.version}",
                        oninput: move |e| state.write().form_mut().version = e.value(),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "doc_effective", "Effective Date" }
                    input {
                        id: "doc_effective",
                        class: "form-input",
                        r#type: "date",
                        value: "{form.effective_date}",
                        oninput: move |e| state.write().form_mut().effective_date = e.value(),
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "doc_modified_by", "Last Modified By" }
                input {
                    id: "doc_modified_by",
                    class: "form-input",
                    r#type: "text",
                    value: "{form.last_modified_by}",
                    oninput: move |e| state.write().form_mut().last_modified_by = e.value(),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "doc_changes", "Summary of Changes" }
                input {
                    id: "doc_changes",
                    class: "form-input",
                    r#type: "text",
                    value: "{form.changes_summary}",
                    oninput: move |e| state.write().form_mut().changes_summary = e.value(),
                }
            }
            label { class: "checkbox-label",
                input {
                    r#type: "checkbox",
                    checked: form.is_active,
                    onchange: move |e| state.write().form_mut().is_active = e.checked(),
                }
                span { "Active" }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "doc_content", "Content *" }
                textarea {
                    id: "doc_content",
                    class: "form-input document-editor",
                    rows: "18",
                    value: "{form.content}",
                    oninput: move |e| state.write().form_mut().content = e.value(),
                }
            }
        }
        div { class: "modal-footer",
            button {
                class: "btn btn-secondary",
                disabled: saving,
                onclick: move |_| state.write().close_dialog(),
                "Cancel"
            }
            button {
                class: "btn btn-primary",
                disabled: saving,
                onclick: move |_| on_save.call(()),
                if saving { "Saving..." } else { "Save" }
            }
        }
    }
}
