use dioxus::prelude::*;
use types::{PasswordReset, Role, User, UserForm};
use ui::{
    ConfirmDialog, Modal, ModalFrame, MutationMessages, PaginationControls, SearchBox,
    StatusBadge, TableMessage, use_resource_list,
};

use super::components::{UserFormFields, format_date};
use crate::config::Config;

#[derive(Clone, PartialEq)]
struct UserDraft {
    /// `None` while creating.
    user_id: Option<String>,
    form: UserForm,
}

#[derive(Clone, PartialEq)]
struct ResetDraft {
    user_id: String,
    name: String,
    reset: PasswordReset,
}

#[component]
pub fn Users() -> Element {
    let config = use_context::<Config>();
    let list = use_resource_list::<api::Users>(config.page_size);
    let mut editing = use_signal(Modal::<UserDraft>::default);
    let mut resetting = use_signal(Modal::<ResetDraft>::default);
    let mut deleting = use_signal(Modal::<User>::default);

    let save_user = move |_: MouseEvent| {
        let Some(draft) = editing.write().submit() else {
            return;
        };
        let client = list.client();
        let messages = match draft.user_id {
            Some(_) => MutationMessages::new("User updated successfully!", "Failed to update user"),
            None => MutationMessages::new("User created successfully!", "Failed to create user"),
        };
        list.mutate(
            async move {
                match &draft.user_id {
                    Some(id) => client.update_user(id, &draft.form).await,
                    None => client.create_user(&draft.form).await,
                }
            },
            messages,
            move |ok| editing.write().finish(ok),
        );
    };

    let reset_password = move |_: MouseEvent| {
        let Some(draft) = resetting.write().submit() else {
            return;
        };
        let client = list.client();
        list.mutate(
            async move { client.reset_user_password(&draft.user_id, &draft.reset).await },
            MutationMessages::new("Password reset successfully!", "Failed to reset password"),
            move |ok| resetting.write().finish(ok),
        );
    };

    let delete_user = move |_: ()| {
        let Some(user) = deleting.write().submit() else {
            return;
        };
        let client = list.client();
        list.mutate(
            async move { client.delete_user(&user.id).await },
            MutationMessages::new("User deleted successfully!", "Failed to delete user"),
            move |ok| deleting.write().finish(ok),
        );
    };

    let state = list.state.read();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "User Management" }
                    p { class: "page-subtitle", "Create, edit and deactivate platform accounts." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| editing.write().open(UserDraft {
                            user_id: None,
                            form: UserForm::for_create(),
                        }),
                        "Create User"
                    }
                }
            }

            div { class: "toolbar",
                SearchBox {
                    value: state.raw_search().to_string(),
                    placeholder: "Search by name or email",
                    on_input: move |text| list.set_search(text),
                }
                select {
                    class: "form-input",
                    value: state.filters().role.map(|r| r.as_str()).unwrap_or_default(),
                    onchange: move |e| {
                        let role = Role::parse(&e.value());
                        list.change_filters(|f| f.role = role);
                    },
                    option { value: "", "All roles" }
                    for role in Role::ALL {
                        option { value: role.as_str(), "{role.label()}" }
                    }
                }
            }

            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Role" }
                                th { "Verified" }
                                th { "Status" }
                                th { "Joined" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            if state.is_loading() && state.items().is_empty() {
                                TableMessage { columns: 7, message: "Loading users..." }
                            } else if state.items().is_empty() {
                                TableMessage { columns: 7, message: "No users found" }
                            }
                            for user in state.items().iter().cloned() {
                                {
                                    let edit_target = UserDraft {
                                        user_id: Some(user.id.clone()),
                                        form: UserForm::from_user(&user),
                                    };
                                    let reset_target = ResetDraft {
                                        user_id: user.id.clone(),
                                        name: user.full_name(),
                                        reset: PasswordReset::default(),
                                    };
                                    let toggle_id = user.id.clone();
                                    let toggling = state.is_row_busy(&user.id);
                                    let delete_target = user.clone();
                                    let (status, tone) = if user.is_active {
                                        ("Active", "success")
                                    } else {
                                        ("Inactive", "muted")
                                    };
                                    rsx! {
                                        tr { key: "{user.id}",
                                            td {
                                                div { class: "user-cell",
                                                    span { class: "avatar", "{user.initial()}" }
                                                    "{user.full_name()}"
                                                }
                                            }
                                            td { "{user.email}" }
                                            td { StatusBadge { label: user.role.label(), tone: "info" } }
                                            td { if user.is_verified { "Yes" } else { "No" } }
                                            td { StatusBadge { label: status, tone } }
                                            td { "{format_date(user.created_at)}" }
                                            td { class: "table-actions",
                                                button {
                                                    class: "btn btn-link",
                                                    onclick: move |_| editing.write().open(edit_target.clone()),
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn btn-link",
                                                    disabled: toggling,
                                                    onclick: move |_| {
                                                        let client = list.client();
                                                        let id = toggle_id.clone();
                                                        list.mutate_row(
                                                            toggle_id.clone(),
                                                            async move { client.toggle_user_status(&id).await },
                                                            MutationMessages::new(
                                                                "User status updated successfully!",
                                                                "Failed to update user status",
                                                            ),
                                                        );
                                                    },
                                                    if user.is_active { "Deactivate" } else { "Activate" }
                                                }
                                                button {
                                                    class: "btn btn-link",
                                                    onclick: move |_| resetting.write().open(reset_target.clone()),
                                                    "Reset Password"
                                                }
                                                button {
                                                    class: "btn btn-link btn-link-danger",
                                                    onclick: move |_| deleting.write().open(delete_target.clone()),
                                                    "Delete"
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

            if let Some(draft) = editing.read().target().cloned() {
                ModalFrame {
                    title: if draft.user_id.is_some() { "Edit User" } else { "Create User" },
                    busy: editing.read().is_busy(),
                    on_close: move |_| editing.write().close(),
                    div { class: "modal-body",
                        UserFormFields {
                            form: draft.form.clone(),
                            show_password: draft.user_id.is_none(),
                            on_change: move |form| {
                                if let Some(draft) = editing.write().target_mut() {
                                    draft.form = form;
                                }
                            },
                        }
                    }
                    div { class: "modal-footer",
                        button {
                            class: "btn btn-secondary",
                            disabled: editing.read().is_busy(),
                            onclick: move |_| editing.write().close(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: editing.read().is_busy(),
                            onclick: save_user,
                            if editing.read().is_busy() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }

            if let Some(draft) = resetting.read().target().cloned() {
                ModalFrame {
                    title: "Reset Password",
                    busy: resetting.read().is_busy(),
                    small: true,
                    on_close: move |_| resetting.write().close(),
                    div { class: "modal-body",
                        p { "Set a new password for " strong { "{draft.name}" } "." }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "new_password", "New Password" }
                            input {
                                id: "new_password",
                                class: "form-input",
                                r#type: "password",
                                value: "{draft.reset.new_password}",
                                oninput: move |e| {
                                    if let Some(draft) = resetting.write().target_mut() {
                                        draft.reset.new_password = e.value();
                                    }
                                },
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "confirm_password", "Confirm Password" }
                            input {
                                id: "confirm_password",
                                class: "form-input",
                                r#type: "password",
                                value: "{draft.reset.confirm_password}",
                                oninput: move |e| {
                                    if let Some(draft) = resetting.write().target_mut() {
                                        draft.reset.confirm_password = e.value();
                                    }
                                },
                            }
                        }
                    }
                    div { class: "modal-footer",
                        button {
                            class: "btn btn-secondary",
                            disabled: resetting.read().is_busy(),
                            onclick: move |_| resetting.write().close(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: resetting.read().is_busy(),
                            onclick: reset_password,
                            if resetting.read().is_busy() { "Resetting..." } else { "Reset Password" }
                        }
                    }
                }
            }

            if let Some(user) = deleting.read().target().cloned() {
                ConfirmDialog {
                    title: "Delete User",
                    message: format!("Are you sure you want to delete {}?", user.full_name()),
                    confirm_label: "Delete",
                    busy: deleting.read().is_busy(),
                    on_close: move |_| deleting.write().close(),
                    on_confirm: delete_user,
                }
            }
        }
    }
}
