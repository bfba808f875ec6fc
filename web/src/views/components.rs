use dioxus::prelude::*;
use jiff::Timestamp;
use types::{OrderStatus, Role, UserForm};

pub fn format_date(timestamp: Option<Timestamp>) -> String {
    timestamp
        .map(|t| t.strftime("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn order_tone(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "warning",
        OrderStatus::Confirmed | OrderStatus::Processing => "info",
        OrderStatus::Shipped | OrderStatus::Delivered => "success",
        OrderStatus::Cancelled => "danger",
    }
}

/// The create/edit user fields. `show_password` is only set when creating.
#[component]
pub fn UserFormFields(
    form: UserForm,
    show_password: bool,
    on_change: EventHandler<UserForm>,
) -> Element {
    let base = form.clone();
    let edit = move |apply: fn(&mut UserForm, String)| {
        let base = base.clone();
        move |e: FormEvent| {
            let mut next = base.clone();
            apply(&mut next, e.value());
            on_change.call(next);
        }
    };

    rsx! {
        div { class: "form-row",
            div { class: "form-group",
                label { class: "form-label", r#for: "first_name", "First Name *" }
                input {
                    id: "first_name",
                    class: "form-input",
                    r#type: "text",
                    value: "{form.first_name}",
                    oninput: edit(|f, v| f.first_name = v),
                }
            }
            div { class: "form-group",
                label { class: "form-label", r#for: "last_name", "Last Name *" }
                input {
                    id: "last_name",
                    class: "form-input",
                    r#type: "text",
                    value: "{form.last_name}",
                    oninput: edit(|f, v| f.last_name = v),
                }
            }
        }
        div { class: "form-group",
            label { class: "form-label", r#for: "email", "Email *" }
            input {
                id: "email",
                class: "form-input",
                r#type: "email",
                placeholder: "e.g. jsmith@example.com",
                value: "{form.email}",
                oninput: edit(|f, v| f.email = v),
            }
        }
        div { class: "form-group",
            label { class: "form-label", r#for: "phone", "Phone" }
            input {
                id: "phone",
                class: "form-input",
                r#type: "tel",
                value: form.phone.clone().unwrap_or_default(),
                oninput: edit(|f, v| f.phone = Some(v)),
            }
        }
        div { class: "form-group",
            label { class: "form-label", r#for: "role", "Role" }
            select {
                id: "role",
                class: "form-input",
                value: form.role.as_str(),
                onchange: edit(|f, v| {
                    if let Some(role) = Role::parse(&v) {
                        f.role = role;
                    }
                }),
                for role in Role::ALL {
                    option { value: role.as_str(), selected: role == form.role, "{role.label()}" }
                }
            }
        }
        label { class: "checkbox-label",
            input {
                r#type: "checkbox",
                checked: form.is_verified,
                onchange: {
                    let base = form.clone();
                    move |e: FormEvent| {
                        let mut next = base.clone();
                        next.is_verified = e.checked();
                        on_change.call(next);
                    }
                },
            }
            span { "Verified" }
        }
        if show_password {
            div { class: "form-group",
                label { class: "form-label", r#for: "password", "Password *" }
                input {
                    id: "password",
                    class: "form-input",
                    r#type: "password",
                    value: form.password.clone().unwrap_or_default(),
                    oninput: edit(|f, v| f.password = Some(v)),
                }
            }
        }
    }
}
