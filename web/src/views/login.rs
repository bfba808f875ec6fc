use api::ApiClient;
use dioxus::prelude::*;
use types::{Credentials, SessionStatus};
use ui::use_notifier;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let client = use_context::<ApiClient>();
    let mut notifier = use_notifier();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut signing_in = use_signal(|| false);

    if notifier.status() == SessionStatus::Authenticated && client.session().is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Tapcard" }
                    p { class: "login-subtitle", "Admin Dashboard" }
                }
                form {
                    onsubmit: move |e: FormEvent| {
                        e.prevent_default();
                        let credentials = Credentials::new(email.read().clone(), password.read().clone());
                        let client = client.clone();
                        spawn(async move {
                            signing_in.set(true);
                            match client.login(&credentials).await {
                                Ok(_) => {
                                    notifier.signed_in();
                                    notifier.success("Login successful!");
                                    navigator().push(Route::Dashboard {});
                                }
                                Err(err) => {
                                    notifier.report(&err, "Login failed");
                                    signing_in.set(false);
                                }
                            }
                        });
                    },
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            autocomplete: "username",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "form-input",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        disabled: *signing_in.read(),
                        if *signing_in.read() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { class: "login-title", "Page not found" }
                p { class: "text-muted", "Nothing lives at /{path}." }
                Link { to: Route::Dashboard {}, class: "btn btn-primary", "Back to dashboard" }
            }
        }
    }
}
