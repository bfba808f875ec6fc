use api::{ApiClient, Session};
use dioxus::prelude::*;
use types::SessionStatus;
use ui::{ToastStack, use_notifier, use_notifier_provider};

mod config;
mod storage;
mod views;

use config::Config;
use storage::BrowserTokenStore;
use views::{Dashboard, Login, Messages, NotFound, Orders, Privacy, Profiles, Terms, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthenticatedLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/orders")]
        Orders {},
        #[route("/profiles")]
        Profiles {},
        #[route("/messages")]
        Messages {},
        #[route("/terms")]
        Terms {},
        #[route("/privacy")]
        Privacy {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("invalid configuration: {err:#}");
            return;
        }
    };
    tracing::info!(api = %config.api_base_url, page_size = config.page_size, "starting dashboard");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<Config>();
    let client = use_context_provider(|| {
        ApiClient::new(config.api_base_url.clone(), Session::new(BrowserTokenStore))
    });
    use_notifier_provider(client.session().status());

    rsx! {
        document::Title { "Tapcard Admin" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
        ToastStack {}
    }
}

/// Leaves the single-page app entirely so no in-memory state survives.
fn hard_redirect(path: &str) {
    let redirected = web_sys::window()
        .map(|window| window.location().set_href(path).is_ok())
        .unwrap_or(false);
    if !redirected {
        navigator().replace(Route::Login {});
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

#[component]
fn AuthenticatedLayout() -> Element {
    let client = use_context::<ApiClient>();
    let mut notifier = use_notifier();

    // The notifier flips to anonymous as soon as any request is rejected.
    if notifier.status() == SessionStatus::Anonymous || !client.session().is_authenticated() {
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "loading", "Redirecting to login..." }
        };
    }

    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    span { class: "sidebar-logo", "Tapcard Admin" }
                }
                nav { class: "sidebar-nav",
                    NavLink { to: Route::Dashboard {}, "Dashboard" }
                    NavLink { to: Route::Users {}, "Users" }
                    NavLink { to: Route::Orders {}, "Orders" }
                    NavLink { to: Route::Profiles {}, "NFC Profiles" }
                    NavLink { to: Route::Messages {}, "Messages" }
                    NavLink { to: Route::Terms {}, "Terms & Conditions" }
                    NavLink { to: Route::Privacy {}, "Privacy Policy" }
                }
                div { class: "sidebar-footer",
                    button {
                        class: "sidebar-logout",
                        onclick: move |_| {
                            client.logout();
                            notifier.signed_out();
                            hard_redirect("/login");
                        },
                        "Sign out"
                    }
                }
            }
            main { class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
