use api::ApiClient;
use dioxus::prelude::*;
use types::{Profile, ProfileType};
use ui::{
    ModalFrame, PaginationControls, SearchBox, StatusBadge, TableMessage, use_notifier,
    use_resource_list,
};

use super::components::format_date;
use crate::config::Config;

#[component]
pub fn Profiles() -> Element {
    let config = use_context::<Config>();
    let client = use_context::<ApiClient>();
    let list = use_resource_list::<api::Profiles>(config.page_size);
    let mut notifier = use_notifier();
    let mut viewing = use_signal(|| None::<Profile>);
    let mut opening = use_signal(|| None::<String>);

    // Details come from the item endpoint; the listing may carry a summary.
    let open_profile = move |profile_id: String| {
        let client = client.clone();
        spawn(async move {
            opening.set(Some(profile_id.clone()));
            match client.get_profile(&profile_id).await {
                Ok(profile) => viewing.set(Some(profile)),
                Err(err) => notifier.report(&err, "Failed to fetch profile"),
            }
            opening.set(None);
        });
    };

    let state = list.state.read();
    let active_filter = match state.filters().is_active {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "NFC Profiles" }
                    p { class: "page-subtitle", "Browse the digital business cards created on the platform." }
                }
            }

            div { class: "toolbar",
                SearchBox {
                    value: state.raw_search().to_string(),
                    placeholder: "Search by name or company",
                    on_input: move |text| list.set_search(text),
                }
                select {
                    class: "form-input",
                    value: state.filters().profile_type.map(|t| t.as_str()).unwrap_or_default(),
                    onchange: move |e| {
                        let kind = ProfileType::parse(&e.value());
                        list.change_filters(|f| f.profile_type = kind);
                    },
                    option { value: "", "All types" }
                    for kind in ProfileType::ALL {
                        option { value: kind.as_str(), "{kind.label()}" }
                    }
                }
                select {
                    class: "form-input",
                    value: active_filter,
                    onchange: move |e| {
                        let active = e.value().parse::<bool>().ok();
                        list.change_filters(|f| f.is_active = active);
                    },
                    option { value: "", "Any status" }
                    option { value: "true", "Active" }
                    option { value: "false", "Inactive" }
                }
            }

            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Type" }
                                th { "Company" }
                                th { "Owner" }
                                th { "Views" }
                                th { "Status" }
                                th { "Created" }
                                th { "" }
                            }
                        }
                        tbody {
                            if state.is_loading() && state.items().is_empty() {
                                TableMessage { columns: 8, message: "Loading profiles..." }
                            } else if state.items().is_empty() {
                                TableMessage { columns: 8, message: "No profiles found" }
                            }
                            for profile in state.items().iter().cloned() {
                                {
                                    let profile_id = profile.id.clone();
                                    let is_opening = opening.read().as_deref() == Some(profile.id.as_str());
                                    let owner = profile
                                        .user
                                        .as_ref()
                                        .map(|u| u.display())
                                        .unwrap_or_else(|| "-".into());
                                    let open_profile = open_profile.clone();
                                    rsx! {
                                        tr { key: "{profile.id}",
                                            td {
                                                div { "{profile.name}" }
                                                if let Some(title) = &profile.title {
                                                    div { class: "text-muted text-sm", "{title}" }
                                                }
                                            }
                                            td { "{profile.profile_type.label()}" }
                                            td { {profile.company.clone().unwrap_or_else(|| "-".into())} }
                                            td { "{owner}" }
                                            td { "{profile.view_count}" }
                                            td {
                                                if profile.is_active {
                                                    StatusBadge { label: "Active", tone: "success" }
                                                } else {
                                                    StatusBadge { label: "Inactive", tone: "muted" }
                                                }
                                            }
                                            td { "{format_date(profile.created_at)}" }
                                            td {
                                                button {
                                                    class: "btn btn-link",
                                                    disabled: is_opening,
                                                    onclick: move |_| open_profile(profile_id.clone()),
                                                    if is_opening { "Opening..." } else { "View" }
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

            if let Some(profile) = viewing.read().clone() {
                ModalFrame {
                    title: profile.name.clone(),
                    on_close: move |_| viewing.set(None),
                    ProfileDetails { profile }
                }
            }
        }
    }
}

#[component]
fn ProfileDetails(profile: Profile) -> Element {
    rsx! {
        div { class: "modal-body",
            div { class: "form-group",
                span { class: "form-label", "Type" }
                div { class: "form-value", "{profile.profile_type.label()}" }
            }
            if let Some(company) = &profile.company {
                div { class: "form-group",
                    span { class: "form-label", "Company" }
                    div { class: "form-value", "{company}" }
                }
            }
            if let Some(owner) = &profile.user {
                div { class: "form-group",
                    span { class: "form-label", "Owner" }
                    div { class: "form-value", "{owner.display()}" }
                }
            }
            div { class: "form-group",
                span { class: "form-label", "Views" }
                div { class: "form-value", "{profile.view_count}" }
            }

            div { class: "divider" }

            h3 { class: "section-header", "Social Links" }
            if profile.social_links.is_empty() {
                p { class: "text-muted", "No social links" }
            }
            ul { class: "link-list",
                for link in profile.social_links.iter() {
                    li {
                        span { class: "form-label", "{link.platform}" }
                        a { href: "{link.url}", target: "_blank", rel: "noopener", "{link.url}" }
                    }
                }
            }
        }
    }
}
