use api::ApiClient;
use dioxus::prelude::*;
use types::{DashboardAnalytics, DashboardStats};
use ui::{ChartSeries, use_notifier};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let client = use_context::<ApiClient>();
    let mut notifier = use_notifier();
    let mut stats = use_signal(DashboardStats::default);
    let mut analytics = use_signal(DashboardAnalytics::default);
    let mut loading = use_signal(|| true);

    // Fetch once on mount
    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            let fetched = ui::fetch_dashboard(&client).await;
            match fetched.stats {
                Ok(s) => stats.set(s),
                Err(e) => notifier.report(&e, "Failed to fetch dashboard statistics"),
            }
            match fetched.analytics {
                Ok(a) => analytics.set(a),
                Err(e) => notifier.report(&e, "Failed to fetch dashboard analytics"),
            }
            loading.set(false);
        });
    });

    let cards = ui::stat_cards(&stats.read());
    let charts = {
        let analytics = analytics.read();
        [
            ui::user_growth(&analytics),
            ui::order_volume(&analytics),
            ui::revenue(&analytics),
            ui::profile_views(&analytics),
            ui::orders_by_status(&analytics),
            ui::top_profiles(&analytics),
        ]
    };

    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Dashboard" }
                p { class: "page-subtitle", "Platform activity at a glance." }
            }

            if *loading.read() {
                div { class: "loading", "Loading dashboard..." }
            } else {
                div { class: "stat-grid",
                    for card in cards {
                        div { class: "stat-card", key: "{card.label}",
                            div { class: "stat-card-label", "{card.label}" }
                            div { class: "stat-card-value", "{card.value}" }
                            if let Some(detail) = card.detail {
                                div { class: "stat-card-detail", "{detail}" }
                            }
                        }
                    }
                }
                div { class: "chart-grid",
                    for series in charts {
                        BarChart { key: "{series.title}", series }
                    }
                }
                div { class: "dashboard-grid",
                    Link { to: Route::Users {}, class: "dashboard-card",
                        h3 { class: "dashboard-card-title", "Manage Users" }
                        p { class: "dashboard-card-desc", "Create accounts, reset passwords and deactivate users." }
                    }
                    Link { to: Route::Orders {}, class: "dashboard-card",
                        h3 { class: "dashboard-card-title", "Process Orders" }
                        p { class: "dashboard-card-desc", "Move card orders from pending to delivered." }
                    }
                    Link { to: Route::Messages {}, class: "dashboard-card",
                        h3 { class: "dashboard-card-title", "Answer Messages" }
                        p { class: "dashboard-card-desc", "Reply to questions from the contact form." }
                    }
                }
            }
        }
    }
}

#[component]
fn BarChart(series: ChartSeries) -> Element {
    rsx! {
        div { class: "card chart-card",
            div { class: "card-header",
                h2 { class: "card-title", "{series.title}" }
            }
            div { class: "card-body",
                if series.is_empty() {
                    p { class: "text-muted", "No data yet" }
                }
                for bar in series.bars() {
                    div { class: "bar-row",
                        span { class: "bar-label", "{bar.label}" }
                        div { class: "bar-track",
                            div { class: "bar-fill", style: "width: {bar.percent:.1}%" }
                        }
                        span { class: "bar-value", "{bar.value}" }
                    }
                }
            }
        }
    }
}
