//! Turns the dashboard figures into what the home view renders.

use api::ApiClient;
use types::{DashboardAnalytics, DashboardStats, OrderStatus, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub detail: Option<String>,
}

/// A chart-ready series: one label per value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Share of the largest value in the series, `0.0..=100.0`.
    pub percent: f64,
}

impl ChartSeries {
    fn new<'a, I>(title: &'static str, points: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let (labels, values) = points
            .into_iter()
            .map(|(label, value)| (label.to_string(), value))
            .unzip();
        Self {
            title,
            labels,
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn bars(&self) -> Vec<Bar> {
        let max = self.max();
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(label, &value)| Bar {
                label: label.clone(),
                value,
                percent: if max > 0.0 { value / max * 100.0 } else { 0.0 },
            })
            .collect()
    }
}

pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Total Users",
            value: stats.total_users.to_string(),
            detail: Some(format!(
                "{} business, {} verified",
                stats.business_users, stats.verified_users
            )),
        },
        StatCard {
            label: "Profiles",
            value: stats.total_profiles.to_string(),
            detail: Some(format!("{} active", stats.active_profiles)),
        },
        StatCard {
            label: "Orders",
            value: stats.total_orders.to_string(),
            detail: Some(format!("{} pending", stats.pending_orders)),
        },
        StatCard {
            label: "Revenue",
            value: format!("${:.2}", stats.total_revenue),
            detail: None,
        },
        StatCard {
            label: "Profile Views",
            value: stats.total_profile_views.to_string(),
            detail: None,
        },
        StatCard {
            label: "Unread Messages",
            value: stats.unread_messages.to_string(),
            detail: None,
        },
    ]
}

pub fn user_growth(analytics: &DashboardAnalytics) -> ChartSeries {
    ChartSeries::new(
        "New Users",
        analytics
            .user_growth
            .iter()
            .map(|p| (p.date.as_str(), p.count as f64)),
    )
}

pub fn order_volume(analytics: &DashboardAnalytics) -> ChartSeries {
    ChartSeries::new(
        "Orders",
        analytics
            .order_trend
            .iter()
            .map(|p| (p.date.as_str(), p.count as f64)),
    )
}

pub fn revenue(analytics: &DashboardAnalytics) -> ChartSeries {
    ChartSeries::new(
        "Revenue",
        analytics
            .order_trend
            .iter()
            .map(|p| (p.date.as_str(), p.revenue)),
    )
}

pub fn profile_views(analytics: &DashboardAnalytics) -> ChartSeries {
    ChartSeries::new(
        "Profile Views",
        analytics
            .profile_views
            .iter()
            .map(|p| (p.date.as_str(), p.views as f64)),
    )
}

/// Every status appears, in lifecycle order, even when the server left it
/// out.
pub fn orders_by_status(analytics: &DashboardAnalytics) -> ChartSeries {
    ChartSeries::new(
        "Orders by Status",
        OrderStatus::ALL.iter().map(|status| {
            let count: u64 = analytics
                .orders_by_status
                .iter()
                .filter(|s| s.status == *status)
                .map(|s| s.count)
                .sum();
            (status.label(), count as f64)
        }),
    )
}

pub fn top_profiles(analytics: &DashboardAnalytics) -> ChartSeries {
    ChartSeries::new(
        "Top Profiles",
        analytics
            .top_profiles
            .iter()
            .map(|p| (p.name.as_str(), p.view_count as f64)),
    )
}

/// Both dashboard requests, settled independently so one failing endpoint
/// leaves the other's figures in place.
#[derive(Debug)]
pub struct DashboardFetch {
    pub stats: Result<DashboardStats>,
    pub analytics: Result<DashboardAnalytics>,
}

pub async fn fetch_dashboard(client: &ApiClient) -> DashboardFetch {
    DashboardFetch {
        stats: client.dashboard_stats().await,
        analytics: client.dashboard_analytics().await,
    }
}

#[cfg(test)]
mod tests {
    use types::{CountPoint, OrderPoint, StatusCount};

    use super::*;

    #[test]
    fn empty_analytics_give_empty_series() {
        let analytics = DashboardAnalytics::default();
        assert!(user_growth(&analytics).is_empty());
        assert!(revenue(&analytics).is_empty());
        assert!(top_profiles(&analytics).bars().is_empty());
    }

    #[test]
    fn series_keep_labels_and_values_aligned() {
        let analytics = DashboardAnalytics {
            user_growth: vec![
                CountPoint { date: "2024-05-01".into(), count: 3 },
                CountPoint { date: "2024-05-02".into(), count: 6 },
            ],
            order_trend: vec![OrderPoint {
                date: "2024-05-01".into(),
                count: 2,
                revenue: 59.9,
            }],
            ..Default::default()
        };

        let growth = user_growth(&analytics);
        assert_eq!(growth.labels, vec!["2024-05-01", "2024-05-02"]);
        assert_eq!(growth.values, vec![3.0, 6.0]);
        assert_eq!(revenue(&analytics).values, vec![59.9]);
        assert_eq!(order_volume(&analytics).values, vec![2.0]);

        let bars = growth.bars();
        assert_eq!(bars[0].percent, 50.0);
        assert_eq!(bars[1].percent, 100.0);
    }

    #[test]
    fn missing_statuses_count_as_zero() {
        let analytics = DashboardAnalytics {
            orders_by_status: vec![StatusCount {
                status: OrderStatus::Shipped,
                count: 4,
            }],
            ..Default::default()
        };

        let series = orders_by_status(&analytics);
        assert_eq!(series.labels.len(), OrderStatus::ALL.len());
        let shipped = OrderStatus::ALL
            .iter()
            .position(|s| *s == OrderStatus::Shipped)
            .expect("shipped is a status");
        assert_eq!(series.values[shipped], 4.0);
        assert_eq!(series.values.iter().sum::<f64>(), 4.0);
    }

    #[test]
    fn zero_stats_still_render_every_card() {
        let cards = stat_cards(&DashboardStats::default());
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[3].value, "$0.00");
        assert!(cards.iter().all(|c| !c.value.is_empty()));
    }
}
