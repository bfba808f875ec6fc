//! Aggregate figures for the home view. Every field is optional on the wire
//! and defaults to zero or empty.

use serde::{Deserialize, Serialize};

use crate::OrderStatus;

mod nullable {
    use serde::{Deserialize, Deserializer};

    /// Treats an explicit `null` like a missing field.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub total_users: u64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub business_users: u64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub verified_users: u64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub total_profiles: u64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub active_profiles: u64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub total_orders: u64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub pending_orders: u64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub total_profile_views: u64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub unread_messages: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountPoint {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub date: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPoint {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub date: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub count: u64,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewPoint {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub date: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopProfile {
    #[serde(alias = "_id", deserialize_with = "nullable::deserialize")]
    pub id: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub name: String,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub view_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardAnalytics {
    #[serde(deserialize_with = "nullable::deserialize")]
    pub user_growth: Vec<CountPoint>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub order_trend: Vec<OrderPoint>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub profile_views: Vec<ViewPoint>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub orders_by_status: Vec<StatusCount>,
    #[serde(deserialize_with = "nullable::deserialize")]
    pub top_profiles: Vec<TopProfile>,
}
