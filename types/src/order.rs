use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::Filters;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDesign {
    pub template_name: Option<String>,
    pub primary_color: Option<String>,
    pub logo_url: Option<String>,
    pub front_text: Option<String>,
    pub back_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub card_type: String,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub card_design: CardDesign,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

fn one() -> u32 {
    1
}

impl Order {
    pub fn formatted_total(&self) -> String {
        format!("${:.2}", self.total_amount)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilters {
    pub status: Option<OrderStatus>,
}

impl Filters for OrderFilters {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.status
            .map(|status| ("status", status.as_str().to_string()))
            .into_iter()
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub order_status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_order_with_sparse_design() {
        let order: Order = serde_json::from_value(json!({
            "_id": "o1",
            "orderNumber": "ORD-1001",
            "customerName": "Anna Berg",
            "customerEmail": "anna@example.com",
            "cardType": "metal",
            "orderStatus": "shipped",
            "totalAmount": 49.5,
            "cardDesign": { "primaryColor": "#000000" }
        }))
        .unwrap();

        assert_eq!(order.order_status, OrderStatus::Shipped);
        assert_eq!(order.quantity, 1);
        assert_eq!(order.card_design.primary_color.as_deref(), Some("#000000"));
        assert_eq!(order.formatted_total(), "$49.50");
    }

    #[test]
    fn status_update_body() {
        let body = serde_json::to_value(OrderStatusUpdate {
            order_status: OrderStatus::Cancelled,
        })
        .unwrap();
        assert_eq!(body, json!({ "orderStatus": "cancelled" }));
    }

    #[test]
    fn status_round_trips_through_select_values() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("lost"), None);
    }
}
