use reqwest::Method;
use types::{OrderStatus, OrderStatusUpdate, Result};

use crate::ApiClient;

const ORDER_BASE: &str = "/api/orders/admin";

impl ApiClient {
    /// Moves an order to `status`. The server decides which transitions are
    /// allowed.
    pub async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> Result<()> {
        self.send_unit(
            Method::PATCH,
            &format!("{ORDER_BASE}/{order_id}/status"),
            Some(&OrderStatusUpdate {
                order_status: status,
            }),
        )
        .await
    }
}
