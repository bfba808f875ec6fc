use types::{DashboardAnalytics, DashboardStats, Result};

use crate::ApiClient;

impl ApiClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.get("/api/admin/dashboard/stats").await
    }

    pub async fn dashboard_analytics(&self) -> Result<DashboardAnalytics> {
        self.get("/api/admin/dashboard/analytics").await
    }
}
