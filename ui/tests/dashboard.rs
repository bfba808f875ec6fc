//! Dashboard figures from a backend where one endpoint is down.

use std::sync::Arc;

use api::{ApiClient, MemoryTokenStore, Session};
use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::json;
use types::Error;
use url::Url;

async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, router).await.expect("serve") });
    Url::parse(&format!("http://{addr}")).expect("server url")
}

fn client(base: Url) -> ApiClient {
    ApiClient::new(base, Session::new(Arc::new(MemoryTokenStore::with_token("tok"))))
}

#[tokio::test]
async fn failed_analytics_keeps_stats() {
    let router = Router::new().route(
        "/api/admin/dashboard/stats",
        get(|| async { Json(json!({ "success": true, "data": { "totalUsers": 12 } })) }),
    );
    let client = client(serve(router).await);

    let fetched = ui::fetch_dashboard(&client).await;
    assert_eq!(fetched.stats.expect("stats").total_users, 12);
    assert!(matches!(
        fetched.analytics,
        Err(Error::Server { status: Some(404), .. })
    ));
}

#[tokio::test]
async fn failed_stats_still_requests_analytics() {
    let router = Router::new()
        .route(
            "/api/admin/dashboard/stats",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "stats unavailable" })),
                )
            }),
        )
        .route(
            "/api/admin/dashboard/analytics",
            get(|| async {
                Json(json!({
                    "success": true,
                    "data": { "userGrowth": [{ "date": "2024-05", "count": 3 }] }
                }))
            }),
        );
    let client = client(serve(router).await);

    let fetched = ui::fetch_dashboard(&client).await;
    assert!(fetched.stats.is_err());
    let analytics = fetched.analytics.expect("analytics");
    assert_eq!(analytics.user_growth.len(), 1);
    assert_eq!(analytics.user_growth[0].count, 3);
}
