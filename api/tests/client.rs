//! Exercises `ApiClient` against a throwaway local server.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use api::{ApiClient, ContactMessages, MemoryTokenStore, Session, TokenStore, Users};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, patch, post},
};
use secrecy::ExposeSecret;
use serde_json::{Value, json};
use types::{
    Credentials, DocumentKind, Error, ListQuery, NoFilters, OrderStatus, PasswordReset,
    PolicyForm, Role, UserFilters, ValidationError,
};
use url::Url;

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Value>>>);

impl Recorder {
    fn push(&self, entry: Value) {
        self.0.lock().expect("recorder lock").push(entry);
    }

    fn entries(&self) -> Vec<Value> {
        self.0.lock().expect("recorder lock").clone()
    }
}

fn bearer(headers: &HeaderMap) -> Value {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| Value::String(v.to_string()))
        .unwrap_or(Value::Null)
}

async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, router).await.expect("serve") });
    Url::parse(&format!("http://{addr}")).expect("server url")
}

fn signed_in(base: Url) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::with_token("tok-123"));
    let client = ApiClient::new(base, Session::new(store.clone()));
    (client, store)
}

#[tokio::test]
async fn list_users_sends_token_and_query() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route(
            "/api/admin/users",
            get(
                |State(rec): State<Recorder>,
                 headers: HeaderMap,
                 Query(params): Query<HashMap<String, String>>| async move {
                    rec.push(json!({ "auth": bearer(&headers), "query": params }));
                    Json(json!({
                        "success": true,
                        "data": [{
                            "_id": "7",
                            "firstName": "Anna",
                            "lastName": "Berg",
                            "email": "anna@example.com",
                            "role": "admin"
                        }],
                        "pagination": { "page": 2, "limit": 10, "total": 11, "totalPages": 2 }
                    }))
                },
            ),
        )
        .with_state(recorder.clone());
    let (client, _) = signed_in(serve(router).await);

    let mut query = ListQuery::<UserFilters>::new(10);
    query.page = 2;
    query.search = "anna".into();
    query.filters.role = Some(Role::Admin);

    let page = client.list::<Users>(&query).await.expect("list users");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "7");
    assert_eq!(page.pagination.total_pages, 2);

    let entries = recorder.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["auth"], "Bearer tok-123");
    assert_eq!(
        entries[0]["query"],
        json!({ "page": "2", "limit": "10", "search": "anna", "role": "admin" })
    );
}

#[tokio::test]
async fn bare_array_listing_is_one_page() {
    let router = Router::new().route(
        "/api/get/contact-messages",
        get(|| async {
            Json(json!([
                { "_id": "m1", "name": "Anna", "email": "anna@example.com", "message": "Hello" },
                { "_id": "m2", "name": "Ben", "email": "ben@example.com", "message": "Hi" }
            ]))
        }),
    );
    let (client, _) = signed_in(serve(router).await);

    let page = client
        .list::<ContactMessages>(&ListQuery::<NoFilters>::new(10))
        .await
        .expect("list messages");
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.pagination.total, 2);
}

#[tokio::test]
async fn failed_login_shows_server_message_and_stores_nothing() {
    let router = Router::new().route(
        "/auth/admin/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "message": "Invalid credentials" })),
            )
        }),
    );
    let store = Arc::new(MemoryTokenStore::default());
    let client = ApiClient::new(serve(router).await, Session::new(store.clone()));

    let err = client
        .login(&Credentials::new("admin@example.com", "wrong-password"))
        .await
        .expect_err("login must fail");

    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    assert!(!err.is_unauthorized());
    assert!(store.load().is_none());
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn successful_login_stores_token() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route(
            "/auth/admin/login",
            post(
                |State(rec): State<Recorder>, Json(body): Json<Value>| async move {
                    rec.push(body);
                    Json(json!({
                        "success": true,
                        "data": { "token": "fresh-token", "user": { "_id": "1", "email": "admin@example.com" } }
                    }))
                },
            ),
        )
        .with_state(recorder.clone());
    let store = Arc::new(MemoryTokenStore::default());
    let client = ApiClient::new(serve(router).await, Session::new(store.clone()));

    let data = client
        .login(&Credentials::new("admin@example.com", "correct-horse"))
        .await
        .expect("login");

    assert_eq!(data.token.expose_secret(), "fresh-token");
    assert_eq!(store.load().expect("stored").expose_secret(), "fresh-token");
    assert_eq!(
        recorder.entries(),
        vec![json!({ "email": "admin@example.com", "password": "correct-horse" })]
    );
}

#[tokio::test]
async fn rejected_token_ends_the_session() {
    let router = Router::new().route(
        "/api/admin/users",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "message": "jwt expired" }))) }),
    );
    let (client, store) = signed_in(serve(router).await);

    let err = client
        .list::<Users>(&ListQuery::new(10))
        .await
        .expect_err("must be rejected");

    assert_eq!(err, Error::Unauthorized("jwt expired".into()));
    assert!(store.load().is_none());
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn short_reset_password_never_reaches_the_server() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route(
            "/api/admin/users/{id}/reset-password",
            patch(|State(rec): State<Recorder>, Path(id): Path<String>| async move {
                rec.push(json!(id));
                Json(json!({ "success": true }))
            }),
        )
        .with_state(recorder.clone());
    let (client, _) = signed_in(serve(router).await);

    let reset = PasswordReset {
        new_password: "abc".into(),
        confirm_password: "abc".into(),
    };
    let err = client
        .reset_user_password("7", &reset)
        .await
        .expect_err("must be blocked");

    assert_eq!(
        err,
        Error::Validation(ValidationError::PasswordTooShort { min: 6 })
    );
    assert_eq!(
        err.user_message("Failed to reset password"),
        "Password must be at least 6 characters long"
    );
    assert!(recorder.entries().is_empty());
}

#[tokio::test]
async fn reset_password_sends_new_password() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route(
            "/api/admin/users/{id}/reset-password",
            patch(
                |State(rec): State<Recorder>, Path(id): Path<String>, Json(body): Json<Value>| async move {
                    rec.push(json!({ "id": id, "body": body }));
                    Json(json!({ "success": true, "message": "Password reset" }))
                },
            ),
        )
        .with_state(recorder.clone());
    let (client, _) = signed_in(serve(router).await);

    let reset = PasswordReset {
        new_password: "s3cret!".into(),
        confirm_password: "s3cret!".into(),
    };
    client
        .reset_user_password("7", &reset)
        .await
        .expect("reset password");

    assert_eq!(
        recorder.entries(),
        vec![json!({ "id": "7", "body": { "newPassword": "s3cret!" } })]
    );
}

#[tokio::test]
async fn delete_user_hits_item_route() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route(
            "/api/admin/users/{id}",
            axum::routing::delete(|State(rec): State<Recorder>, Path(id): Path<String>| async move {
                rec.push(json!(id));
                Json(json!({ "success": true }))
            }),
        )
        .with_state(recorder.clone());
    let (client, _) = signed_in(serve(router).await);

    client.delete_user("7").await.expect("delete user");
    assert_eq!(recorder.entries(), vec![json!("7")]);
}

#[tokio::test]
async fn unsuccessful_envelope_is_an_error() {
    let router = Router::new().route(
        "/api/orders/admin/{id}/status",
        patch(|| async {
            Json(json!({ "success": false, "message": "Cannot ship a cancelled order" }))
        }),
    );
    let (client, _) = signed_in(serve(router).await);

    let err = client
        .update_order_status("o1", OrderStatus::Shipped)
        .await
        .expect_err("must fail");
    assert_eq!(
        err,
        Error::server(Some(200), "Cannot ship a cancelled order")
    );
}

#[tokio::test]
async fn server_error_without_message_uses_fallback() {
    let router = Router::new().route(
        "/api/admin/users/{id}/toggle-status",
        patch(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let (client, _) = signed_in(serve(router).await);

    let err = client.toggle_user_status("7").await.expect_err("must fail");
    assert_eq!(err, Error::server(Some(500), "Internal Server Error"));
}

#[tokio::test]
async fn missing_document_is_none() {
    let router = Router::new().route(
        "/api/terms",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "message": "Terms not found" }))) }),
    );
    let (client, _) = signed_in(serve(router).await);

    let document = client
        .get_document(DocumentKind::Terms)
        .await
        .expect("missing is not an error");
    assert!(document.is_none());
}

#[tokio::test]
async fn save_document_replaces_whole_record() {
    let recorder = Recorder::default();
    let router = Router::new()
        .route(
            "/api/privacy-policy",
            axum::routing::put(
                |State(rec): State<Recorder>, Json(body): Json<Value>| async move {
                    rec.push(body.clone());
                    let mut stored = body;
                    stored["_id"] = json!("d1");
                    Json(json!({ "success": true, "data": stored }))
                },
            ),
        )
        .with_state(recorder.clone());
    let (client, _) = signed_in(serve(router).await);

    let form = PolicyForm {
        title: "Privacy Policy".into(),
        content: "We keep your data safe.".into(),
        version: "2.0".into(),
        effective_date: "2024-06-01".into(),
        last_modified_by: "admin@example.com".into(),
        changes_summary: "Rewrote section 3".into(),
        is_active: true,
    };
    let saved = client
        .save_document(DocumentKind::Privacy, &form)
        .await
        .expect("save document");

    assert_eq!(saved.id, "d1");
    assert_eq!(saved.version, "2.0");
    let sent = recorder.entries();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["changesSummary"], "Rewrote section 3");
    assert_eq!(sent[0]["effectiveDate"], "2024-06-01");
}

#[tokio::test]
async fn dashboard_stats_tolerate_nulls() {
    let router = Router::new().route(
        "/api/admin/dashboard/stats",
        get(|| async {
            Json(json!({ "success": true, "data": { "totalUsers": 40, "totalOrders": null } }))
        }),
    );
    let (client, _) = signed_in(serve(router).await);

    let stats = client.dashboard_stats().await.expect("stats");
    assert_eq!(stats.total_users, 40);
    assert_eq!(stats.total_orders, 0);
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let users = Router::new().route(
        "/api/admin/users",
        get(|| async { Json(json!({ "success": true, "data": [] })) }),
    );
    let router = Router::new().nest("/backend", users);
    let base = serve(router).await.join("backend").expect("prefixed url");
    let (client, _) = signed_in(base);

    let page = client
        .list::<Users>(&ListQuery::<UserFilters>::new(10))
        .await
        .expect("list through prefix");
    assert!(page.items.is_empty());
    assert_eq!(client.base_url().path(), "/backend/");
}
