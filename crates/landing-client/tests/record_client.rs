//! Integration tests for `RecordClient` against an in-process record API stub.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use landing_client::{RecordClient, RecordConfig, RecordError};
use landing_core::lead::LeadSubmission;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base_url: String) -> RecordClient {
    RecordClient::new(RecordConfig {
        base_url,
        api_key: "secret-key".to_owned(),
        doc_id: "doc1".to_owned(),
        table_id: "Users".to_owned(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn lead() -> landing_core::lead::Lead {
    LeadSubmission {
        full_name: Some("Jane Doe".to_owned()),
        email: Some("jane@example.com".to_owned()),
        phone: None,
    }
    .validate()
    .unwrap()
}

#[tokio::test]
async fn add_lead_posts_record_with_bearer_auth() {
    type Seen = Arc<Mutex<Option<(Option<String>, Value)>>>;
    let seen: Seen = Arc::default();
    let seen_in_handler = Arc::clone(&seen);

    let app = Router::new().route(
        "/api/docs/{doc}/tables/{table}/records",
        post(
            move |Path((doc, table)): Path<(String, String)>, headers: HeaderMap, Json(body): Json<Value>| {
                let seen = Arc::clone(&seen_in_handler);
                async move {
                    assert_eq!((doc.as_str(), table.as_str()), ("doc1", "Users"));
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned);
                    *seen.lock().unwrap() = Some((auth, body));
                    Json(json!({ "records": [{ "id": 17 }] }))
                }
            },
        ),
    );
    let client = client(serve(app).await);

    let id = client.add_lead(&lead()).await.unwrap();
    assert_eq!(id, Some(17));

    let (auth, body) = seen.lock().unwrap().clone().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer secret-key"));
    assert_eq!(
        body,
        json!({ "records": [{ "fields": { "fullName": "Jane Doe", "email": "jane@example.com", "phone": "" } }] })
    );
}

#[tokio::test]
async fn add_lead_without_returned_id_is_none() {
    let app = Router::new().route(
        "/api/docs/{doc}/tables/{table}/records",
        post(|| async { Json(json!({ "records": [] })) }),
    );
    let client = client(serve(app).await);
    assert_eq!(client.add_lead(&lead()).await.unwrap(), None);
}

#[tokio::test]
async fn backend_rejection_carries_status_and_body() {
    let app = Router::new().route(
        "/api/docs/{doc}/tables/{table}/records",
        post(|| async { (StatusCode::UNAUTHORIZED, "bad key") }),
    );
    let client = client(serve(app).await);

    let err = client.add_lead(&lead()).await.unwrap_err();
    assert!(matches!(err, RecordError::Api { status_code: 401, .. }));
    assert_eq!(err.to_string(), "Grist error 401 [doc=doc1 table=Users]: bad key");
}

#[tokio::test]
async fn introspection_passes_status_through() {
    let app = Router::new()
        .route(
            "/api/docs/{doc}/tables",
            get(|| async { Json(json!({ "tables": [{ "id": "Users" }] })) }),
        )
        .route(
            "/api/docs/{doc}/tables/{table}/columns",
            get(|| async { (StatusCode::FORBIDDEN, r#"{"error":"nope"}"#) }),
        );
    let client = client(serve(app).await);

    let tables = client.list_tables().await.unwrap();
    assert_eq!(tables.status, 200);
    assert!(tables.body.contains("Users"));

    let columns = client.list_columns().await.unwrap();
    assert_eq!(columns.status, 403);
    assert_eq!(columns.body, r#"{"error":"nope"}"#);
}
