//! End-to-end shell flows against a stub backend: sign-in, role-gated
//! surfaces, and the forced logout a 401 triggers mid-session.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use propkit_auth::MemorySessionStore;
use propkit_client::ApiError;
use propkit_shell::{AppShell, DashboardVariant, Navigator, Route};

async fn login_handler(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
    if body.get("password").and_then(Value::as_str) != Some("correct-horse") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        );
    }

    let role = if email.starts_with("admin") { "ADMIN" } else { "STAFF" };
    (
        StatusCode::OK,
        Json(json!({
            "token": "tok-shell-1",
            "data": {
                "user": {
                    "id": "018f2a3e-5c1d-7a00-8000-000000000001",
                    "fullName": "Ada Stone",
                    "email": email,
                    "role": role,
                    "status": "ACTIVE",
                }
            }
        })),
    )
}

async fn properties_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Token no longer valid" })),
    )
}

async fn tenants_handler() -> Json<Value> {
    Json(json!({ "data": { "tenants": [] } }))
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        propkit_observability::init();
        let app = Router::new()
            .route("/auth/login", post(login_handler))
            .route("/properties", get(properties_handler))
            .route("/tenants", get(tenants_handler));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn shell_against(server: &TestServer) -> AppShell {
    AppShell::assemble(server.base_url.clone(), Arc::new(MemorySessionStore::new())).unwrap()
}

#[tokio::test]
async fn successful_sign_in_lands_on_the_dashboard() {
    let server = TestServer::spawn().await;
    let shell = shell_against(&server).await;

    shell.sign_in("staff@example.com", "correct-horse").await.unwrap();

    assert!(shell.auth().is_authenticated());
    assert_eq!(shell.navigator().current(), Route::Dashboard);
}

#[tokio::test]
async fn staff_gets_the_staff_surface_without_account_management() {
    let server = TestServer::spawn().await;
    let shell = shell_against(&server).await;

    shell.sign_in("staff@example.com", "correct-horse").await.unwrap();

    assert_eq!(shell.dashboard(), Some(DashboardVariant::Staff));
    assert!(shell.navigation().iter().all(|i| i.route != Route::Accounts));
}

#[tokio::test]
async fn admin_gets_the_admin_surface_with_account_management() {
    let server = TestServer::spawn().await;
    let shell = shell_against(&server).await;

    shell.sign_in("admin@example.com", "correct-horse").await.unwrap();

    assert_eq!(shell.dashboard(), Some(DashboardVariant::Admin));
    assert!(shell.navigation().iter().any(|i| i.route == Route::Accounts));
}

#[tokio::test]
async fn rejected_sign_in_keeps_the_login_screen_and_no_session() {
    let server = TestServer::spawn().await;
    let shell = shell_against(&server).await;

    let err = shell.sign_in("staff@example.com", "wrong").await.unwrap_err();

    assert!(matches!(
        err,
        propkit_shell::ShellError::Api(ApiError::Unauthorized { .. })
    ));
    assert!(!shell.auth().is_authenticated());
    assert_eq!(shell.navigator().current(), Route::Login);
}

#[tokio::test]
async fn a_401_mid_session_forces_the_shell_back_to_login() {
    let server = TestServer::spawn().await;
    let shell = shell_against(&server).await;

    shell.sign_in("staff@example.com", "correct-horse").await.unwrap();
    shell.open(Route::Properties);
    assert_eq!(shell.navigator().current(), Route::Properties);

    // The screen's own fetch comes back 401.
    let err = shell.client().list_properties().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));

    assert!(!shell.auth().is_authenticated());
    assert_eq!(shell.navigator().current(), Route::Login);

    // And the next screen's fetch goes out unauthenticated.
    shell.client().list_tenants().await.unwrap();
}
