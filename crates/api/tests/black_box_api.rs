use reqwest::StatusCode;
use serde_json::{json, Value};

use svcmarket_api::config::ApiConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, fresh stores, ephemeral port.
        let app = svcmarket_api::app::build_app(&ApiConfig::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn register(client: &reqwest::Client, srv: &TestServer, email: &str) -> Value {
    let res = client
        .post(srv.url("/register"))
        .json(&json!({
            "email": email,
            "password": "s3cret",
            "firstName": "Amara",
            "lastName": "Okafor",
            "phone": "+234-555-0100",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

fn is_suffix(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}

#[tokio::test]
async fn health_and_roles_are_public() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Server is running");
    assert!(body["timestamp"].is_string());

    let res = client.get(srv.url("/roles")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["Customer", "BusinessOwner", "ServiceProvider", "Wholesaler"]);
}

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for path in ["/profile", "/dashboard"] {
        let res = client.get(srv.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Authentication required");
    }

    let res = client
        .get(srv.url("/profile"))
        .bearer_auth("not-a-session")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid or expired token");
    assert!(body.get("user").is_none());
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    register(&client, &srv, "dup@example.com").await;

    let res = client
        .post(srv.url("/register"))
        .json(&json!({ "email": "dup@example.com", "password": "other" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "User already exists with this email");

    // First password still works; nothing was overwritten.
    let res = client
        .post(srv.url("/login"))
        .json(&json!({ "email": "dup@example.com", "password": "s3cret" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    register(&client, &srv, "login@example.com").await;

    for (email, password) in [("login@example.com", "wrong"), ("ghost@example.com", "s3cret")] {
        let res = client
            .post(srv.url("/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Invalid email or password");
        assert!(body.get("token").is_none());
    }
}

#[tokio::test]
async fn malformed_body_uses_error_envelope() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/register"))
        .json(&json!({ "email": "missing-password@example.com" }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn business_owner_onboarding_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let registered = register(&client, &srv, "owner@example.com").await;
    assert_eq!(registered["success"], true);
    assert_eq!(registered["user"]["profileCompleted"], false);
    assert!(registered["user"].get("password").is_none());
    let token = registered["token"].as_str().unwrap().to_string();

    // Before completion: explicit "no profile".
    let res = client.get(srv.url("/profile")).bearer_auth(&token).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["user"]["profileCompleted"], false);
    assert!(body["profile"].is_null());

    // Login reports that completion is still needed and issues a new token.
    let res = client
        .post(srv.url("/login"))
        .json(&json!({ "email": "owner@example.com", "password": "s3cret" }))
        .send()
        .await
        .unwrap();
    let login: Value = res.json().await.unwrap();
    assert_eq!(login["needsProfileCompletion"], true);
    let login_token = login["token"].as_str().unwrap().to_string();
    assert_ne!(login_token, token);

    // Complete with the login token; the registration token stays valid.
    let res = client
        .post(srv.url("/complete-profile"))
        .bearer_auth(&login_token)
        .json(&json!({
            "role": "BusinessOwner",
            "profileData": { "personalInfo": { "businessName": "Xylo Yards" } },
            "businessInitials": "xy",
            "userChosenNumber": 7,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let done: Value = res.json().await.unwrap();
    assert_eq!(done["token"], login_token.as_str());
    let unique_id = done["profile"]["uniqueId"].as_str().unwrap().to_string();
    assert!(unique_id.starts_with("XY-0007-"), "{unique_id}");
    assert!(is_suffix(&unique_id["XY-0007-".len()..]), "{unique_id}");
    assert_eq!(done["user"]["uniqueId"], unique_id.as_str());
    assert_eq!(done["user"]["role"], "BusinessOwner");
    assert_eq!(done["user"]["profileCompleted"], true);
    assert_eq!(done["profile"]["userId"], registered["user"]["id"]);
    assert_eq!(done["profile"]["profileData"]["personalInfo"]["businessName"], "Xylo Yards");

    // Second completion is rejected.
    let res = client
        .post(srv.url("/complete-profile"))
        .bearer_auth(&token)
        .json(&json!({ "role": "Customer", "profileData": {} }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Profile already exists");

    // Profile is visible through the older token.
    let res = client.get(srv.url("/profile")).bearer_auth(&token).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["user"]["profileCompleted"], true);
    assert_eq!(body["profile"]["uniqueId"], unique_id.as_str());
    assert_eq!(body["profile"]["role"], "BusinessOwner");

    // And login no longer asks for completion.
    let res = client
        .post(srv.url("/login"))
        .json(&json!({ "email": "owner@example.com", "password": "s3cret" }))
        .send()
        .await
        .unwrap();
    let login: Value = res.json().await.unwrap();
    assert_eq!(login["needsProfileCompletion"], false);
    assert_eq!(login["user"]["uniqueId"], unique_id.as_str());
}

#[tokio::test]
async fn customer_gets_role_timestamp_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let registered = register(&client, &srv, "customer@example.com").await;
    let token = registered["token"].as_str().unwrap();

    let res = client
        .post(srv.url("/complete-profile"))
        .bearer_auth(token)
        .json(&json!({ "role": "Customer", "profileData": { "personalInfo": {} } }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let done: Value = res.json().await.unwrap();

    let unique_id = done["profile"]["uniqueId"].as_str().unwrap();
    let parts: Vec<&str> = unique_id.split('-').collect();
    assert_eq!(parts.len(), 3, "{unique_id}");
    assert_eq!(parts[0], "CUSTOMER");
    assert_eq!(parts[1].len(), 8);
    assert!(parts[1].bytes().all(|b| b.is_ascii_digit()));
    assert!(is_suffix(parts[2]), "{unique_id}");
}

#[tokio::test]
async fn unknown_role_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let registered = register(&client, &srv, "admin@example.com").await;
    let token = registered["token"].as_str().unwrap();

    let res = client
        .post(srv.url("/complete-profile"))
        .bearer_auth(token)
        .json(&json!({ "role": "Admin", "profileData": {} }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client.get(srv.url("/profile")).bearer_auth(token).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert!(body["profile"].is_null());
}

#[tokio::test]
async fn dashboard_returns_placeholder_metrics() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let registered = register(&client, &srv, "dash@example.com").await;
    let token = registered["token"].as_str().unwrap();

    let res = client.get(srv.url("/dashboard")).bearer_auth(token).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["dashboardData"]["user"]["email"], "dash@example.com");
    assert!(body["dashboardData"]["stats"]["totalBookings"].is_u64());
    assert!(body["dashboardData"]["stats"]["rating"].is_number());
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .request(reqwest::Method::OPTIONS, srv.url("/complete-profile"))
        .header("Origin", "http://localhost:8080")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "authorization,content-type")
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());
    assert_eq!(
        res.headers()["access-control-allow-origin"],
        "http://localhost:8080"
    );
    assert_eq!(res.headers()["access-control-allow-credentials"], "true");
}
