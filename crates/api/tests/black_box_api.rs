use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build the app (same router as prod, in-memory store), but bind to
        // an ephemeral port.
        let app = fitclub_api::app::build_app().await;
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

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

/// Distinct, well-formed record ids for seeding payments.
fn record_id(n: u8) -> String {
    format!("{:024x}", n)
}

async fn signup(client: &reqwest::Client, base_url: &str, email: &str) -> reqwest::Response {
    client
        .post(format!("{}/signup", base_url))
        .json(&json!({ "name": "Jordan Lee", "email": email, "password": "hunter2" }))
        .send()
        .await
        .unwrap()
}

fn payment_body(user_id: &str, plan: &str, amount: f64) -> serde_json::Value {
    json!({
        "firstName": "Jordan",
        "lastName": "Lee",
        "email": "jordan@example.com",
        "number": "0300123456",
        "plan": plan,
        "amount": amount,
        "userId": user_id,
    })
}

#[tokio::test]
async fn health_and_popup_respond() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/popup", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["msg"], "hello this my frist api");
}

#[tokio::test]
async fn second_signup_with_same_email_is_refused() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = signup(&client, &srv.base_url, "jordan@example.com").await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Signup successful!");

    let res = signup(&client, &srv.base_url, "jordan@example.com").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "User already exists.");
}

#[tokio::test]
async fn login_returns_record_without_password_on_exact_match() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    signup(&client, &srv.base_url, "jordan@example.com").await;

    let res = client
        .post(format!("{}/login", srv.base_url))
        .json(&json!({ "email": "jordan@example.com", "password": "hunter2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Login successful!");
    assert_eq!(body["user"]["name"], "Jordan Lee");
    assert_eq!(body["user"]["email"], "jordan@example.com");
    assert!(body["user"]["_id"].as_str().is_some());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_email() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    signup(&client, &srv.base_url, "jordan@example.com").await;

    for creds in [
        json!({ "email": "jordan@example.com", "password": "wrong" }),
        json!({ "email": "nobody@example.com", "password": "hunter2" }),
    ] {
        let res = client
            .post(format!("{}/login", srv.base_url))
            .json(&creds)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Invalid email or password");
    }
}

#[tokio::test]
async fn payment_inserts_then_updates_without_refreshing_stamp() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let id = record_id(1);

    let res = client
        .post(format!("{}/api/payment", srv.base_url))
        .json(&payment_body(&id, "basic", 1500.0))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Payment successful!");

    let res = client
        .get(format!("{}/api/userPlan/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let created: serde_json::Value = res.json().await.unwrap();
    assert_eq!(created["_id"], id.as_str());
    assert_eq!(created["plan"], "basic");
    let date = created["date"].as_str().unwrap().to_string();
    let time = created["time"].as_str().unwrap().to_string();
    assert!(!date.is_empty() && !time.is_empty());

    // Resubmission with the same id updates fields but keeps the stamp.
    let res = client
        .post(format!("{}/api/payment", srv.base_url))
        .json(&payment_body(&id, "premium", 3000.0))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Payment updated successfully!");

    let res = client
        .get(format!("{}/api/userPlan/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["plan"], "premium");
    assert_eq!(updated["amount"], json!(3000.0));
    assert_eq!(updated["date"], date.as_str());
    assert_eq!(updated["time"], time.as_str());

    // Still exactly one record for that id.
    let res = client
        .get(format!("{}/api/payment", srv.base_url))
        .send()
        .await
        .unwrap();
    let all: serde_json::Value = res.json().await.unwrap();
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn payment_with_missing_or_malformed_id_is_a_handled_failure() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut body = payment_body("ignored", "basic", 1500.0);
    body.as_object_mut().unwrap().remove("userId");
    let res = client
        .post(format!("{}/api/payment", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Error saving data");

    let res = client
        .post(format!("{}/api/payment", srv.base_url))
        .json(&payment_body("not-a-record-id", "basic", 1500.0))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Error saving data");

    // Nothing was stored.
    let res = client
        .get(format!("{}/api/payment", srv.base_url))
        .send()
        .await
        .unwrap();
    let all: serde_json::Value = res.json().await.unwrap();
    assert!(all.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn admin_login_accepts_only_the_exact_pair() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/admin-login", srv.base_url))
        .json(&json!({ "username": "admin", "password": "admin123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Admin logged in successfully!");

    for creds in [
        json!({ "username": "Admin", "password": "admin123" }),
        json!({ "username": "admin", "password": "ADMIN123" }),
        json!({ "username": "", "password": "" }),
        json!({ "username": "admin" }),
        json!({}),
    ] {
        let res = client
            .post(format!("{}/api/admin-login", srv.base_url))
            .json(&creds)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "creds: {creds}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Invalid admin credentials");
    }
}

#[tokio::test]
async fn payment_listing_grows_by_one_without_reordering() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (n, plan) in [(1u8, "basic"), (2, "silver"), (3, "gold")] {
        let res = client
            .post(format!("{}/api/payment", srv.base_url))
            .json(&payment_body(&record_id(n), plan, 1000.0 * n as f64))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = client
            .get(format!("{}/api/payment", srv.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let all: serde_json::Value = res.json().await.unwrap();
        let all = all.as_array().unwrap();
        assert_eq!(all.len(), n as usize);
        // Prior entries keep their positions.
        assert_eq!(all[0]["_id"], record_id(1).as_str());
    }
}

#[tokio::test]
async fn contact_listing_grows_by_one_and_keeps_duplicates() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let submission = json!({
        "firstName": "Sam",
        "lastName": "Riaz",
        "email": "sam@example.com",
        "number": "0300765432",
    });

    for expected_len in 1..=2usize {
        let res = client
            .post(format!("{}/api/contact", srv.base_url))
            .json(&submission)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["message"], "Contact form submitted successfully!");

        let res = client
            .get(format!("{}/api/contact", srv.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let all: serde_json::Value = res.json().await.unwrap();
        let all = all.as_array().unwrap();
        assert_eq!(all.len(), expected_len);
        assert_eq!(all[expected_len - 1]["firstName"], "Sam");
        assert!(all[expected_len - 1]["date"].as_str().is_some());
        assert!(all[expected_len - 1]["time"].as_str().is_some());
    }
}

#[tokio::test]
async fn user_plan_lookup_distinguishes_absent_and_malformed_ids() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Well-formed but never inserted.
    let res = client
        .get(format!("{}/api/userPlan/{}", srv.base_url, record_id(9)))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Plan not found");

    // Malformed id surfaces as a handled server error with detail.
    let res = client
        .get(format!("{}/api/userPlan/not-a-record-id", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Server error");
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn responses_carry_permissive_cors_headers() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/popup", srv.base_url))
        .header(reqwest::header::ORIGIN, "http://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
