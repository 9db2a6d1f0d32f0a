use std::sync::Arc;

use axum::routing::get;
use axum::Json;
use axum::Router;
use chrono::Duration;
use person_service::domain::auth::service::AuthService;
use person_service::domain::person::service::PersonService;
use person_service::inbound::http::router::create_router;
use person_service::outbound::github::GithubRepoClient;
use person_service::outbound::repositories::InMemoryPersonRepository;
use person_service::outbound::repositories::InMemoryRevokedTokenRepository;
use person_service::outbound::repositories::InMemoryUserRepository;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with a stub GitHub upstream
    pub async fn spawn() -> Self {
        let github_url = spawn_stub_github().await;
        Self::spawn_with_github(&github_url).await
    }

    /// Spawn the application pointed at the given GitHub repos URL
    pub async fn spawn_with_github(github_repos_url: &str) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let revoked_token_repository = Arc::new(InMemoryRevokedTokenRepository::new());
        let person_repository = Arc::new(InMemoryPersonRepository::new());

        let auth_service = Arc::new(AuthService::new(
            user_repository,
            revoked_token_repository,
            JWT_SECRET,
            Duration::hours(24),
        ));
        let person_service = Arc::new(PersonService::new(person_repository));
        let git_repository =
            Arc::new(GithubRepoClient::new(github_repos_url).expect("Failed to build git client"));

        let router = create_router(auth_service, person_service, git_repository);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and log in, returning the access token
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/register")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(
            response.status().is_success(),
            "register failed: {}",
            response.status()
        );

        let response = self
            .post("/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(
            response.status().is_success(),
            "login failed: {}",
            response.status()
        );

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }
}

/// Stand-in for the GitHub repos endpoint. The entry without a name is
/// expected to be skipped by the client.
async fn spawn_stub_github() -> String {
    let router = Router::new().route(
        "/repos",
        get(|| async {
            Json(serde_json::json!([
                { "name": "person-service", "full_name": "mrgadotti/person-service" },
                { "name": "dotfiles", "full_name": "mrgadotti/dotfiles" },
                { "full_name": "mrgadotti/unnamed" }
            ]))
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub error");
    });

    format!("http://127.0.0.1:{}/repos", port)
}
