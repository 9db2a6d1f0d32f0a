use std::sync::Arc;

use chrono::Duration;
use person_service::config::Config;
use person_service::domain::auth::service::AuthService;
use person_service::domain::person::service::PersonService;
use person_service::inbound::http::router::create_router;
use person_service::outbound::github::GithubRepoClient;
use person_service::outbound::repositories::InMemoryPersonRepository;
use person_service::outbound::repositories::InMemoryRevokedTokenRepository;
use person_service::outbound::repositories::InMemoryUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "person_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "person-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        github_repos_url = %config.github.repos_url,
        "Configuration loaded"
    );

    let user_repository = Arc::new(InMemoryUserRepository::new());
    let revoked_token_repository = Arc::new(InMemoryRevokedTokenRepository::new());
    let person_repository = Arc::new(InMemoryPersonRepository::new());

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        revoked_token_repository,
        config.jwt.secret.as_bytes(),
        Duration::hours(config.jwt.expiration_hours),
    ));
    let person_service = Arc::new(PersonService::new(person_repository));
    let git_repository = Arc::new(GithubRepoClient::new(config.github.repos_url.clone())?);

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(auth_service, person_service, git_repository);
    axum::serve(http_listener, application).await?;

    Ok(())
}
