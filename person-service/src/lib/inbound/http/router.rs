use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_person::create_person;
use super::handlers::delete_person::delete_person;
use super::handlers::get_person::get_person;
use super::handlers::list_git_repos::list_git_repos;
use super::handlers::list_persons::list_persons;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::handlers::update_person::update_person;
use crate::domain::auth::service::AuthService;
use crate::domain::person::service::PersonService;
use crate::outbound::github::GithubRepoClient;
use crate::outbound::repositories::InMemoryPersonRepository;
use crate::outbound::repositories::InMemoryRevokedTokenRepository;
use crate::outbound::repositories::InMemoryUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<InMemoryUserRepository, InMemoryRevokedTokenRepository>>,
    pub person_service: Arc<PersonService<InMemoryPersonRepository>>,
    pub git_repository: Arc<GithubRepoClient>,
}

pub fn create_router(
    auth_service: Arc<AuthService<InMemoryUserRepository, InMemoryRevokedTokenRepository>>,
    person_service: Arc<PersonService<InMemoryPersonRepository>>,
    git_repository: Arc<GithubRepoClient>,
) -> Router {
    let state = AppState {
        auth_service,
        person_service,
        git_repository,
    };

    // Protection mirrors what the handlers declare: create_person and
    // delete_person take a CurrentUser extractor, the rest are public.
    let routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/persons", post(create_person))
        .route("/persons", get(list_persons))
        .route("/persons/:person_id", get(get_person))
        .route("/persons/:person_id", put(update_person))
        .route("/persons/:person_id", delete(delete_person))
        .route("/git/repos", get(list_git_repos));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    routes
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
