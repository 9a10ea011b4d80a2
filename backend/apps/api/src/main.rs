//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use auth::application::{BootstrapAdminUseCase, BootstrapOutcome};
use auth::domain::repository::UserRepository;
use auth::presentation::AuthAppState;
use auth::{
    AdminBootstrap, AuthConfig, InMemoryUserRepository, PgUserRepository, auth_router_generic,
};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use mentorship::domain::repository::SessionRepository;
use mentorship::presentation::MentorshipAppState;
use mentorship::{
    InMemorySessionRepository, MentorshipConfig, PgSessionRepository, mentorship_router_generic,
};
use platform::token::MIN_SECRET_LENGTH;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_TOKEN_TTL_SECS: u64 = 36_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,mentorship=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let auth_config = load_auth_config()?;
    let mentorship_config = load_mentorship_config()?;
    tracing::info!(?mentorship_config, "Mentorship configuration loaded");

    let app = match env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()) {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_app(
                PgUserRepository::new(pool.clone()),
                PgSessionRepository::new(pool),
                auth_config,
                mentorship_config,
            )
            .await?
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory stores; data is lost on exit");
            build_app(
                InMemoryUserRepository::new(),
                InMemorySessionRepository::new(),
                auth_config,
                mentorship_config,
            )
            .await?
        }
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    let app = app.layer(TraceLayer::new_for_http()).layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Wire both routers over the given stores and ensure the admin account.
async fn build_app<U, S>(
    users: U,
    sessions: S,
    auth_config: AuthConfig,
    mentorship_config: MentorshipConfig,
) -> anyhow::Result<Router>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let auth_state = AuthAppState::new(users.clone(), auth_config);

    if let Some(admin) = auth_state.config.admin.clone() {
        bootstrap_admin(&auth_state, &admin).await?;
    }

    let tokens = auth_state.tokens.clone();
    let mentorship_state = MentorshipAppState::new(sessions, users, mentorship_config);

    Ok(Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(auth_router_generic(auth_state))
        .merge(mentorship_router_generic(mentorship_state, tokens)))
}

async fn bootstrap_admin<U>(state: &AuthAppState<U>, admin: &AdminBootstrap) -> anyhow::Result<()>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let outcome = BootstrapAdminUseCase::new(state.repo.clone(), state.config.clone())
        .execute(admin)
        .await
        .map_err(|e| anyhow::anyhow!("admin bootstrap failed: {e}"))?;

    match outcome {
        BootstrapOutcome::Created(user_id) => {
            tracing::info!(%user_id, "Admin account created");
        }
        BootstrapOutcome::AlreadyPresent(user_id) => {
            tracing::info!(%user_id, "Admin account already present");
        }
    }

    Ok(())
}

fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = match env::var("JWT_SECRET") {
        Ok(secret) => {
            anyhow::ensure!(
                secret.len() >= MIN_SECRET_LENGTH,
                "JWT_SECRET must be at least {MIN_SECRET_LENGTH} bytes"
            );
            AuthConfig {
                jwt_secret: secret.into_bytes(),
                ..AuthConfig::default()
            }
        }
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("JWT_SECRET not set, using a random secret; tokens die with the process");
            AuthConfig::development()
        }
        Err(_) => anyhow::bail!("JWT_SECRET must be set in production"),
    };

    let ttl_secs = match env::var("TOKEN_TTL_SECS") {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .context("TOKEN_TTL_SECS must be a positive integer")?,
        Err(_) => DEFAULT_TOKEN_TTL_SECS,
    };
    anyhow::ensure!(ttl_secs > 0, "TOKEN_TTL_SECS must be a positive integer");
    config.token_ttl = Duration::from_secs(ttl_secs);

    config.password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|pepper| !pepper.is_empty())
        .map(String::into_bytes);

    config.admin = match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) {
        (Ok(email), Ok(password)) => Some(AdminBootstrap { email, password }),
        (Err(_), Err(_)) => None,
        _ => anyhow::bail!("ADMIN_EMAIL and ADMIN_PASSWORD must be set together"),
    };

    Ok(config)
}

fn load_mentorship_config() -> anyhow::Result<MentorshipConfig> {
    let mut config = MentorshipConfig::default();

    if let Ok(raw) = env::var("MENTEE_ROLE_POLICY") {
        config.mentee_role_policy = raw.parse().map_err(anyhow::Error::msg)?;
    }
    if let Ok(raw) = env::var("ROLE_SOURCE") {
        config.role_source = raw.parse().map_err(anyhow::Error::msg)?;
    }
    if let Ok(raw) = env::var("ALLOW_REDECIDE") {
        config.allow_redecide = raw
            .trim()
            .parse()
            .context("ALLOW_REDECIDE must be true or false")?;
    }

    Ok(config)
}
