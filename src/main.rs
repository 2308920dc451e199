// src/main.rs
use anyhow::Result;
use quire::application::{
    ports::{
        password_policy::CompromisedPasswordChecker,
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::ApplicationServices,
};
use quire::config::{AppConfig, StorageBackend};
use quire::domain::{
    article::ArticleRepository, category::CategoryRepository, comment::CommentRepository,
    user::UserRepository,
};
use quire::infrastructure::{
    database,
    repositories::{
        InMemoryStore, PostgresArticleRepository, PostgresCategoryRepository,
        PostgresCommentRepository, PostgresUserRepository,
    },
    security::{
        password::Argon2PasswordHasher, password_list::EmbeddedCompromisedPasswordList,
        token::BiscuitTokenManager,
    },
    time::SystemClock,
};
use quire::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Repositories {
    users: Arc<dyn UserRepository>,
    articles: Arc<dyn ArticleRepository>,
    categories: Arc<dyn CategoryRepository>,
    comments: Arc<dyn CommentRepository>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let repos = open_repositories(&config).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let ttl = chrono::Duration::from_std(config.token_ttl())?;
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        ttl,
        Arc::clone(&clock),
    )?);
    let compromised: Arc<dyn CompromisedPasswordChecker> =
        Arc::new(EmbeddedCompromisedPasswordList::default());

    let services = Arc::new(ApplicationServices::new(
        repos.users,
        repos.articles,
        repos.categories,
        repos.comments,
        password_hasher,
        token_manager,
        compromised,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(storage = %config.storage(), "listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn open_repositories(config: &AppConfig) -> Result<Repositories> {
    match config.storage() {
        StorageBackend::Postgres => {
            let pool = database::init_pool(config.database_url()).await?;
            database::run_migrations(&pool).await?;
            Ok(Repositories {
                users: Arc::new(PostgresUserRepository::new(pool.clone())),
                articles: Arc::new(PostgresArticleRepository::new(pool.clone())),
                categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
                comments: Arc::new(PostgresCommentRepository::new(pool)),
            })
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on shutdown");
            let store = Arc::new(InMemoryStore::new());
            Ok(Repositories {
                users: store.clone(),
                articles: store.clone(),
                categories: store.clone(),
                comments: store,
            })
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
