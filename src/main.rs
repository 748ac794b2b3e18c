use anyhow::Result;
use bulletin_core::application::{
    dto::SessionEvent,
    ports::{
        security::{PasswordHasher, SessionTokenGenerator},
        session::SessionStore,
        time::Clock,
    },
    services::{ApplicationServices, Repositories, SecurityPorts},
    timeout::StoreDeadline,
};
use bulletin_core::config::AppConfig;
use bulletin_core::infrastructure::{
    database,
    repositories::{
        PostgresAnalystRepository, PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresNewsletterReadRepository, PostgresNewsletterWriteRepository,
    },
    security::{
        password::Argon2PasswordHasher, session_store::InMemorySessionStore,
        token::RandomTokenGenerator,
    },
    time::SystemClock,
};
use bulletin_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::{signal, sync::broadcast};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.store_timeout()).await?;
    database::run_migrations(&pool).await?;

    let repos = Repositories {
        article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        newsletter_read: Arc::new(PostgresNewsletterReadRepository::new(pool.clone())),
        newsletter_write: Arc::new(PostgresNewsletterWriteRepository::new(pool.clone())),
        analysts: Arc::new(PostgresAnalystRepository::new(pool.clone())),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_generator: Arc<dyn SessionTokenGenerator> = Arc::new(RandomTokenGenerator);
    let sessions = Arc::new(InMemorySessionStore::new());
    let session_store: Arc<dyn SessionStore> = sessions.clone();
    let session_ttl = chrono::Duration::from_std(config.session_ttl())?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    tokio::spawn(sessions.purge_periodically(Arc::clone(&clock), SESSION_PURGE_INTERVAL));

    let services = Arc::new(ApplicationServices::new(
        repos,
        SecurityPorts {
            password_hasher,
            token_generator,
            session_store,
            session_ttl,
        },
        clock,
        StoreDeadline::new(config.store_timeout()),
    ));

    tokio::spawn(log_session_events(services.auth.subscribe()));

    if let Some(analyst) = config.bootstrap_analyst() {
        let created = services
            .auth
            .ensure_analyst(&analyst.email, &analyst.password, None)
            .await?;
        if !created {
            tracing::debug!(email = %analyst.email, "bootstrap analyst already present");
        }
    }

    let state = HttpState::new(Arc::clone(&services), config.allowed_origins().to_vec());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn log_session_events(mut events: broadcast::Receiver<SessionEvent>) {
    loop {
        match events.recv().await {
            Ok(SessionEvent::SignedIn { session_id, email }) => {
                tracing::info!(%session_id, %email, "session started");
            }
            Ok(SessionEvent::SignedOut { session_id, email }) => {
                tracing::info!(%session_id, %email, "session ended");
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "session event log lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
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
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
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
