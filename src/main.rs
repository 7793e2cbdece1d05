use anyhow::Result;
use rt_celebs::application::services::ApplicationServices;
use rt_celebs::config::AppConfig;
use rt_celebs::domain::{content::ContentRecordReadRepository, content_type::ContentTypeRegistry};
use rt_celebs::infrastructure::{
    database,
    repositories::{SqliteContentRecordRepository, SqliteContentTypeRegistry},
};
use rt_celebs::presentation::http::{
    middleware::SiteOrigin, routes::build_router, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

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
    let site_origin = SiteOrigin::from_site_url(config.site_url())?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let registry: Arc<dyn ContentTypeRegistry> =
        Arc::new(SqliteContentTypeRegistry::new(pool.clone()));
    let record_repo: Arc<dyn ContentRecordReadRepository> =
        Arc::new(SqliteContentRecordRepository::new(pool));

    let services = Arc::new(
        ApplicationServices::bootstrap(registry, record_repo, config.site_url().clone()).await?,
    );
    tracing::info!(
        content_type = %services.content_type().slug,
        site_origin = site_origin.as_str(),
        "content type ready"
    );

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, site_origin);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
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
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
