use std::sync::Arc;

use blog_posts_api::{
    config::Config,
    repositories::{self, PostgresRepo},
    routes::{configure_cors, create_router},
    services::posts::PostsService,
    telemetry, AppState, Result,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    if let Err(err) = run().await {
        error!("🔥 Falha ao iniciar a API: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::init()?;
    let pool = repositories::connect(&config).await?;

    let db_blog = PostgresRepo::new(pool.clone());
    let app_state = AppState {
        posts_service: PostsService::new(Arc::new(db_blog)),
    };

    let app = create_router(Arc::new(app_state)).layer(configure_cors(&config)?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("🚀 API rodando na porta {}", config.port);
    if config.production {
        info!(
            "🌐 Frontend permitido: {}",
            config
                .frontend_url
                .as_deref()
                .unwrap_or("nenhum (configurar FRONTEND_URL)")
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Servidor encerrado");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("falha ao instalar o handler de Ctrl+C: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!("falha ao instalar o handler de SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Sinal de encerramento recebido");
}
