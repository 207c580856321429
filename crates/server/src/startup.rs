use std::{future::Future, sync::Arc};

use axum::Router;
use common::env::{ensure_parent_dir, sqlite_file_path};
use configs::{AppConfig, StorageBackend};
use service::todo::{
    repo::{JsonFileTodoRepository, SeaOrmTodoRepository},
    TodoRepository,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the configured document store and wire it into handler state.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let repo: Arc<dyn TodoRepository> = match cfg.storage.backend {
        StorageBackend::Database => {
            if let Some(file) = sqlite_file_path(&cfg.database.url) {
                ensure_parent_dir(file).await?;
            }
            let db = models::db::connect_and_migrate(&cfg.database).await?;
            Arc::new(SeaOrmTodoRepository::new(db))
        }
        StorageBackend::JsonFile => {
            let repo = JsonFileTodoRepository::open(&cfg.storage.json_path).await?;
            info!(path = %cfg.storage.json_path, "json document store opened");
            Arc::new(repo)
        }
    };
    Ok(AppState::new(repo))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Resolves on Ctrl+C (and SIGTERM on unix).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown requested");
}

/// Bind, serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let bind = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    let addr = listener.local_addr()?;
    info!(%addr, backend = ?cfg.storage.backend, "Application is running on: http://{}", addr);
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
