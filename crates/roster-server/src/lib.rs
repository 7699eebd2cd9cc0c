pub mod error;
pub mod routes;
pub mod state;

use axum::response::Redirect;
use axum::routing::{delete, get, post};
use axum::Router;
use roster_core::RosterManager;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Listen address and optional static UI for the roster server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub open_browser: bool,
}

/// Build the axum Router with all API routes and middleware.
/// Used by `serve_on()` and available for integration testing.
///
/// When `static_dir` is set its files are served under `/static` and `/`
/// redirects to `/static/index.html`.
pub fn build_router(roster: Arc<RosterManager>, static_dir: Option<&Path>) -> Router {
    let app_state = state::AppState::new(roster);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/activities", get(routes::activities::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(routes::activities::signup),
        )
        .route(
            "/activities/{activity_name}/signup/{email}",
            delete(routes::activities::unregister),
        );

    if let Some(dir) = static_dir {
        router = router
            .route(
                "/",
                get(|| async { Redirect::temporary("/static/index.html") }),
            )
            .nest_service("/static", ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Serve the roster API on a pre-bound listener.
///
/// The caller binds `config.host:config.port` itself so it can read the
/// actual port before starting (useful when `port = 0` and the OS picks a
/// free port).
pub async fn serve_on(
    roster: Arc<RosterManager>,
    listener: tokio::net::TcpListener,
    config: &ServerConfig,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let activities = roster.len();
    let app = build_router(roster, config.static_dir.as_deref());

    tracing::info!(activities, "roster server listening on http://localhost:{actual_port}");

    if config.open_browser {
        let url = match config.static_dir {
            Some(_) => format!("http://localhost:{actual_port}/"),
            None => format!("http://localhost:{actual_port}/activities"),
        };
        if let Err(e) = open::that(&url) {
            tracing::warn!(error = %e, "could not open browser");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
