use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    Extension, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{config::Config, handlers::posts::posts_handler, AppState, Error, Result};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(posts_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}

/// Only `FRONTEND_URL` may call the API when it is set. Without it,
/// production refuses cross-origin calls and other environments mirror
/// whatever origin asks.
pub fn configure_cors(config: &Config) -> Result<CorsLayer> {
    let origin = match (&config.frontend_url, config.production) {
        (Some(url), _) => {
            let origin = HeaderValue::from_str(url)
                .map_err(|_| Error::Config(format!("FRONTEND_URL inválida: {}", url)))?;
            AllowOrigin::list([origin])
        }
        (None, true) => {
            warn!("FRONTEND_URL não definida, requisições cross-origin desabilitadas");
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
        (None, false) => AllowOrigin::mirror_request(),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
