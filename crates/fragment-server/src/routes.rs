// ABOUTME: Route assembly for the fragment server.
// ABOUTME: Mounts /config.json and falls back to the static bundle for every other path.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::resource::SharedResource;

/// Build the complete router: the configuration resource at /config.json
/// and the compiled front-end bundle everywhere else.
///
/// POST is only registered when the resource is writable, so a read-only
/// instance answers POST /config.json with 405 and never exposes the write
/// path at all. The two route groups share no state.
pub fn create_router(resource: SharedResource, assets_dir: &Path) -> Router {
    let mut config = get(api::get_config).options(api::options_config);
    if resource.writable() {
        config = config.post(api::post_config);
    }

    Router::new()
        .route("/config.json", config)
        .fallback_service(ServeDir::new(assets_dir).precompressed_gzip())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(resource)
}
