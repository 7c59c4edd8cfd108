// ABOUTME: HTTP server for the fragment web app, serving the static bundle and the config resource.
// ABOUTME: Uses Axum with a shared ConfigResource guarding all access to the configuration file.

pub mod api;
pub mod auth;
pub mod error;
pub mod resource;
pub mod routes;

pub use error::ApiError;
pub use resource::{ConfigResource, SharedResource};
pub use routes::create_router;
