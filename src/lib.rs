pub use self::errors::{Error, Result};

use services::posts::PostsService;

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod seed;
pub mod services;
pub mod telemetry;

#[derive(Clone)]
pub struct AppState {
    pub posts_service: PostsService,
}
