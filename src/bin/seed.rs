use std::sync::Arc;

use blog_posts_api::{
    config::Config,
    repositories::{self, PostgresRepo},
    seed,
    services::posts::PostsService,
    telemetry, Result,
};
use tracing::error;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    if let Err(err) = run().await {
        error!("Erro no seed: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::init()?;
    let pool = repositories::connect(&config).await?;

    let service = PostsService::new(Arc::new(PostgresRepo::new(pool.clone())));
    let result = seed::run(&service).await;

    pool.close().await;
    result.map(|_| ())
}
