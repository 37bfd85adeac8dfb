use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;

mod config;
mod routes;

use config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine, the defaults cover local development
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    log::info!(
        "serving {} on http://{}:{}",
        config.dist_dir.display(),
        config.host,
        config.port
    );

    let addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes::register(&config))
    })
    .bind(addr.clone())
    .with_context(|| format!("cannot bind {}:{}", addr.0, addr.1))?
    .run()
    .await
    .context("server exited with an error")
}
