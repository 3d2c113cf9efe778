mod config;
mod errors;
mod forms;
mod handlers;
mod models;
mod repositories;
mod views;

use std::env;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::{error, info};

use crate::repositories::{BlogRepository, PgBlogRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let pg_pool = match config::get_pg_pool() {
        Ok(p) => p,
        Err(e) => {
            error!("failed to create PG pool: {}", e);
            std::process::exit(1);
        }
    };

    let repo: Arc<dyn BlogRepository> = Arc::new(PgBlogRepository::new(pg_pool));
    let repo_data = web::Data::from(repo);

    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_address = format!("0.0.0.0:{}", port);
    info!("starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(repo_data.clone())
            .configure(handlers::blog_handlers::routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
