use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;

use prices_service::config::ServerConfig;
use prices_service::repository::DieselRepository;
use prices_service::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    log::info!("Listening on {}:{}", config.address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(routes::configure)
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((config.address, config.port))?
    .run()
    .await
}
