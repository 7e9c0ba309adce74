use std::process;

use actix_web::{App, HttpServer, middleware, web};
use config::{Config, Environment, File};

use vendor_catalog::bootstrap::load_sample_data;
use vendor_catalog::db::{establish_connection_pool, run_migrations};
use vendor_catalog::models::config::ServerConfig;
use vendor_catalog::repository::DieselRepository;
use vendor_catalog::routes;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run database migrations: {e}");
        process::exit(1);
    }

    let repo = DieselRepository::new(pool);

    if server_config.seed_on_startup {
        load_sample_data(&repo);
    }

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Starting server on {}:{}", bind_address.0, bind_address.1);

    let repo = web::Data::new(repo);
    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .app_data(server_config.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
