use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use warp::Filter;

use guide::catalog::Catalog;
use guide::config::get_variable_or;
use guide::environment::{Config, Environment};
use guide::routes;
use log::{info, initialize_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let logger = initialize_logger();

    let port: u16 = get_variable_or("GUIDE_PORT", "3000")
        .parse()
        .expect("parse GUIDE_PORT as u16");
    let environment_name = get_variable_or("GUIDE_ENVIRONMENT", "development");
    let content_dir = PathBuf::from(get_variable_or("GUIDE_CONTENT_DIR", "data"));
    let assets_dir = PathBuf::from(get_variable_or("GUIDE_ASSETS_DIR", "assets"));

    info!(logger, "Starting..."; "port" => port, "environment" => &environment_name);

    let catalog = Catalog::load(&logger, &content_dir)
        .unwrap_or_else(|e| panic!("load content catalog from {}: {}", content_dir.display(), e));

    let logger = Arc::new(logger);
    let config = Config::new(environment_name, assets_dir);
    let environment = Environment::new(logger.clone(), Arc::new(catalog), config);

    let index_route = routes::make_index_route(environment.clone());
    let enhanced_route = routes::make_enhanced_route(environment.clone());
    let health_route = routes::make_health_route(environment.clone());
    let assets_route = routes::make_assets_route(environment.clone());

    let routes = index_route
        .or(enhanced_route)
        .or(health_route)
        .or(assets_route);

    let (_, server) = warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], port), async {
        tokio::signal::ctrl_c()
            .await
            .expect("listen for shutdown signal");
    });

    server.await;

    info!(logger, "Exiting gracefully...");

    Ok(())
}
