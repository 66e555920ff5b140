//! docshelf - Entry Point
//!
//! A small web server for browsing a confined library of PDF and Markdown
//! documents.

use log::{error, info};

use docshelf::Server;
use docshelf::server::config::ServerConfig;

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Launching document library server...");

    let server = Server::new(config).await;
    server.start().await;
}
