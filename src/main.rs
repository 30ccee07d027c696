use std::sync::Arc;

use lexgate::config::{load_config, print_schema};
use lexgate::startup;
use lexgate::utils::logger::init_logging;

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--schema") {
        print_schema();
        return;
    }

    let config = Arc::new(load_config());
    init_logging(&config.logging);

    if let Err(e) = startup::run(config).await {
        tracing::error!("Server exited with error: {}", e);
        std::process::exit(1);
    }
}
