//! OrderDesk - minimal in-memory order management service
//!
//! Entry point: load config, init logging, build the store, serve HTTP.
//! The store lives exactly as long as the process; there is no teardown.

use std::sync::Arc;

use orderdesk::config::AppConfig;
use orderdesk::logging::init_logging;
use orderdesk::store::OrderStore;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let app_config = AppConfig::load(&env);
    let _log_guard = init_logging(&app_config);

    tracing::info!("Starting OrderDesk in {} env", env);

    let gateway_config = &app_config.gateway;
    let port = get_port_override().unwrap_or(gateway_config.port);

    println!("=== OrderDesk: order management gateway ===");
    println!("Gateway will listen on {}:{}", gateway_config.host, port);

    // One store per process, empty at start, discarded at shutdown
    let store = Arc::new(OrderStore::new());

    orderdesk::gateway::run_server(&gateway_config.host, port, store).await;
}
