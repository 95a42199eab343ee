use std::sync::Arc;

use mdwiki::config;
use mdwiki::logger;
use mdwiki::server;
use mdwiki::store::FileStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    // Create the Tokio runtime, sizing the thread pool from the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    let store = Arc::new(FileStore::open(cfg.storage.entries_dir.as_str())?);
    let listener = server::create_listener(addr)?;

    let state = Arc::new(config::AppState::new(cfg, store));
    logger::log_server_start(&addr, &state.config);

    server::run(listener, state).await
}
