use codes_server::logger::Logger;
use codes_server::{AppState, CodesError, Config, router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), CodesError> {
    if let Err(e) = Logger::init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env()?;
    for (i, root) in config.roots.iter().enumerate() {
        log::debug!("Candidate root {}: {:?}", i + 1, root);
    }

    let state = AppState::new(&config);
    match state.resolver.resolve() {
        Ok(dir) => log::info!("Serving codes from {:?}", dir),
        Err(_) => log::warn!("No codes directory yet; requests will report the candidates"),
    }

    let app = router(state);

    let addr = config.socket_addr()?;
    log::info!("Codes server listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(CodesError::from)
}
