use std::sync::Arc;

use axum::{Router, routing::post};
use tower_http::cors::{Any, CorsLayer};

use crate::llm::LlmClient;
use crate::log;
use crate::move_api::handle_move;
use crate::server_config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub llm: Arc<LlmClient>,
}

pub async fn run_web_server(config: ServerConfig) {
    let llm = Arc::new(LlmClient::new(reqwest::Client::new(), config.llm.clone()));
    let bind_address = config.bind_address.clone();
    let state = AppState { config, llm };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/move", post(handle_move))
        .layer(cors)
        .with_state(state);

    log!("Move server listening on {}", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .expect("Failed to bind web server address");

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        log!("Shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .expect("Web server error");
}
