mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::auth_service::{AuthBackend, HostedAuthClient};

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Auth is optional: pages still render, the proxy answers 503.
    let auth: Option<Arc<dyn AuthBackend>> = match config.auth.map(HostedAuthClient::new) {
        Some(Ok(client)) => {
            tracing::info!("auth service client initialized");
            Some(Arc::new(client) as Arc<dyn AuthBackend>)
        }
        Some(Err(e)) => {
            tracing::warn!(error = %e, "auth service client failed to build; sign-in disabled");
            None
        }
        None => {
            tracing::warn!("AUTH_SERVICE_URL/AUTH_SERVICE_KEY not set; sign-in disabled");
            None
        }
    };

    let state = state::AppState::new(auth, config.cookie_secure);
    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "adpanel listening");
    axum::serve(listener, app).await.expect("server failed");
}
